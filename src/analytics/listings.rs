/// Trending and new-listing feed remapping

use crate::core::ListingEntry;
use crate::providers::payloads::ListingItem;

pub const UNKNOWN_NAME: &str = "Unknown";
pub const UNKNOWN_SYMBOL: &str = "???";

pub struct ListingRanker;

impl ListingRanker {
    /// Keeps provider order; rank is the provider's own when given, else the 1-based position.
    pub fn rank(items: Vec<ListingItem>) -> Vec<ListingEntry> {
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                let rank = item
                    .rank
                    .filter(|r| *r >= 1.0)
                    .map(|r| r as u32)
                    .unwrap_or((i + 1) as u32);

                ListingEntry {
                    rank,
                    address: item.address.unwrap_or_default(),
                    name: item.name.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
                    symbol: item.symbol.unwrap_or_else(|| UNKNOWN_SYMBOL.to_string()),
                    price: item.price.unwrap_or(0.0),
                    price_change_24h: item.price_change24h_percent,
                    market_cap: item.mc.unwrap_or(0.0),
                    liquidity: item.liquidity.unwrap_or(0.0),
                    volume_24h: item.v24h_usd.unwrap_or(0.0),
                    image: item.logo_uri,
                    created_at: item.created_at,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(address: &str, rank: Option<f64>) -> ListingItem {
        ListingItem {
            address: Some(address.to_string()),
            rank,
            ..ListingItem::default()
        }
    }

    #[test]
    fn test_positional_rank_preserves_order() {
        let ranked = ListingRanker::rank(vec![item("c", None), item("a", None), item("b", None)]);
        let view: Vec<(u32, &str)> = ranked.iter().map(|e| (e.rank, e.address.as_str())).collect();
        assert_eq!(view, vec![(1, "c"), (2, "a"), (3, "b")]);
    }

    #[test]
    fn test_provider_rank_wins() {
        let ranked = ListingRanker::rank(vec![item("x", Some(7.0)), item("y", None)]);
        assert_eq!(ranked[0].rank, 7);
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn test_defaults() {
        let ranked = ListingRanker::rank(vec![ListingItem::default()]);
        let entry = &ranked[0];
        assert_eq!(entry.name, "Unknown");
        assert_eq!(entry.symbol, "???");
        assert_eq!(entry.price, 0.0);
        assert_eq!(entry.market_cap, 0.0);
        assert_eq!(entry.price_change_24h, None);
        assert_eq!(entry.image, None);
    }

    #[test]
    fn test_field_mapping() {
        let ranked = ListingRanker::rank(vec![ListingItem {
            address: Some("mint".to_string()),
            name: Some("Bonk".to_string()),
            symbol: Some("BONK".to_string()),
            price: Some(0.00002),
            price_change24h_percent: Some(-3.5),
            v24h_usd: Some(1_000.0),
            liquidity: Some(2_000.0),
            mc: Some(3_000.0),
            logo_uri: Some("https://img".to_string()),
            created_at: Some(1_700_000_000),
            rank: None,
        }]);
        let entry = &ranked[0];
        assert_eq!(entry.symbol, "BONK");
        assert_eq!(entry.price_change_24h, Some(-3.5));
        assert_eq!(entry.volume_24h, 1_000.0);
        assert_eq!(entry.liquidity, 2_000.0);
        assert_eq!(entry.market_cap, 3_000.0);
        assert_eq!(entry.image.as_deref(), Some("https://img"));
    }
}
