/// Trending and new-listing feeds

use std::sync::Arc;

use tracing::{info, instrument};

use crate::analytics::ListingRanker;
use crate::core::{EngineResult, ListingEntry};
use crate::providers::payloads::{self, ListingResponse};
use crate::providers::{ProviderClient, ProviderQuery};

pub struct ListingFeed {
    provider: Arc<dyn ProviderClient>,
    limit: usize,
}

impl ListingFeed {
    pub fn new(provider: Arc<dyn ProviderClient>, limit: usize) -> Self {
        Self { provider, limit }
    }

    #[instrument(skip(self))]
    pub async fn trending(&self) -> EngineResult<Vec<ListingEntry>> {
        let body = self.provider.trending_tokens(self.limit).await?;
        let response: ListingResponse = payloads::decode(ProviderQuery::Trending, body);
        let entries = ListingRanker::rank(response.into_items());
        info!(count = entries.len(), "🔥 Trending feed loaded");
        Ok(entries)
    }

    #[instrument(skip(self))]
    pub async fn new_listings(&self) -> EngineResult<Vec<ListingEntry>> {
        let body = self.provider.new_listings(self.limit).await?;
        let response: ListingResponse = payloads::decode(ProviderQuery::NewListings, body);
        let entries = ListingRanker::rank(response.into_items());
        info!(count = entries.len(), "🆕 New listings loaded");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::mock::StaticProvider;
    use serde_json::json;

    #[tokio::test]
    async fn test_trending_is_ranked() {
        let provider = Arc::new(StaticProvider::new().with(
            ProviderQuery::Trending,
            json!({ "data": { "items": [
                { "address": "a", "name": "Alpha", "symbol": "A", "price": 1.5, "priceChange24hPercent": 12.0 },
                { "address": "b", "symbol": "B", "v24hUSD": 900.0 }
            ]}}),
        ));
        let feed = ListingFeed::new(provider.clone(), 20);
        let entries = feed.trending().await.unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].price_change_24h, Some(12.0));
        assert_eq!(entries[1].rank, 2);
        assert_eq!(entries[1].name, "Unknown");
        assert_eq!(entries[1].volume_24h, 900.0);
        assert_eq!(provider.calls(), vec![(ProviderQuery::Trending, Some(20))]);
    }

    #[tokio::test]
    async fn test_new_listings_failure_is_surfaced() {
        let provider = Arc::new(StaticProvider::new().failing(ProviderQuery::NewListings, "API error: 401"));
        let feed = ListingFeed::new(provider, 20);
        let err = feed.new_listings().await.unwrap_err();
        assert_eq!(err.reason(), "API error: 401");
    }

    #[tokio::test]
    async fn test_new_listings_empty_payload() {
        let provider = Arc::new(StaticProvider::new().with(ProviderQuery::NewListings, json!({ "data": null })));
        let feed = ListingFeed::new(provider, 5);
        assert!(feed.new_listings().await.unwrap().is_empty());
    }
}
