/// Token profile fan-out and merge

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::analytics::listings::{UNKNOWN_NAME, UNKNOWN_SYMBOL};
use crate::analytics::{HolderDistribution, HolderDistributionAnalyzer, KnownWalletRegistry, RawHolder};
use crate::core::{Address, EngineResult, TokenProfile};
use crate::providers::payloads::{self, AccountInfoResponse, HoldersResponse, MarketResponse, MetadataEntry};
use crate::providers::{ProviderClient, ProviderQuery};

#[derive(Debug, Clone, PartialEq)]
struct MetadataPart {
    name: String,
    symbol: String,
    image: Option<String>,
    decimals: u8,
}

#[derive(Debug, Clone, PartialEq)]
struct SecurityPart {
    mint_authority_present: bool,
    freeze_authority_present: bool,
    supply: String,
}

#[derive(Debug, Clone, PartialEq)]
struct MarketPart {
    price: f64,
    price_change_24h: f64,
    market_cap: f64,
    liquidity: f64,
    volume_24h: f64,
    holder_count: u64,
    created_at: Option<i64>,
}

/// Issues the metadata, security, market and holder queries together and
/// merges them into one `TokenProfile`.
///
/// All four must succeed. A profile missing any part is never returned; the
/// first sub-query to fail decides the error.
pub struct TokenProfileAggregator {
    provider: Arc<dyn ProviderClient>,
    labels: Arc<dyn KnownWalletRegistry>,
    holder_sample: usize,
}

impl TokenProfileAggregator {
    pub fn new(
        provider: Arc<dyn ProviderClient>,
        labels: Arc<dyn KnownWalletRegistry>,
        holder_sample: usize,
    ) -> Self {
        Self {
            provider,
            labels,
            holder_sample,
        }
    }

    #[instrument(skip_all, fields(mint = %mint))]
    pub async fn aggregate(&self, mint: &Address) -> EngineResult<TokenProfile> {
        let joined = tokio::try_join!(
            self.provider.token_metadata(mint),
            self.provider.token_security(mint),
            self.provider.token_market(mint),
            self.provider.token_holders(mint, self.holder_sample),
        );

        let (metadata, security, market, holders) = match joined {
            Ok(parts) => parts,
            Err(e) => {
                warn!("❌ Token profile aborted: {}", e);
                return Err(e);
            }
        };

        let metadata = metadata_part(metadata);
        let security = security_part(security);
        let market = market_part(market);
        let distribution = self.holder_part(holders);

        info!(
            symbol = %metadata.symbol,
            top10 = distribution.top10_concentration_percent,
            "✅ Token profile assembled"
        );

        Ok(TokenProfile {
            address: mint.to_string(),
            name: metadata.name,
            symbol: metadata.symbol,
            image: metadata.image,
            decimals: metadata.decimals,
            mint_authority_present: security.mint_authority_present,
            freeze_authority_present: security.freeze_authority_present,
            supply: security.supply,
            price: market.price,
            price_change_24h: market.price_change_24h,
            market_cap: market.market_cap,
            liquidity: market.liquidity,
            volume_24h: market.volume_24h,
            holder_count: market.holder_count,
            created_at: market.created_at,
            top_holders: distribution.top_holders,
            top10_concentration_percent: distribution.top10_concentration_percent,
            top20_concentration_percent: distribution.top20_concentration_percent,
        })
    }

    fn holder_part(&self, body: Value) -> HolderDistribution {
        let response: HoldersResponse = payloads::decode(ProviderQuery::TokenHolders, body);
        let holders = response.into_items().into_iter().map(RawHolder::from).collect();
        HolderDistributionAnalyzer::new(self.labels.as_ref()).analyze(holders)
    }
}

fn metadata_part(body: Value) -> MetadataPart {
    // The metadata endpoint answers with one entry per requested mint
    let entry = payloads::decode_list::<MetadataEntry>(ProviderQuery::TokenMetadata, body)
        .into_iter()
        .next()
        .unwrap_or_default();

    let on_chain = entry.on_chain_metadata.and_then(|m| m.metadata).unwrap_or_default();
    let legacy = entry.legacy_metadata.unwrap_or_default();

    MetadataPart {
        name: on_chain
            .name
            .or(legacy.name)
            .unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        symbol: on_chain
            .symbol
            .or(legacy.symbol)
            .unwrap_or_else(|| UNKNOWN_SYMBOL.to_string()),
        image: on_chain.image.or(legacy.logo_uri),
        // Absent decimals read as 0 like every other missing number, not the
        // usual SPL default of 9; callers must not scale by a guessed value.
        decimals: on_chain.decimals.or(legacy.decimals).map(to_decimals).unwrap_or(0),
    }
}

fn security_part(body: Value) -> SecurityPart {
    let response: AccountInfoResponse = payloads::decode(ProviderQuery::TokenSecurity, body);
    let info = response.mint_info().unwrap_or_default();

    SecurityPart {
        mint_authority_present: info.mint_authority.is_some(),
        freeze_authority_present: info.freeze_authority.is_some(),
        supply: info.supply.unwrap_or_else(|| "0".to_string()),
    }
}

fn market_part(body: Value) -> MarketPart {
    let response: MarketResponse = payloads::decode(ProviderQuery::TokenMarket, body);
    let data = response.data.unwrap_or_default();

    MarketPart {
        price: data.price.unwrap_or(0.0),
        price_change_24h: data.price_change24h_percent.unwrap_or(0.0),
        market_cap: data.mc.unwrap_or(0.0),
        liquidity: data.liquidity.unwrap_or(0.0),
        volume_24h: data.v24h_usd.unwrap_or(0.0),
        holder_count: data.holder.filter(|h| *h > 0.0).map(|h| h as u64).unwrap_or(0),
        created_at: data.created_at,
    }
}

pub(crate) fn to_decimals(raw: f64) -> u8 {
    if raw.is_finite() && raw >= 0.0 && raw <= u8::MAX as f64 {
        raw as u8
    } else {
        0
    }
}
