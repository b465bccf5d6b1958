/// Engine facade consumed by the presentation layer

use std::sync::Arc;

use tracing::info;

use crate::aggregator::{ListingFeed, TokenProfileAggregator, WalletProfileAggregator};
use crate::analytics::{KnownWalletRegistry, SecurityReport, SecurityScorer, StaticWalletLabels};
use crate::config::{Config, Limits};
use crate::core::{Address, EngineResult, ListingEntry, TokenProfile, WalletProfile};
use crate::providers::{HttpProviderClient, ProviderClient};

/// Entry point for token, wallet and listing lookups.
///
/// Stateless between calls: nothing is cached, so identical calls repeat all
/// provider I/O.
pub struct AnalyticsEngine {
    tokens: TokenProfileAggregator,
    wallets: WalletProfileAggregator,
    listings: ListingFeed,
}

impl AnalyticsEngine {
    pub fn new(
        provider: Arc<dyn ProviderClient>,
        labels: Arc<dyn KnownWalletRegistry>,
        limits: Limits,
    ) -> Self {
        Self {
            tokens: TokenProfileAggregator::new(provider.clone(), labels, limits.holder_sample),
            listings: ListingFeed::new(provider.clone(), limits.listing_limit),
            wallets: WalletProfileAggregator::new(provider, limits),
        }
    }

    /// Wires the HTTP provider and the configured wallet labels.
    pub fn from_config(config: &Config) -> EngineResult<Self> {
        let provider = HttpProviderClient::new(config.providers.clone())?;
        let labels = StaticWalletLabels::from(&config.labels);
        info!(known_wallets = labels.len(), "🦡 Analytics engine ready");
        Ok(Self::new(Arc::new(provider), Arc::new(labels), config.limits.clone()))
    }

    pub async fn token_profile(&self, address: &str) -> EngineResult<TokenProfile> {
        let mint = Address::parse(address)?;
        self.tokens.aggregate(&mint).await
    }

    pub async fn wallet_profile(&self, address: &str) -> EngineResult<WalletProfile> {
        let wallet = Address::parse(address)?;
        self.wallets.aggregate(&wallet).await
    }

    pub async fn trending(&self) -> EngineResult<Vec<ListingEntry>> {
        self.listings.trending().await
    }

    pub async fn new_listings(&self) -> EngineResult<Vec<ListingEntry>> {
        self.listings.new_listings().await
    }

    pub fn score(profile: &TokenProfile) -> u8 {
        SecurityScorer::score(profile)
    }

    pub fn security_report(profile: &TokenProfile) -> SecurityReport {
        SecurityScorer::report(profile.into())
    }
}
