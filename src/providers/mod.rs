/// Upstream data providers: query catalogue, client trait and payload shapes

pub mod http;
pub mod payloads;

#[cfg(test)]
pub mod mock;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{Address, EngineResult};

pub use http::HttpProviderClient;

/// Logical upstream queries issued by the aggregators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderQuery {
    TokenMetadata,
    TokenSecurity,
    TokenMarket,
    TokenHolders,
    WalletBalances,
    WalletTransactions,
    Trending,
    NewListings,
}

impl ProviderQuery {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderQuery::TokenMetadata => "token-metadata",
            ProviderQuery::TokenSecurity => "token-security",
            ProviderQuery::TokenMarket => "token-market",
            ProviderQuery::TokenHolders => "token-holders",
            ProviderQuery::WalletBalances => "wallet-balances",
            ProviderQuery::WalletTransactions => "wallet-transactions",
            ProviderQuery::Trending => "trending",
            ProviderQuery::NewListings => "new-listing",
        }
    }
}

impl fmt::Display for ProviderQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request per logical query, returning the provider-native JSON body.
///
/// Transport failures and non-success statuses come back as
/// `EngineError::Provider`. Implementations do not retry.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    async fn token_metadata(&self, mint: &Address) -> EngineResult<Value>;

    async fn token_security(&self, mint: &Address) -> EngineResult<Value>;

    async fn token_market(&self, mint: &Address) -> EngineResult<Value>;

    async fn token_holders(&self, mint: &Address, limit: usize) -> EngineResult<Value>;

    async fn wallet_balances(&self, wallet: &Address) -> EngineResult<Value>;

    async fn wallet_transactions(&self, wallet: &Address, limit: usize) -> EngineResult<Value>;

    async fn trending_tokens(&self, limit: usize) -> EngineResult<Value>;

    async fn new_listings(&self, limit: usize) -> EngineResult<Value>;
}
