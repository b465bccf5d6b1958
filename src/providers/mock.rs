//! In-memory provider used by the aggregator tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{ProviderClient, ProviderQuery};
use crate::core::{Address, EngineError, EngineResult};

#[derive(Default)]
pub struct StaticProvider {
    responses: HashMap<ProviderQuery, Result<Value, String>>,
    delays: HashMap<ProviderQuery, Duration>,
    calls: Mutex<Vec<(ProviderQuery, Option<usize>)>>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, query: ProviderQuery, body: Value) -> Self {
        self.responses.insert(query, Ok(body));
        self
    }

    pub fn failing(mut self, query: ProviderQuery, reason: &str) -> Self {
        self.responses.insert(query, Err(reason.to_string()));
        self
    }

    pub fn delayed(mut self, query: ProviderQuery, delay: Duration) -> Self {
        self.delays.insert(query, delay);
        self
    }

    pub fn calls(&self) -> Vec<(ProviderQuery, Option<usize>)> {
        self.calls.lock().unwrap().clone()
    }

    async fn respond(&self, query: ProviderQuery, limit: Option<usize>) -> EngineResult<Value> {
        self.calls.lock().unwrap().push((query, limit));
        if let Some(delay) = self.delays.get(&query) {
            tokio::time::sleep(*delay).await;
        }
        match self.responses.get(&query) {
            Some(Ok(body)) => Ok(body.clone()),
            Some(Err(reason)) => Err(EngineError::provider(query, reason.clone())),
            None => Err(EngineError::provider(query, "no fixture registered")),
        }
    }
}

#[async_trait]
impl ProviderClient for StaticProvider {
    async fn token_metadata(&self, _mint: &Address) -> EngineResult<Value> {
        self.respond(ProviderQuery::TokenMetadata, None).await
    }

    async fn token_security(&self, _mint: &Address) -> EngineResult<Value> {
        self.respond(ProviderQuery::TokenSecurity, None).await
    }

    async fn token_market(&self, _mint: &Address) -> EngineResult<Value> {
        self.respond(ProviderQuery::TokenMarket, None).await
    }

    async fn token_holders(&self, _mint: &Address, limit: usize) -> EngineResult<Value> {
        self.respond(ProviderQuery::TokenHolders, Some(limit)).await
    }

    async fn wallet_balances(&self, _wallet: &Address) -> EngineResult<Value> {
        self.respond(ProviderQuery::WalletBalances, None).await
    }

    async fn wallet_transactions(&self, _wallet: &Address, limit: usize) -> EngineResult<Value> {
        self.respond(ProviderQuery::WalletTransactions, Some(limit)).await
    }

    async fn trending_tokens(&self, limit: usize) -> EngineResult<Value> {
        self.respond(ProviderQuery::Trending, Some(limit)).await
    }

    async fn new_listings(&self, limit: usize) -> EngineResult<Value> {
        self.respond(ProviderQuery::NewListings, Some(limit)).await
    }
}
