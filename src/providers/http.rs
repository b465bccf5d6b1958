/// Helius and Birdeye HTTP client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::{json, Value};
use tracing::{debug, instrument};

use super::{ProviderClient, ProviderQuery};
use crate::config::Providers;
use crate::core::{Address, EngineError, EngineResult};

const SWAP_TRANSACTION_TYPE: &str = "SWAP";

pub struct HttpProviderClient {
    client: Client,
    settings: Providers,
}

impl HttpProviderClient {
    pub fn new(settings: Providers) -> EngineResult<Self> {
        if settings.helius_api_key.is_empty() || settings.birdeye_api_key.is_empty() {
            return Err(EngineError::Config(
                "Helius and Birdeye API keys are both required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| EngineError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, settings })
    }

    fn helius_api(&self, path: &str) -> String {
        format!("{}{}", self.settings.helius_api_base.trim_end_matches('/'), path)
    }

    fn birdeye_api(&self, path: &str) -> String {
        format!("{}{}", self.settings.birdeye_api_base.trim_end_matches('/'), path)
    }

    fn birdeye_get(&self, path: &str) -> RequestBuilder {
        self.client
            .get(self.birdeye_api(path))
            .header("X-API-KEY", &self.settings.birdeye_api_key)
            .header("x-chain", "solana")
            .header("accept", "application/json")
    }

    async fn send(&self, query: ProviderQuery, request: RequestBuilder) -> EngineResult<Value> {
        let response = request
            .send()
            .await
            .map_err(|e| EngineError::provider(query, format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::provider(query, format!("API error: {}", status)));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| EngineError::provider(query, format!("invalid JSON body: {}", e)))?;

        debug!(query = %query, "Provider response received");
        Ok(body)
    }
}

#[async_trait]
impl ProviderClient for HttpProviderClient {
    #[instrument(skip_all, fields(mint = %mint))]
    async fn token_metadata(&self, mint: &Address) -> EngineResult<Value> {
        let request = self
            .client
            .post(self.helius_api("/v0/token-metadata"))
            .query(&[("api-key", self.settings.helius_api_key.as_str())])
            .json(&json!({ "mintAccounts": [mint.as_str()] }));
        self.send(ProviderQuery::TokenMetadata, request).await
    }

    #[instrument(skip_all, fields(mint = %mint))]
    async fn token_security(&self, mint: &Address) -> EngineResult<Value> {
        let rpc_url = format!("{}/", self.settings.helius_rpc_base.trim_end_matches('/'));
        let request = self
            .client
            .post(rpc_url)
            .query(&[("api-key", self.settings.helius_api_key.as_str())])
            .json(&json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": "getAccountInfo",
                "params": [mint.as_str(), { "encoding": "jsonParsed" }]
            }));
        self.send(ProviderQuery::TokenSecurity, request).await
    }

    #[instrument(skip_all, fields(mint = %mint))]
    async fn token_market(&self, mint: &Address) -> EngineResult<Value> {
        let request = self
            .birdeye_get("/defi/token_overview")
            .query(&[("address", mint.as_str())]);
        self.send(ProviderQuery::TokenMarket, request).await
    }

    #[instrument(skip_all, fields(mint = %mint))]
    async fn token_holders(&self, mint: &Address, limit: usize) -> EngineResult<Value> {
        let limit = limit.to_string();
        let request = self.birdeye_get("/defi/token_holder").query(&[
            ("address", mint.as_str()),
            ("offset", "0"),
            ("limit", limit.as_str()),
        ]);
        self.send(ProviderQuery::TokenHolders, request).await
    }

    #[instrument(skip_all, fields(wallet = %wallet))]
    async fn wallet_balances(&self, wallet: &Address) -> EngineResult<Value> {
        let request = self
            .client
            .get(self.helius_api(&format!("/v0/addresses/{}/balances", wallet)))
            .query(&[("api-key", self.settings.helius_api_key.as_str())]);
        self.send(ProviderQuery::WalletBalances, request).await
    }

    #[instrument(skip_all, fields(wallet = %wallet))]
    async fn wallet_transactions(&self, wallet: &Address, limit: usize) -> EngineResult<Value> {
        let limit = limit.to_string();
        let request = self
            .client
            .get(self.helius_api(&format!("/v0/addresses/{}/transactions", wallet)))
            .query(&[
                ("api-key", self.settings.helius_api_key.as_str()),
                ("type", SWAP_TRANSACTION_TYPE),
                ("limit", limit.as_str()),
            ]);
        self.send(ProviderQuery::WalletTransactions, request).await
    }

    #[instrument(skip(self))]
    async fn trending_tokens(&self, limit: usize) -> EngineResult<Value> {
        let limit = limit.to_string();
        let request = self.birdeye_get("/defi/token_trending").query(&[
            ("sort_by", "rank"),
            ("sort_type", "asc"),
            ("offset", "0"),
            ("limit", limit.as_str()),
        ]);
        self.send(ProviderQuery::Trending, request).await
    }

    #[instrument(skip(self))]
    async fn new_listings(&self, limit: usize) -> EngineResult<Value> {
        let limit = limit.to_string();
        let request = self
            .birdeye_get("/defi/token_new_listing")
            .query(&[("limit", limit.as_str())]);
        self.send(ProviderQuery::NewListings, request).await
    }
}
