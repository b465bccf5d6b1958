/// Engine configuration structures

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const HELIUS_KEY_ENV: &str = "HELIUS_API_KEY";
pub const BIRDEYE_KEY_ENV: &str = "BIRDEYE_API_KEY";
pub const CONFIG_PATH_ENV: &str = "CHECKTOKEN_CONFIG";

pub const RAYDIUM_AUTHORITY: &str = "5Q544fKrFoe6tsEbD7S8EmxGTJYAKtTVhAW5Q5pge4j1";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub providers: Providers,
    pub limits: Limits,
    pub labels: Labels,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Providers {
    pub helius_api_base: String,
    pub helius_rpc_base: String,
    pub birdeye_api_base: String,
    pub helius_api_key: String,
    pub birdeye_api_key: String,
    pub timeout_secs: u64,
}

impl Default for Providers {
    fn default() -> Self {
        Self {
            helius_api_base: "https://api.helius.xyz".to_string(),
            helius_rpc_base: "https://mainnet.helius-rpc.com".to_string(),
            birdeye_api_base: "https://public-api.birdeye.so".to_string(),
            helius_api_key: String::new(),
            birdeye_api_key: String::new(),
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Limits {
    /// Holder window requested from the holder-list provider
    pub holder_sample: usize,
    /// Most recent transactions considered for a wallet
    pub transaction_window: usize,
    pub holdings_cap: usize,
    pub recent_trades: usize,
    pub listing_limit: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            holder_sample: 20,
            transaction_window: 100,
            holdings_cap: 20,
            recent_trades: 10,
            listing_limit: 20,
        }
    }
}

/// Known infrastructure wallets, keyed by exact address
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Labels(pub HashMap<String, String>);

impl Default for Labels {
    fn default() -> Self {
        let mut known = HashMap::new();
        known.insert(RAYDIUM_AUTHORITY.to_string(), "Raydium Authority".to_string());
        Self(known)
    }
}

impl Config {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads the file named by `CHECKTOKEN_CONFIG` (or `path` when given),
    /// otherwise the defaults, then applies API key overrides from the environment.
    pub fn load(path: Option<&str>) -> anyhow::Result<Self> {
        let from_env = std::env::var(CONFIG_PATH_ENV).ok();
        let mut config = match path.or(from_env.as_deref()) {
            Some(p) => Self::load_from_file(p)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(HELIUS_KEY_ENV).filter(|k| !k.is_empty()) {
            self.providers.helius_api_key = key;
        }
        if let Some(key) = lookup(BIRDEYE_KEY_ENV).filter(|k| !k.is_empty()) {
            self.providers.birdeye_api_key = key;
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.providers.helius_api_key.is_empty() && !self.providers.birdeye_api_key.is_empty()
    }
}
