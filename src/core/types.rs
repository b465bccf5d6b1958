/// Profile and listing records produced by the engine
use serde::{Deserialize, Serialize};

/// Merged token view built from the metadata, security, market and holder queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenProfile {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub image: Option<String>,
    pub decimals: u8,

    /// Mint authority is still set, so supply can be inflated
    pub mint_authority_present: bool,

    /// Freeze authority is still set, so holder accounts can be frozen
    pub freeze_authority_present: bool,

    /// Raw supply in base units as reported by account info
    pub supply: String,

    pub price: f64,
    pub price_change_24h: f64,
    pub market_cap: f64,
    pub liquidity: f64,
    pub volume_24h: f64,
    pub holder_count: u64,
    pub created_at: Option<i64>,

    /// Largest holders, descending by amount, at most 10
    pub top_holders: Vec<HolderEntry>,

    /// Share of the sampled holder window held by the top 10 (0-100)
    pub top10_concentration_percent: f64,

    /// Share of the sampled holder window held by the whole window (0-100)
    pub top20_concentration_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderEntry {
    /// 1-based, contiguous
    pub rank: u32,
    pub address: String,
    pub address_short: String,
    pub amount: f64,
    pub percent_of_sampled_supply: f64,
    pub label: Option<String>,
}

/// Merged wallet view built from the balance and transaction queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletProfile {
    pub address: String,
    pub address_short: String,
    pub sol_balance: f64,
    pub holdings: Vec<HoldingEntry>,
    pub total_pnl: f64,
    pub total_pnl_percent: f64,
    /// Percentage of closed trades that were profitable (0-100)
    pub win_rate: f64,
    pub total_trades: u32,
    pub wins: u32,
    pub losses: u32,
    pub best_trade: Option<TradeOutcome>,
    pub worst_trade: Option<TradeOutcome>,
    pub recent_trades: Vec<TradeEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingEntry {
    pub mint: String,
    pub symbol: String,
    pub amount: f64,
    pub decimals: u8,
    // Absent (not zero) until a historical price source is wired in
    pub pnl: Option<f64>,
    pub pnl_percent: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeDirection {
    Buy,
    Sell,
}

impl TradeDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeDirection::Buy => "buy",
            TradeDirection::Sell => "sell",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeEntry {
    pub signature: String,
    pub direction: TradeDirection,
    pub timestamp_seconds: i64,
    pub counterparty_mints: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOutcome {
    pub signature: String,
    pub pnl: f64,
}

/// One row of the trending or new-listing feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingEntry {
    pub rank: u32,
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub price_change_24h: Option<f64>,
    pub market_cap: f64,
    pub liquidity: f64,
    pub volume_24h: f64,
    pub image: Option<String>,
    pub created_at: Option<i64>,
}
