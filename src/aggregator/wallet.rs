/// Wallet profile fan-out and merge

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, instrument, warn};

use super::token::to_decimals;
use crate::analytics::PnlSummarizer;
use crate::config::Limits;
use crate::core::{Address, EngineResult, HoldingEntry, WalletProfile};
use crate::providers::payloads::{self, BalancesResponse, TransactionRecord};
use crate::providers::{ProviderClient, ProviderQuery};

pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;
const UNKNOWN_HOLDING_SYMBOL: &str = "Unknown";

pub struct WalletProfileAggregator {
    provider: Arc<dyn ProviderClient>,
    limits: Limits,
}

impl WalletProfileAggregator {
    pub fn new(provider: Arc<dyn ProviderClient>, limits: Limits) -> Self {
        Self { provider, limits }
    }

    /// Balances and the recent transaction window are fetched together; both must succeed.
    #[instrument(skip_all, fields(wallet = %wallet))]
    pub async fn aggregate(&self, wallet: &Address) -> EngineResult<WalletProfile> {
        let joined = tokio::try_join!(
            self.provider.wallet_balances(wallet),
            self.provider
                .wallet_transactions(wallet, self.limits.transaction_window),
        );

        let (balances, transactions) = match joined {
            Ok(parts) => parts,
            Err(e) => {
                warn!("❌ Wallet profile aborted: {}", e);
                return Err(e);
            }
        };

        let (sol_balance, holdings) = self.balance_part(balances);
        let mut records: Vec<TransactionRecord> =
            payloads::decode_list(ProviderQuery::WalletTransactions, transactions);
        records.truncate(self.limits.transaction_window);

        let summary = PnlSummarizer::new(self.limits.recent_trades).summarize(&records);

        info!(
            sol_balance,
            holdings = holdings.len(),
            trades = summary.total_trades,
            "✅ Wallet profile assembled"
        );

        Ok(WalletProfile {
            address: wallet.to_string(),
            address_short: wallet.short(),
            sol_balance,
            holdings,
            total_pnl: summary.total_pnl,
            total_pnl_percent: summary.total_pnl_percent,
            win_rate: summary.win_rate,
            total_trades: summary.total_trades,
            wins: summary.wins,
            losses: summary.losses,
            best_trade: summary.best_trade,
            worst_trade: summary.worst_trade,
            recent_trades: summary.recent_trades,
        })
    }

    fn balance_part(&self, body: Value) -> (f64, Vec<HoldingEntry>) {
        let response: BalancesResponse = payloads::decode(ProviderQuery::WalletBalances, body);
        let sol_balance = response.native_balance.unwrap_or(0.0) / LAMPORTS_PER_SOL;

        // Provider order is kept; see DESIGN.md for why no value sort is applied.
        let holdings = response
            .tokens
            .into_iter()
            .filter_map(|token| {
                let raw_amount = token.amount.filter(|a| *a > 0.0)?;
                let decimals = token.decimals.map(to_decimals).filter(|d| *d > 0)?;
                Some(HoldingEntry {
                    mint: token.mint.unwrap_or_default(),
                    symbol: token
                        .symbol
                        .unwrap_or_else(|| UNKNOWN_HOLDING_SYMBOL.to_string()),
                    amount: raw_amount / 10f64.powi(decimals as i32),
                    decimals,
                    pnl: None,
                    pnl_percent: None,
                })
            })
            .take(self.limits.holdings_cap)
            .collect();

        (sol_balance, holdings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EngineError, TradeDirection};
    use crate::providers::mock::StaticProvider;
    use serde_json::json;

    const WALLET: &str = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";

    fn balances() -> Value {
        json!({
            "nativeBalance": 2_500_000_000u64,
            "tokens": [
                { "mint": "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263", "symbol": "Bonk", "amount": 150_000_00000u64, "decimals": 5 },
                { "mint": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v", "amount": 0, "decimals": 6 },
                { "mint": "NoDecimals111111111111111111111111111111111", "amount": 10, "decimals": 0 },
                { "mint": "Es9vMFrzaCERmJfrF4H2FYD4KCoNkY11McCe8BenwNYB", "amount": 2_500_000, "decimals": 6 }
            ]
        })
    }

    fn transactions(count: usize) -> Value {
        let txs: Vec<Value> = (0..count)
            .map(|i| {
                let to = if i % 2 == 0 { WALLET } else { "pool" };
                json!({
                    "signature": format!("sig{}", i),
                    "type": "SWAP",
                    "timestamp": 1_700_000_000 - i as i64,
                    "fee": 5000,
                    "feePayer": WALLET,
                    "tokenTransfers": [{ "toUserAccount": to, "mint": "Bonk" }]
                })
            })
            .collect();
        Value::Array(txs)
    }

    fn build(provider: StaticProvider) -> (WalletProfileAggregator, Arc<StaticProvider>) {
        let provider = Arc::new(provider);
        (WalletProfileAggregator::new(provider.clone(), Limits::default()), provider)
    }

    fn wallet() -> Address {
        Address::parse(WALLET).unwrap()
    }

    #[tokio::test]
    async fn test_merges_balances_and_trades() {
        let provider = StaticProvider::new()
            .with(ProviderQuery::WalletBalances, balances())
            .with(ProviderQuery::WalletTransactions, transactions(12));
        let (aggregator, provider) = build(provider);
        let profile = aggregator.aggregate(&wallet()).await.unwrap();

        assert_eq!(profile.address, WALLET);
        assert_eq!(profile.address_short, "7xKX...gAsU");
        assert_eq!(profile.sol_balance, 2.5);
        assert_eq!(profile.holdings.len(), 2);
        assert_eq!(profile.holdings[0].symbol, "Bonk");
        assert_eq!(profile.holdings[0].amount, 150_000.0);
        assert_eq!(profile.holdings[1].symbol, "Unknown");
        assert_eq!(profile.holdings[1].amount, 2.5);
        assert!(profile.holdings.iter().all(|h| h.pnl.is_none() && h.pnl_percent.is_none()));

        assert_eq!(profile.total_trades, 12);
        assert_eq!(profile.recent_trades.len(), 10);
        assert_eq!(profile.recent_trades[0].direction, TradeDirection::Buy);
        assert_eq!(profile.recent_trades[1].direction, TradeDirection::Sell);
        assert_eq!(profile.wins, 0);
        assert_eq!(profile.losses, 0);
        assert_eq!(profile.win_rate, 0.0);

        assert!(provider
            .calls()
            .contains(&(ProviderQuery::WalletTransactions, Some(100))));
    }

    #[tokio::test]
    async fn test_transaction_window_is_capped() {
        let provider = StaticProvider::new()
            .with(ProviderQuery::WalletBalances, balances())
            .with(ProviderQuery::WalletTransactions, transactions(130));
        let (aggregator, _) = build(provider);
        let profile = aggregator.aggregate(&wallet()).await.unwrap();
        assert_eq!(profile.total_trades, 100);
    }

    #[tokio::test]
    async fn test_holdings_are_capped_in_provider_order() {
        let tokens: Vec<Value> = (0..30)
            .map(|i| json!({ "mint": format!("mint{}", i), "amount": 1_000_000, "decimals": 6 }))
            .collect();
        let provider = StaticProvider::new()
            .with(ProviderQuery::WalletBalances, json!({ "nativeBalance": 0, "tokens": tokens }))
            .with(ProviderQuery::WalletTransactions, json!([]));
        let (aggregator, _) = build(provider);
        let profile = aggregator.aggregate(&wallet()).await.unwrap();
        assert_eq!(profile.holdings.len(), 20);
        assert_eq!(profile.holdings[0].mint, "mint0");
        assert_eq!(profile.holdings[19].mint, "mint19");
    }

    #[tokio::test]
    async fn test_either_failure_fails_the_profile() {
        let provider = StaticProvider::new()
            .with(ProviderQuery::WalletBalances, balances())
            .failing(ProviderQuery::WalletTransactions, "API error: 429 Too Many Requests");
        let (aggregator, _) = build(provider);
        let err = aggregator.aggregate(&wallet()).await.unwrap_err();
        assert!(matches!(
            err,
            EngineError::Provider { query: ProviderQuery::WalletTransactions, .. }
        ));

        let provider = StaticProvider::new()
            .failing(ProviderQuery::WalletBalances, "request failed: timeout")
            .with(ProviderQuery::WalletTransactions, transactions(3));
        let (aggregator, _) = build(provider);
        let err = aggregator.aggregate(&wallet()).await.unwrap_err();
        assert_eq!(err.reason(), "request failed: timeout");
    }

    #[tokio::test]
    async fn test_malformed_payloads_use_defaults() {
        let provider = StaticProvider::new()
            .with(ProviderQuery::WalletBalances, json!(null))
            .with(ProviderQuery::WalletTransactions, json!({ "error": "bad" }));
        let (aggregator, _) = build(provider);
        let profile = aggregator.aggregate(&wallet()).await.unwrap();
        assert_eq!(profile.sol_balance, 0.0);
        assert!(profile.holdings.is_empty());
        assert_eq!(profile.total_trades, 0);
        assert!(profile.recent_trades.is_empty());
    }
}
