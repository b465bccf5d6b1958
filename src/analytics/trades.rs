/// Trade classification and win/loss summary for a wallet's transaction window

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{TradeDirection, TradeEntry, TradeOutcome};
use crate::providers::payloads::TransactionRecord;

pub struct TradeClassifier;

impl TradeClassifier {
    /// `Buy` when any token transfer lands in the fee payer's account, else `Sell`.
    pub fn classify(record: &TransactionRecord) -> TradeDirection {
        let Some(fee_payer) = record.fee_payer.as_deref() else {
            return TradeDirection::Sell;
        };
        let received = record
            .token_transfers
            .iter()
            .any(|t| t.to_user_account.as_deref() == Some(fee_payer));
        if received {
            TradeDirection::Buy
        } else {
            TradeDirection::Sell
        }
    }

    pub fn to_trade(record: &TransactionRecord) -> TradeEntry {
        let mut counterparty_mints: Vec<String> = Vec::new();
        for mint in record.token_transfers.iter().filter_map(|t| t.mint.as_ref()) {
            if !counterparty_mints.contains(mint) {
                counterparty_mints.push(mint.clone());
            }
        }

        TradeEntry {
            signature: record.signature.clone().unwrap_or_default(),
            direction: Self::classify(record),
            timestamp_seconds: record.timestamp.unwrap_or(0),
            counterparty_mints,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PnlSummary {
    pub total_trades: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
    pub total_pnl: f64,
    pub total_pnl_percent: f64,
    pub best_trade: Option<TradeOutcome>,
    pub worst_trade: Option<TradeOutcome>,
    pub recent_trades: Vec<TradeEntry>,
}

/// Summarizes a transaction window.
///
/// Win/loss and PnL need entry and exit prices per trade, which the
/// transaction feed does not carry. Until a historical price source is wired
/// in, wins, losses, win rate and PnL are reported as zero and best/worst
/// trades as absent.
pub struct PnlSummarizer {
    recent_limit: usize,
}

impl PnlSummarizer {
    pub fn new(recent_limit: usize) -> Self {
        Self { recent_limit }
    }

    pub fn summarize(&self, records: &[TransactionRecord]) -> PnlSummary {
        let trades: Vec<TradeEntry> = records.iter().map(TradeClassifier::to_trade).collect();

        let wins = 0u32;
        let losses = 0u32;
        let closed = wins + losses;
        let win_rate = if closed > 0 {
            wins as f64 / closed as f64 * 100.0
        } else {
            0.0
        };

        debug!(
            total_trades = trades.len(),
            buys = trades.iter().filter(|t| t.direction == TradeDirection::Buy).count(),
            "Classified transaction window"
        );

        PnlSummary {
            total_trades: trades.len() as u32,
            wins,
            losses,
            win_rate,
            total_pnl: 0.0,
            total_pnl_percent: 0.0,
            best_trade: None,
            worst_trade: None,
            recent_trades: trades.into_iter().take(self.recent_limit).collect(),
        }
    }
}
