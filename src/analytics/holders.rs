/// Holder concentration analysis over the sampled holder window

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::labels::KnownWalletRegistry;
use crate::core::{shorten, HolderEntry};
use crate::providers::payloads::HolderItem;

pub const TOP_HOLDER_COUNT: usize = 10;

/// One (owner, amount) pair from the holder-list provider
#[derive(Debug, Clone, PartialEq)]
pub struct RawHolder {
    pub owner: String,
    pub amount: f64,
}

impl RawHolder {
    pub fn new(owner: impl Into<String>, amount: f64) -> Self {
        Self {
            owner: owner.into(),
            amount,
        }
    }
}

impl From<HolderItem> for RawHolder {
    fn from(item: HolderItem) -> Self {
        Self {
            owner: item.owner.unwrap_or_default(),
            amount: item.ui_amount.unwrap_or(0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolderDistribution {
    /// Sum of every amount in the window; this is not the token's total supply
    pub sampled_supply: f64,
    pub top10_concentration_percent: f64,
    pub top20_concentration_percent: f64,
    pub top_holders: Vec<HolderEntry>,
}

pub struct HolderDistributionAnalyzer<'a> {
    registry: &'a dyn KnownWalletRegistry,
}

impl<'a> HolderDistributionAnalyzer<'a> {
    pub fn new(registry: &'a dyn KnownWalletRegistry) -> Self {
        Self { registry }
    }

    pub fn analyze(&self, holders: Vec<RawHolder>) -> HolderDistribution {
        let mut holders: Vec<RawHolder> = holders
            .into_iter()
            .map(|h| RawHolder {
                amount: sanitize_amount(h.amount),
                ..h
            })
            .collect();
        // Providers return descending order already; the stable sort only guards the invariant.
        holders.sort_by(|a, b| b.amount.total_cmp(&a.amount));

        let sampled_supply: f64 = holders.iter().map(|h| h.amount).sum();
        let top10_amount: f64 = holders
            .iter()
            .take(TOP_HOLDER_COUNT)
            .map(|h| h.amount)
            .sum();
        let top20_amount = sampled_supply;

        let top_holders = holders
            .into_iter()
            .take(TOP_HOLDER_COUNT)
            .enumerate()
            .map(|(i, holder)| HolderEntry {
                rank: (i + 1) as u32,
                address_short: shorten(&holder.owner),
                percent_of_sampled_supply: percent_of(holder.amount, sampled_supply),
                label: self.registry.label_for(&holder.owner),
                address: holder.owner,
                amount: holder.amount,
            })
            .collect::<Vec<_>>();

        debug!(
            holders = top_holders.len(),
            sampled_supply, "Computed holder distribution"
        );

        HolderDistribution {
            sampled_supply,
            top10_concentration_percent: percent_of(top10_amount, sampled_supply),
            top20_concentration_percent: percent_of(top20_amount, sampled_supply),
            top_holders,
        }
    }
}

fn sanitize_amount(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

/// `100 * part / whole`, 0 for an empty window, clamped to [0, 100].
///
/// Amounts near `f64::MAX` can overflow the sum or the scaled part; a
/// non-finite result reads as 0.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if !whole.is_finite() || whole <= 0.0 {
        return 0.0;
    }
    let mut percent = part * 100.0 / whole;
    if !percent.is_finite() {
        percent = part / whole * 100.0;
    }
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
