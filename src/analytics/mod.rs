/// Pure derivations over provider payloads: scoring, concentration, trades, listings

pub mod holders;
pub mod labels;
pub mod listings;
pub mod security;
pub mod trades;

pub use holders::{HolderDistribution, HolderDistributionAnalyzer, RawHolder};
pub use labels::{KnownWalletRegistry, StaticWalletLabels};
pub use listings::ListingRanker;
pub use security::{SecurityBand, SecurityReport, SecurityScorer};
pub use trades::{PnlSummarizer, PnlSummary, TradeClassifier};
