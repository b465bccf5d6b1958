/// Provider fan-out/fan-in: each aggregator joins its queries and merges the parts

pub mod listings;
pub mod token;
pub mod wallet;

pub use listings::ListingFeed;
pub use token::TokenProfileAggregator;
pub use wallet::WalletProfileAggregator;
