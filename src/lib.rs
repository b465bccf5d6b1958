//! Token and wallet analytics for Solana.
//!
//! `AnalyticsEngine` fans each lookup out to the configured data providers,
//! merges the answers and derives holder concentration, a security score and
//! a trade history on top of them.

// Core types and errors
pub mod core;

// Provider access
pub mod providers;

// Derived metrics
pub mod analytics;

// Fan-out/fan-in of provider queries
pub mod aggregator;

pub mod config;
pub mod engine;
pub mod util;

pub use config::Config;
pub use core::*;
pub use engine::AnalyticsEngine;
