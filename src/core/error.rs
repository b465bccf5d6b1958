//! Engine error taxonomy

use thiserror::Error;

use crate::providers::ProviderQuery;

/// Failure of an engine operation.
///
/// There is intentionally no partial-data variant: a failed sub-query fails
/// the whole aggregation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid address: {0}")]
    Validation(String),

    #[error("{query} query failed: {reason}")]
    Provider { query: ProviderQuery, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EngineError {
    pub fn provider(query: ProviderQuery, reason: impl Into<String>) -> Self {
        EngineError::Provider {
            query,
            reason: reason.into(),
        }
    }

    /// Human-readable reason for display by the caller.
    pub fn reason(&self) -> String {
        match self {
            EngineError::Validation(msg) => msg.clone(),
            EngineError::Provider { reason, .. } => reason.clone(),
            EngineError::Config(msg) => msg.clone(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
