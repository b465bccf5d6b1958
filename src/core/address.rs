//! Solana address shape validation

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::EngineError;

const MIN_ADDRESS_LEN: usize = 32;
const MAX_ADDRESS_LEN: usize = 44;

/// A token mint or wallet account address that passed the syntactic check.
///
/// Passing the check does not mean the account exists on-chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Trims the input and checks the base58 alphabet and the 32-44 length window.
    pub fn parse(input: &str) -> Result<Self, EngineError> {
        let trimmed = input.trim();
        if is_valid_address(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(EngineError::Validation(format!(
                "'{}' is not a valid Solana address format",
                trimmed
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn short(&self) -> String {
        shorten(&self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

pub fn is_valid_address(candidate: &str) -> bool {
    let len = candidate.chars().count();
    if !(MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&len) {
        return false;
    }
    // The decoder rejects anything outside the bitcoin base58 alphabet (0, O, I, l).
    bs58::decode(candidate).into_vec().is_ok()
}

/// First 4 and last 4 characters joined by an ellipsis.
pub fn shorten(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 8 {
        return address.to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
