//! Token security scoring.
//!
//! Starts at 100 and deducts fixed points for each risk found:
//! - mint authority still present: -30
//! - freeze authority still present: -25
//! - top 10 holders above 50% of the sampled supply: -20
//! - top 10 holders above 70%: a further -15
//!
//! The result is clamped at 0.

use serde::{Deserialize, Serialize};

use crate::core::TokenProfile;

pub const MAX_SCORE: u8 = 100;
pub const MINT_AUTHORITY_PENALTY: u8 = 30;
pub const FREEZE_AUTHORITY_PENALTY: u8 = 25;
pub const CONCENTRATION_PENALTY: u8 = 20;
pub const HIGH_CONCENTRATION_PENALTY: u8 = 15;
pub const CONCENTRATION_THRESHOLD: f64 = 50.0;
pub const HIGH_CONCENTRATION_THRESHOLD: f64 = 70.0;

const SAFE_FLOOR: u8 = 80;
const WARNING_FLOOR: u8 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityBand {
    Safe,
    Warning,
    Danger,
}

impl SecurityBand {
    pub fn from_score(score: u8) -> Self {
        if score >= SAFE_FLOOR {
            SecurityBand::Safe
        } else if score >= WARNING_FLOOR {
            SecurityBand::Warning
        } else {
            SecurityBand::Danger
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityBand::Safe => "safe",
            SecurityBand::Warning => "warning",
            SecurityBand::Danger => "danger",
        }
    }
}

/// Inputs the score depends on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SecurityInputs {
    pub mint_authority_present: bool,
    pub freeze_authority_present: bool,
    pub top10_concentration_percent: f64,
}

impl From<&TokenProfile> for SecurityInputs {
    fn from(profile: &TokenProfile) -> Self {
        Self {
            mint_authority_present: profile.mint_authority_present,
            freeze_authority_present: profile.freeze_authority_present,
            top10_concentration_percent: profile.top10_concentration_percent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityCheck {
    pub name: &'static str,
    pub passed: bool,
    pub penalty: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityReport {
    pub score: u8,
    pub band: SecurityBand,
    pub checks: Vec<SecurityCheck>,
}

pub struct SecurityScorer;

impl SecurityScorer {
    pub fn score(profile: &TokenProfile) -> u8 {
        Self::report(SecurityInputs::from(profile)).score
    }

    pub fn report(inputs: SecurityInputs) -> SecurityReport {
        let top10 = inputs.top10_concentration_percent;
        let checks = vec![
            SecurityCheck {
                name: "Mint authority disabled",
                passed: !inputs.mint_authority_present,
                penalty: MINT_AUTHORITY_PENALTY,
            },
            SecurityCheck {
                name: "Freeze authority disabled",
                passed: !inputs.freeze_authority_present,
                penalty: FREEZE_AUTHORITY_PENALTY,
            },
            SecurityCheck {
                name: "Top 10 holders at or below 50%",
                passed: top10 <= CONCENTRATION_THRESHOLD,
                penalty: CONCENTRATION_PENALTY,
            },
            SecurityCheck {
                name: "Top 10 holders at or below 70%",
                passed: top10 <= HIGH_CONCENTRATION_THRESHOLD,
                penalty: HIGH_CONCENTRATION_PENALTY,
            },
        ];

        let deducted: u32 = checks
            .iter()
            .filter(|check| !check.passed)
            .map(|check| check.penalty as u32)
            .sum();
        let score = (MAX_SCORE as u32).saturating_sub(deducted) as u8;

        SecurityReport {
            score,
            band: SecurityBand::from_score(score),
            checks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(mint: bool, freeze: bool, top10: f64) -> SecurityInputs {
        SecurityInputs {
            mint_authority_present: mint,
            freeze_authority_present: freeze,
            top10_concentration_percent: top10,
        }
    }

    fn score(mint: bool, freeze: bool, top10: f64) -> u8 {
        SecurityScorer::report(inputs(mint, freeze, top10)).score
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(score(false, false, 24.5), 100);
        assert_eq!(score(true, false, 10.0), 70);
        assert_eq!(score(true, true, 80.0), 10);
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert_eq!(score(false, false, 50.0), 100);
        assert_eq!(score(false, false, 50.01), 80);
        assert_eq!(score(false, false, 70.0), 80);
        assert_eq!(score(false, false, 70.01), 65);
        assert_eq!(score(false, true, 100.0), 40);
    }

    #[test]
    fn test_full_matrix_is_deterministic() {
        for mint in [false, true] {
            for freeze in [false, true] {
                for top10 in [0.0, 49.9, 60.0, 95.0] {
                    let first = score(mint, freeze, top10);
                    assert_eq!(first, score(mint, freeze, top10));
                    assert!(first <= MAX_SCORE);
                }
            }
        }
    }

    #[test]
    fn test_bands() {
        assert_eq!(SecurityBand::from_score(100), SecurityBand::Safe);
        assert_eq!(SecurityBand::from_score(80), SecurityBand::Safe);
        assert_eq!(SecurityBand::from_score(79), SecurityBand::Warning);
        assert_eq!(SecurityBand::from_score(50), SecurityBand::Warning);
        assert_eq!(SecurityBand::from_score(49), SecurityBand::Danger);
        assert_eq!(SecurityBand::from_score(0), SecurityBand::Danger);
    }

    #[test]
    fn test_report_lists_failed_checks() {
        let report = SecurityScorer::report(inputs(true, false, 55.0));
        assert_eq!(report.score, 50);
        assert_eq!(report.band, SecurityBand::Warning);
        let failed: Vec<&str> = report
            .checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.name)
            .collect();
        assert_eq!(failed, vec!["Mint authority disabled", "Top 10 holders at or below 50%"]);
    }
}
