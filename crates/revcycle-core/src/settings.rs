use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::risk::RiskLevel;

/// Knobs for variance analysis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisSettings {
    /// A payment is underpaid when its variance percent is below
    /// `-underpayment_threshold_pct`.
    pub underpayment_threshold_pct: f64,
    #[serde(default)]
    pub risk: RiskThresholds,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            underpayment_threshold_pct: 2.0,
            risk: RiskThresholds::default(),
        }
    }
}

impl AnalysisSettings {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.underpayment_threshold_pct.is_finite() || self.underpayment_threshold_pct < 0.0 {
            return Err(CoreError::InvalidSettings(format!(
                "underpayment threshold must be a non-negative percentage, got {}",
                self.underpayment_threshold_pct
            )));
        }
        self.risk.validate()
    }
}

/// Percentage cutoffs on the size of an underpayment.
///
/// An underpayment of `p` percent is LOW below `medium_pct`, MEDIUM below
/// `high_pct`, HIGH below `critical_pct` and CRITICAL from there up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskThresholds {
    pub medium_pct: f64,
    pub high_pct: f64,
    pub critical_pct: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            medium_pct: 5.0,
            high_pct: 15.0,
            critical_pct: 30.0,
        }
    }
}

impl RiskThresholds {
    pub fn validate(&self) -> Result<(), CoreError> {
        let ordered = 0.0 <= self.medium_pct
            && self.medium_pct < self.high_pct
            && self.high_pct < self.critical_pct
            && self.critical_pct.is_finite();
        if !ordered {
            return Err(CoreError::InvalidSettings(format!(
                "risk cutoffs must be non-negative and strictly increasing, got {} / {} / {}",
                self.medium_pct, self.high_pct, self.critical_pct
            )));
        }
        Ok(())
    }

    /// Bucket a variance percent. Overpayments and exact payments are LOW.
    pub fn classify(&self, variance_percent: f64) -> RiskLevel {
        if variance_percent >= 0.0 {
            return RiskLevel::Low;
        }
        let shortfall = -variance_percent;
        if shortfall >= self.critical_pct {
            RiskLevel::Critical
        } else if shortfall >= self.high_pct {
            RiskLevel::High
        } else if shortfall >= self.medium_pct {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}
