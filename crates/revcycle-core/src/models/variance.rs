use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::claim::Claim;
use super::payment::Payment;
use super::risk::RiskLevel;

/// A payment joined to its contract (and claim, when one exists).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VarianceRecord {
    pub claim_id: String,
    pub payer_id: String,
    pub payer_name: String,
    pub cpt_code: String,
    pub date_of_service: Option<Date>,
    pub payment_date: Option<Date>,
    pub amount_billed: f64,
    pub contracted_rate: f64,
    pub amount_paid: f64,
    /// `amount_paid - contracted_rate`. Negative means underpaid.
    pub variance: f64,
    pub variance_percent: f64,
    pub underpaid: bool,
    pub risk_level: RiskLevel,
    pub adjustment_code: Option<String>,
}

impl VarianceRecord {
    /// Amount that could be recovered on appeal. Zero unless underpaid.
    pub fn recoverable(&self) -> f64 {
        if self.underpaid { -self.variance } else { 0.0 }
    }
}

/// Result of joining every loaded payment against the contract book.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VarianceAnalysis {
    pub records: Vec<VarianceRecord>,
    /// Payments whose `(payer_id, cpt_code)` has no contract.
    pub unmatched_payments: Vec<Payment>,
    /// Claims with no payment for the same `(claim_id, cpt_code)`.
    pub unpaid_claims: Vec<Claim>,
}

impl VarianceAnalysis {
    pub fn underpaid(&self) -> impl Iterator<Item = &VarianceRecord> {
        self.records.iter().filter(|r| r.underpaid)
    }
}
