use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::claim::ClaimStatus;
use super::risk::RiskLevel;

/// Headline numbers for the dashboard overview panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalyticsSummary {
    pub total_contracts: usize,
    pub total_payments: usize,
    pub total_claims: usize,
    pub matched_payments: usize,
    pub unmatched_payments: usize,
    pub unpaid_claims: usize,
    /// Totals below cover matched payments only, so
    /// `total_paid - total_expected == total_variance`.
    pub total_billed: f64,
    pub total_paid: f64,
    /// Sum of contracted rates over matched payments.
    pub total_expected: f64,
    pub total_variance: f64,
    /// Payments without a contract, reported apart from the totals.
    pub unmatched_billed: f64,
    pub unmatched_paid: f64,
    pub underpaid_count: usize,
    pub recoverable_amount: f64,
    pub risk_distribution: Vec<RiskCount>,
    pub status_distribution: Vec<StatusCount>,
    pub payers: Vec<PayerSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskCount {
    pub risk_level: RiskLevel,
    pub count: usize,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusCount {
    pub status: ClaimStatus,
    pub count: usize,
    pub amount_billed: f64,
}

/// Per-payer slice of the variance analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PayerSummary {
    pub payer_id: String,
    pub payer_name: String,
    pub payment_count: usize,
    pub underpaid_count: usize,
    pub total_paid: f64,
    pub total_expected: f64,
    pub total_variance: f64,
    pub recoverable_amount: f64,
    /// Underpaid lines as a percentage of matched lines.
    pub underpayment_rate: f64,
}
