use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::key::RecordKey;

/// One paid service line, from a payment CSV or an 835 remittance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Payment {
    pub claim_id: String,
    pub cpt_code: String,
    pub amount_billed: f64,
    pub amount_paid: f64,
    /// Procedure modifier as remitted (e.g. "26"), when present.
    #[serde(default)]
    pub modifier: Option<String>,
    pub payer_id: String,
    pub payer_name: String,
    #[serde(default)]
    pub payment_date: Option<Date>,
    #[serde(default)]
    pub adjustment_code: Option<String>,
    #[serde(default)]
    pub adjustment_amount: f64,
}

impl Payment {
    pub fn key(&self) -> RecordKey {
        RecordKey::new(&self.payer_id, &self.cpt_code)
    }
}
