use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::risk::RiskLevel;

/// A generated underpayment appeal for one claim and payer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppealLetter {
    pub id: Uuid,
    pub claim_id: String,
    pub payer_id: String,
    pub payer_name: String,
    pub lines: Vec<AppealLine>,
    pub total_contracted: f64,
    pub total_paid: f64,
    pub total_underpayment: f64,
    /// Highest risk level among the appealed lines.
    pub risk_level: RiskLevel,
    pub appeal_deadline: Option<Date>,
    pub body: String,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppealLine {
    pub cpt_code: String,
    pub date_of_service: Option<Date>,
    pub contracted_rate: f64,
    pub amount_paid: f64,
    pub underpayment: f64,
    pub variance_percent: f64,
    pub adjustment_code: Option<String>,
}
