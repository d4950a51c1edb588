use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::key::{RecordKey, normalize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Claim {
    pub claim_id: String,
    pub date_of_service: Date,
    pub cpt_code: String,
    pub amount_billed: f64,
    pub payer_id: String,
    pub payer_name: String,
    pub status: ClaimStatus,
}

impl Claim {
    pub fn key(&self) -> RecordKey {
        RecordKey::new(&self.payer_id, &self.cpt_code)
    }

    /// Key used to pair a claim line with its payment.
    pub fn line_key(&self) -> (String, String) {
        line_key(&self.claim_id, &self.cpt_code)
    }
}

/// `(claim_id, cpt_code)` in canonical form.
pub fn line_key(claim_id: &str, cpt_code: &str) -> (String, String) {
    (normalize(claim_id), normalize(cpt_code))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ClaimStatus {
    Submitted,
    Pending,
    Paid,
    PartiallyPaid,
    Denied,
    Appealed,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 6] = [
        ClaimStatus::Submitted,
        ClaimStatus::Pending,
        ClaimStatus::Paid,
        ClaimStatus::PartiallyPaid,
        ClaimStatus::Denied,
        ClaimStatus::Appealed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Submitted => "submitted",
            ClaimStatus::Pending => "pending",
            ClaimStatus::Paid => "paid",
            ClaimStatus::PartiallyPaid => "partially_paid",
            ClaimStatus::Denied => "denied",
            ClaimStatus::Appealed => "appealed",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = CoreError;

    /// Accepts the snake_case form as well as the free-text labels found in
    /// practice-management exports ("Partially Paid", "DENIED", "in process").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let folded: String = s
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match folded.as_str() {
            "submitted" | "new" | "open" => Ok(ClaimStatus::Submitted),
            "pending" | "inprocess" | "processing" => Ok(ClaimStatus::Pending),
            "paid" | "closed" => Ok(ClaimStatus::Paid),
            "partiallypaid" | "partial" => Ok(ClaimStatus::PartiallyPaid),
            "denied" | "rejected" => Ok(ClaimStatus::Denied),
            "appealed" | "inappeal" => Ok(ClaimStatus::Appealed),
            _ => Err(CoreError::InvalidClaimStatus(s.to_string())),
        }
    }
}
