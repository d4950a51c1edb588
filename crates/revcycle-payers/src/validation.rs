use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What is wrong with a contract row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IssueKind {
    NonPositiveRate,
    ExpiresBeforeEffective,
    InvalidPlaceOfService,
    PayerMismatch,
}

/// A contract row that failed a payer check. Reported, never fatal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContractIssue {
    pub payer_id: String,
    pub cpt_code: String,
    pub kind: IssueKind,
    pub message: String,
}

/// CMS place-of-service codes are two digits, 01 through 99.
pub fn is_place_of_service(code: &str) -> bool {
    let code = code.trim();
    code.len() == 2
        && code.chars().all(|c| c.is_ascii_digit())
        && code != "00"
}
