use std::fmt;

use serde::{Deserialize, Serialize};

/// Join key shared by contracts, payments and claims.
///
/// Both parts are trimmed and upper-cased on construction so that
/// `" aetna "` / `"99213"` and `"AETNA"` / `"99213"` land on the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey {
    pub payer_id: String,
    pub cpt_code: String,
}

impl RecordKey {
    pub fn new(payer_id: &str, cpt_code: &str) -> Self {
        Self {
            payer_id: normalize(payer_id),
            cpt_code: normalize(cpt_code),
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.payer_id, self.cpt_code)
    }
}

/// Canonical form of a payer id or procedure code.
pub fn normalize(value: &str) -> String {
    value.trim().to_ascii_uppercase()
}
