use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::key::RecordKey;

/// A negotiated rate for one procedure code with one payer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Contract {
    pub payer_id: String,
    pub payer_name: String,
    pub cpt_code: String,
    pub contracted_rate: f64,
    pub effective_date: Date,
    #[serde(default)]
    pub expiration_date: Option<Date>,
    #[serde(default)]
    pub modifier: Option<String>,
    #[serde(default)]
    pub place_of_service: Option<String>,
}

impl Contract {
    pub fn key(&self) -> RecordKey {
        RecordKey::new(&self.payer_id, &self.cpt_code)
    }

    /// Whether `date` falls inside the effective window (both ends inclusive).
    pub fn is_effective_on(&self, date: Date) -> bool {
        if date < self.effective_date {
            return false;
        }
        match self.expiration_date {
            Some(expires) => date <= expires,
            None => true,
        }
    }
}
