use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The billing provider named as sender on appeal letters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct ProviderInfo {
    pub name: String,
    pub npi: String,
    pub tin: String,
    pub address: String,
    pub contact_name: String,
    pub contact_phone: String,
}

impl Default for ProviderInfo {
    fn default() -> Self {
        Self {
            name: "Provider Billing Office".to_string(),
            npi: String::new(),
            tin: String::new(),
            address: String::new(),
            contact_name: "Revenue Cycle Team".to_string(),
            contact_phone: String::new(),
        }
    }
}
