use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Contracted rates for one procedure code across the payer book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceTransparency {
    pub cpt_code: String,
    pub min_rate: f64,
    pub max_rate: f64,
    pub mean_rate: f64,
    pub median_rate: f64,
    pub payer_rates: Vec<PayerRate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PayerRate {
    pub payer_id: String,
    pub payer_name: String,
    pub contracted_rate: f64,
}
