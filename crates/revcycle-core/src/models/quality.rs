use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Quality indicators shown on the facility panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FacilityQuality {
    pub facility_id: String,
    pub name: String,
    /// 30-day readmission rate, percent.
    pub readmission_rate: f64,
    /// HCAHPS-style top-box score, percent.
    pub patient_satisfaction: f64,
    pub average_length_of_stay: f64,
    /// Hospital-acquired infections per 1,000 patient days.
    pub infection_rate: f64,
    pub star_rating: u8,
}
