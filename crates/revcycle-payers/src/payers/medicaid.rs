use crate::Payer;

/// State Medicaid. Windows vary by state; these are the common values.
pub struct Medicaid;

impl Payer for Medicaid {
    fn id(&self) -> &str {
        "MEDICAID"
    }

    fn name(&self) -> &str {
        "Medicaid"
    }

    fn appeal_window_days(&self) -> u32 {
        90
    }

    fn timely_filing_days(&self) -> u32 {
        365
    }

    fn appeal_address(&self) -> &str {
        "State Medicaid Agency, Provider Appeals"
    }
}
