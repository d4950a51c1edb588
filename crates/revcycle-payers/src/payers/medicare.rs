use crate::Payer;

/// Medicare Part B. Redetermination requests are due 120 days after the
/// initial determination; claims must be filed within one calendar year.
pub struct Medicare;

impl Payer for Medicare {
    fn id(&self) -> &str {
        "MEDICARE"
    }

    fn name(&self) -> &str {
        "Medicare"
    }

    fn appeal_window_days(&self) -> u32 {
        120
    }

    fn timely_filing_days(&self) -> u32 {
        365
    }

    fn appeal_address(&self) -> &str {
        "Medicare Administrative Contractor, Redeterminations Unit"
    }
}
