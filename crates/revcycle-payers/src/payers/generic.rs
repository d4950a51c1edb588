use revcycle_core::models::key::normalize;

use crate::Payer;

/// Fallback for payers without a registered profile.
pub struct GenericPayer {
    id: String,
}

impl GenericPayer {
    pub fn new(id: &str) -> Self {
        Self { id: normalize(id) }
    }
}

impl Payer for GenericPayer {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.id
    }

    fn appeal_window_days(&self) -> u32 {
        180
    }

    fn timely_filing_days(&self) -> u32 {
        90
    }

    fn appeal_address(&self) -> &str {
        "Provider Appeals Department"
    }
}
