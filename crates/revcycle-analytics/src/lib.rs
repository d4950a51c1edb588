//! revcycle-analytics
//!
//! The reconciliation core. [`AnalyticsEngine`] holds the current contract,
//! payment and claim lists, joins them on `(payer_id, cpt_code)`, measures
//! how far each payment is from its contracted rate and turns the
//! underpayments into appeal letters.

pub mod appeals;
pub mod engine;
pub mod error;
pub mod pricing;
pub mod summary;

pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
