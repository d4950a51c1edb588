//! revcycle-core
//!
//! Pure domain types for revenue-cycle reconciliation: contracts, payments,
//! claims, variance results and the settings that drive risk bucketing.
//! No I/O, no HTTP. This is the shared vocabulary of the revcycle system.

pub mod demo;
pub mod error;
pub mod models;
pub mod settings;
