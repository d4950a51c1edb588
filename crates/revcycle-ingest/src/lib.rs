//! revcycle-ingest
//!
//! Turns uploaded files into record lists: CSV exports for contracts,
//! payments and claims, and ANSI X12 835 remittance advice for payments.

pub mod columns;
pub mod era;
pub mod error;
pub mod uploads;
pub mod values;

pub use era::{EraClaim, EraRemittance, parse_era};
pub use error::IngestError;
pub use uploads::{parse_claims, parse_contracts, parse_payments};
