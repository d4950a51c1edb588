//! revcycle-export
//!
//! Appeal letters (Tera template → text → DOCX) and the variance report
//! download.

pub mod docx;
pub mod error;
pub mod render;
pub mod report;
pub mod styles;
