use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{upload} upload is missing a '{column}' column")]
    MissingColumn {
        upload: &'static str,
        column: &'static str,
    },

    #[error("line {line}: invalid {column} '{value}'")]
    InvalidValue {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("line {line}: {column} is required")]
    MissingValue { line: u64, column: &'static str },

    #[error("remittance document is empty")]
    EmptyDocument,

    #[error("remittance contains no paid claims")]
    NoClaimPayments,

    #[error("segment {index} ({segment}): {message}")]
    InvalidSegment {
        index: usize,
        segment: String,
        message: String,
    },
}
