use thiserror::Error;

#[derive(Debug, Error)]
pub enum PayerError {
    #[error("unknown payer: {0}")]
    UnknownPayer(String),
}
