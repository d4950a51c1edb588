use revcycle_core::error::CoreError;
use revcycle_export::error::ExportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("invalid analysis settings: {0}")]
    Settings(#[from] CoreError),

    #[error("appeal rendering failed: {0}")]
    Export(#[from] ExportError),
}
