use csv::Writer;
use revcycle_core::models::variance::VarianceRecord;

use crate::error::ExportError;

/// Variance records as a CSV download, one row per record, header first.
/// No records means an empty string.
pub fn write_variance_csv(records: &[VarianceRecord]) -> Result<String, ExportError> {
    let mut writer = Writer::from_writer(Vec::new());
    for record in records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Report(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Report(e.to_string()))
}
