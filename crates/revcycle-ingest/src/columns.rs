use csv::StringRecord;
use jiff::civil::Date;

use crate::error::IngestError;
use crate::values::{non_empty, parse_date, parse_money};

/// Fold a header for comparison: lower-case ASCII alphanumerics only, so
/// `Payer ID`, `payer_id` and `payerId` all become `payerid`.
pub fn fold_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Resolved header row of one upload.
pub struct Columns {
    upload: &'static str,
    folded: Vec<String>,
}

impl Columns {
    pub fn new(upload: &'static str, headers: &StringRecord) -> Self {
        Self {
            upload,
            folded: headers.iter().map(fold_header).collect(),
        }
    }

    /// Index of the first header matching any alias.
    pub fn find(&self, aliases: &[&str]) -> Option<usize> {
        aliases
            .iter()
            .find_map(|alias| self.folded.iter().position(|h| h == alias))
    }

    pub fn require(&self, column: &'static str, aliases: &[&str]) -> Result<usize, IngestError> {
        self.find(aliases).ok_or(IngestError::MissingColumn {
            upload: self.upload,
            column,
        })
    }
}

/// One data row plus the source line number used in error messages.
pub struct Row<'a> {
    record: &'a StringRecord,
    line: u64,
}

impl<'a> Row<'a> {
    pub fn new(record: &'a StringRecord) -> Self {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        Self { record, line }
    }

    pub fn line(&self) -> u64 {
        self.line
    }

    pub fn is_blank(&self) -> bool {
        self.record.iter().all(|cell| cell.trim().is_empty())
    }

    fn cell(&self, idx: usize) -> &'a str {
        self.record.get(idx).unwrap_or("")
    }

    pub fn text(&self, idx: usize, column: &'static str) -> Result<String, IngestError> {
        non_empty(self.cell(idx)).ok_or(IngestError::MissingValue {
            line: self.line,
            column,
        })
    }

    pub fn optional_text(&self, idx: Option<usize>) -> Option<String> {
        idx.and_then(|i| non_empty(self.cell(i)))
    }

    pub fn money(&self, idx: usize, column: &'static str) -> Result<f64, IngestError> {
        let raw = self.cell(idx);
        if raw.trim().is_empty() {
            return Err(IngestError::MissingValue {
                line: self.line,
                column,
            });
        }
        parse_money(raw).ok_or_else(|| self.invalid(column, raw))
    }

    /// Blank cells are zero; garbage is still an error.
    pub fn optional_money(&self, idx: Option<usize>, column: &'static str) -> Result<f64, IngestError> {
        match idx.map(|i| self.cell(i)) {
            Some(raw) if !raw.trim().is_empty() => {
                parse_money(raw).ok_or_else(|| self.invalid(column, raw))
            }
            _ => Ok(0.0),
        }
    }

    pub fn date(&self, idx: usize, column: &'static str) -> Result<Date, IngestError> {
        let raw = self.cell(idx);
        if raw.trim().is_empty() {
            return Err(IngestError::MissingValue {
                line: self.line,
                column,
            });
        }
        parse_date(raw).ok_or_else(|| self.invalid(column, raw))
    }

    pub fn optional_date(&self, idx: Option<usize>, column: &'static str) -> Result<Option<Date>, IngestError> {
        match idx.map(|i| self.cell(i)) {
            Some(raw) if !raw.trim().is_empty() => parse_date(raw)
                .map(Some)
                .ok_or_else(|| self.invalid(column, raw)),
            _ => Ok(None),
        }
    }

    fn invalid(&self, column: &'static str, raw: &str) -> IngestError {
        IngestError::InvalidValue {
            line: self.line,
            column,
            value: raw.trim().to_string(),
        }
    }
}
