//! Lead list CSV export.

use crate::lead::domain::Lead;
use chrono::format::{Item, StrftimeItems};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use thiserror::Error;

/// Suggested download name.
pub const EXPORT_FILE_NAME: &str = "leads_export.csv";

/// Column headers, in order.
pub const EXPORT_HEADERS: [&str; 5] = ["Lead Name", "Email", "Phone", "Lead Stage", "Entry Date"];

/// Errors raised while rendering an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The entry-date pattern is not valid `strftime`.
    #[error("invalid date format: {0:?}")]
    DateFormat(String),
    /// The CSV writer failed.
    #[error(transparent)]
    Csv(#[from] csv::Error),
    /// Flushing the buffer failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The rendered buffer was not UTF-8.
    #[error(transparent)]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Renders leads as CSV, one row per lead in the given order.
///
/// Every field is double-quoted and rows are separated by `\n`, with no
/// newline after the last row. Missing emails render
/// as empty fields.
///
/// # Errors
///
/// Returns [`ExportError::DateFormat`] for a malformed `date_format`, or a
/// writer error if rendering fails.
pub fn leads_to_csv(leads: &[Lead], date_format: &str) -> Result<String, ExportError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(date_format).collect();
    if items.is_empty() || items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(ExportError::DateFormat(date_format.to_owned()));
    }

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(EXPORT_HEADERS)?;
    for lead in leads {
        let entry_date = lead
            .created_at()
            .format_with_items(items.iter())
            .to_string();
        writer.write_record([
            lead.display_name().as_str(),
            lead.email().unwrap_or_default(),
            lead.mobile(),
            lead.stage().as_str(),
            entry_date.as_str(),
        ])?;
    }
    let bytes = writer.into_inner().map_err(csv::IntoInnerError::into_error)?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}
