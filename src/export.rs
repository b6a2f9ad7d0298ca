//! Download encoders for a result set.
//!
//! Both encoders are pure; the HTTP layer only attaches headers.

use crate::models::ResultItem;
use thiserror::Error;

/// Column order of the CSV export
pub const CSV_HEADER: [&str; 4] = ["rank", "title", "url", "snippet"];

pub const JSON_FILENAME: &str = "results.json";
pub const CSV_FILENAME: &str = "results.csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer flush failed: {0}")]
    Flush(String),
}

/// Pretty-printed bare JSON array. Non-ASCII text is written as-is.
pub fn results_to_json(results: &[ResultItem]) -> Result<Vec<u8>, ExportError> {
    Ok(serde_json::to_vec_pretty(results)?)
}

/// CSV with a fixed header row and CRLF record terminators. `None` fields become empty cells.
pub fn results_to_csv(results: &[ResultItem]) -> Result<Vec<u8>, ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;
    for item in results {
        wtr.write_record([
            item.rank.to_string().as_str(),
            item.title.as_deref().unwrap_or(""),
            item.url.as_deref().unwrap_or(""),
            item.snippet.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.into_inner().map_err(|e| ExportError::Flush(e.to_string()))
}
