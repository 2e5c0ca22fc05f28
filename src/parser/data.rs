//! Data section parsing
//!
//! Splits the block between `#DATA#` and `#END#` into rows and zips each
//! row against the field titles. Rows are independent of one another;
//! the first malformed row aborts the parse.

use std::sync::Arc;

use super::definition::FieldTitles;
use super::header::Delimiters;
use super::section::between;
use super::tokenizer::tokenize_row;
use crate::constants::{DATA_MARKER, END_MARKER};
use crate::error::Result;
use crate::observer::ParseObserver;
use crate::property::Record;

/// Parse every data row of a full BLM buffer into records, in file order
pub fn parse_records(
    contents: &str,
    delimiters: Delimiters,
    titles: &Arc<FieldTitles>,
    observer: &dyn ParseObserver,
) -> Result<Vec<Record>> {
    let data = between(contents, DATA_MARKER, END_MARKER)?;

    let mut rows: Vec<&str> = data.split(delimiters.row).collect();
    // The delimiter closing the final row leaves an empty artifact before #END#
    rows.pop();

    observer.rows_located(rows.len());

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let row = row.trim();
        if row.is_empty() {
            continue;
        }

        let record = parse_row(row, delimiters, titles).inspect_err(|error| {
            observer.record_rejected(error);
        })?;
        observer.record_parsed(&record);
        records.push(record);
    }

    Ok(records)
}

/// Tokenize one trimmed data row and zip it against the field titles
pub fn parse_row(row: &str, delimiters: Delimiters, titles: &Arc<FieldTitles>) -> Result<Record> {
    let values = tokenize_row(row, delimiters.field);
    Record::new(Arc::clone(titles), values)
}
