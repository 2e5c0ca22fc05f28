//! Parse-phase observers
//!
//! The parser reports its progress to a [`ParseObserver`] instead of a
//! global logger. [`TracingObserver`] forwards every event to `tracing`
//! and is the default; [`NullObserver`] discards everything.

use std::path::Path;
use tracing::{debug, error, info};

use crate::error::BlmError;
use crate::parser::{FieldTitles, Header};
use crate::property::Record;

/// Callbacks invoked at parse-phase boundaries. Every method defaults to a no-op.
pub trait ParseObserver {
    /// A source file was read into memory
    fn source_loaded(&self, _path: &Path, _bytes: usize) {}

    fn header_parsed(&self, _header: &Header) {}

    fn definitions_parsed(&self, _titles: &FieldTitles) {}

    /// The data section was split into `_rows` raw rows
    fn rows_located(&self, _rows: usize) {}

    fn record_parsed(&self, _record: &Record) {}

    /// A data row failed validation; the parse aborts after this call
    fn record_rejected(&self, _error: &BlmError) {}

    fn parse_finished(&self, _records: usize) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl ParseObserver for NullObserver {}

/// Observer that logs parse progress through `tracing`
#[derive(Debug, Default, Clone)]
pub struct TracingObserver {
    /// Label included in every event, usually the source file name
    source: Option<String>,
}

impl TracingObserver {
    pub fn for_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
        }
    }

    fn source(&self) -> &str {
        self.source.as_deref().unwrap_or("<memory>")
    }
}

impl ParseObserver for TracingObserver {
    fn source_loaded(&self, path: &Path, bytes: usize) {
        debug!(source = self.source(), path = %path.display(), bytes, "Read BLM file");
    }

    fn header_parsed(&self, header: &Header) {
        debug!(
            source = self.source(),
            version = %header.version,
            eof = %header.delimiters.field,
            eor = %header.delimiters.row,
            "Parsed BLM header"
        );
    }

    fn definitions_parsed(&self, titles: &FieldTitles) {
        debug!(
            source = self.source(),
            fields = titles.len(),
            "Parsed field titles"
        );
    }

    fn rows_located(&self, rows: usize) {
        debug!(source = self.source(), rows, "Located data rows");
    }

    fn record_parsed(&self, record: &Record) {
        debug!(source = self.source(), property = record.id(), "Created property record");
    }

    fn record_rejected(&self, error: &BlmError) {
        match error {
            BlmError::SchemaMismatch {
                record_id,
                expected,
                actual,
            } => error!(
                source = self.source(),
                property = %record_id,
                expected,
                actual,
                "BLM file definition mismatch"
            ),
            other => error!(source = self.source(), error = %other, "Rejected data row"),
        }
    }

    fn parse_finished(&self, records: usize) {
        info!(source = self.source(), records, "Parsed BLM file");
    }
}
