//! Core parsing orchestration and source handling

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::data::parse_records;
use super::definition::FieldTitles;
use super::header::Header;
use crate::error::{BlmError, Result};
use crate::observer::{ParseObserver, TracingObserver};
use crate::property::Record;

/// A fully parsed BLM file
#[derive(Debug, Clone)]
pub struct BlmDocument {
    pub header: Header,
    pub field_titles: Arc<FieldTitles>,
    pub records: Vec<Record>,
}

/// Parser for BLM property-listing files.
///
/// Input is either an in-memory buffer or a file path that is read when
/// parsing starts; setting one clears the other.
pub struct BlmParser {
    contents: Option<String>,
    file_path: Option<PathBuf>,
    observer: Box<dyn ParseObserver>,
}

impl Default for BlmParser {
    fn default() -> Self {
        Self::new()
    }
}

impl BlmParser {
    /// Create a parser with no input, logging through `tracing`
    pub fn new() -> Self {
        Self {
            contents: None,
            file_path: None,
            observer: Box::new(TracingObserver::default()),
        }
    }

    /// Create a parser over an in-memory buffer
    pub fn from_contents(contents: impl Into<String>) -> Self {
        let mut parser = Self::new();
        parser.set_contents(contents);
        parser
    }

    /// Create a parser that reads `path` when parsing starts
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let mut parser = Self::new();
        parser.set_file_path(path);
        parser
    }

    /// Replace the observer notified at each parse phase
    pub fn with_observer(mut self, observer: impl ParseObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn set_contents(&mut self, contents: impl Into<String>) {
        self.contents = Some(contents.into());
        self.file_path = None;
    }

    pub fn set_file_path(&mut self, path: impl Into<PathBuf>) {
        self.file_path = Some(path.into());
        self.contents = None;
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Parse the input and return its records in file order
    pub fn parse(&mut self) -> Result<Vec<Record>> {
        self.parse_document().map(|document| document.records)
    }

    /// Parse the input, keeping the header and field titles alongside the records
    pub fn parse_document(&mut self) -> Result<BlmDocument> {
        if self.contents.is_none() {
            let path = self.file_path.as_deref().ok_or(BlmError::NoContent)?;
            let contents = read_source(path)?;
            self.observer.source_loaded(path, contents.len());
            self.contents = Some(contents);
        }

        let contents = self.contents.as_deref().ok_or(BlmError::NoContent)?;
        parse_contents(contents, self.observer.as_ref())
    }
}

/// Parse a complete BLM buffer, reporting progress to `observer`
pub fn parse_contents(contents: &str, observer: &dyn ParseObserver) -> Result<BlmDocument> {
    let header = Header::parse(contents)?;
    observer.header_parsed(&header);

    let field_titles = Arc::new(FieldTitles::parse(contents, header.delimiters)?);
    observer.definitions_parsed(&field_titles);

    let records = parse_records(contents, header.delimiters, &field_titles, observer)?;
    observer.parse_finished(records.len());

    Ok(BlmDocument {
        header,
        field_titles,
        records,
    })
}

/// Read a BLM file, replacing invalid UTF-8 sequences
fn read_source(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| BlmError::io(path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
