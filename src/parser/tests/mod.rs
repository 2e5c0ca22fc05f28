//! Test utilities for BLM parser testing
//!
//! Builders for BLM buffers and an observer that records parse events.

use std::cell::RefCell;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;
use tempfile::NamedTempFile;

use crate::error::BlmError;
use crate::observer::ParseObserver;
use crate::parser::{FieldTitles, Header};
use crate::property::Record;

// Test modules
mod definition_tests;

/// Build a BLM buffer in the layout portals publish: every field is
/// terminated by `eof` and every row by `eor` followed by a line break
pub fn build_blm(eof: char, eor: char, titles: &[&str], rows: &[&[&str]]) -> String {
    let mut blm = format!(
        "#HEADER#\nVersion : 3\nEOF : '{eof}'\nEOR : '{eor}'\n\
         Property Count : {}\nGenerated Date : 07-May-2014 21:00\n\n",
        rows.len()
    );

    blm.push_str("#DEFINITION#\n");
    blm.push_str(&terminated_row(titles, eof, eor));

    blm.push_str("#DATA#\n");
    for row in rows {
        blm.push_str(&terminated_row(row, eof, eor));
    }
    blm.push_str("#END#\n");
    blm
}

fn terminated_row(values: &[&str], eof: char, eor: char) -> String {
    let mut row = String::new();
    for value in values {
        row.push_str(value);
        row.push(eof);
    }
    row.push(eor);
    row.push('\n');
    row
}

/// A small listing feed with photographs and certificates
pub fn create_test_blm() -> String {
    build_blm(
        '^',
        '~',
        &[
            "AGENT_REF",
            "ADDRESS_1",
            "FEATURE1",
            "FEATURE2",
            "MEDIA_IMAGE_00",
            "MEDIA_IMAGE_TEXT_00",
            "MEDIA_IMAGE_60",
            "MEDIA_IMAGE_TEXT_60",
        ],
        &[
            &[
                "1234_0001",
                "1 High Street",
                "Garden",
                "Garage",
                "http://x/front.jpg",
                "Front",
                "http://x/epc.pdf",
                "EPC",
            ],
            &["1234_0002", "2 High Street", "", "Loft", "", "", "", ""],
            &[
                "1234_0003",
                "3 High Street",
                "Pool",
                "",
                "http://x/rear.jpg",
                "Rear",
                "http://x/hip.pdf",
                "HIP",
            ],
        ],
    )
}

/// Write `content` to a temporary file
pub fn create_temp_file(content: &[u8]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content).unwrap();
    temp_file
}

/// Observer that keeps a log of every event it receives
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub events: Rc<RefCell<Vec<String>>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    fn push(&self, event: String) {
        self.events.borrow_mut().push(event);
    }
}

impl ParseObserver for RecordingObserver {
    fn source_loaded(&self, _path: &Path, bytes: usize) {
        self.push(format!("source:{}", bytes));
    }

    fn header_parsed(&self, header: &Header) {
        self.push(format!("header:{}", header.version));
    }

    fn definitions_parsed(&self, titles: &FieldTitles) {
        self.push(format!("definitions:{}", titles.len()));
    }

    fn rows_located(&self, rows: usize) {
        self.push(format!("rows:{}", rows));
    }

    fn record_parsed(&self, record: &Record) {
        self.push(format!("record:{}", record.id()));
    }

    fn record_rejected(&self, error: &BlmError) {
        match error {
            BlmError::SchemaMismatch { record_id, .. } => self.push(format!("rejected:{}", record_id)),
            other => self.push(format!("rejected:{}", other)),
        }
    }

    fn parse_finished(&self, records: usize) {
        self.push(format!("finished:{}", records));
    }
}
