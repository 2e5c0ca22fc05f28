//! BLM header parsing
//!
//! The header carries the schema version and the two delimiters used by
//! every later section, one `key:value` pair per line:
//!
//! ```text
//! #HEADER#
//! Version : 3
//! EOF : '^'
//! EOR : '~'
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::section::find_marker;
use crate::constants::{DEFINITION_MARKER, HEADER_KEY_SEPARATOR, HEADER_MARKER, header_keys};
use crate::error::{BlmError, Result};

/// The configurable separators declared in the header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    /// Separates values within a row (`EOF`)
    pub field: char,

    /// Separates rows within a section (`EOR`)
    pub row: char,
}

/// Schema metadata from the header section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Declared schema version, passed through untouched
    pub version: String,

    pub delimiters: Delimiters,
}

impl Header {
    /// Parse the header section of a full BLM buffer
    pub fn parse(contents: &str) -> Result<Self> {
        let end = find_marker(contents, DEFINITION_MARKER)?;
        let block = &contents[..end];
        let block = block
            .find(HEADER_MARKER)
            .map_or(block, |start| &block[start + HEADER_MARKER.len()..]);

        let mut fields = HeaderFields::default();
        for line in block.trim().lines() {
            fields.parse_line(line);
        }
        fields.build()
    }
}

/// Raw key/value pairs collected from the header lines
#[derive(Default)]
struct HeaderFields {
    values: HashMap<String, String>,
}

impl HeaderFields {
    fn parse_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        // Keys never contain the separator, values may (e.g. timestamps)
        if let Some((key, value)) = line.split_once(HEADER_KEY_SEPARATOR) {
            self.values
                .insert(key.trim().to_lowercase(), value.trim().to_string());
        }
    }

    fn build(mut self) -> Result<Header> {
        let version = self
            .values
            .remove(header_keys::VERSION)
            .ok_or(BlmError::HeaderMissingVersion)?;

        let field = self
            .values
            .get(header_keys::END_OF_FIELD)
            .ok_or(BlmError::HeaderMissingFieldDelimiter)?;
        let field = unquote_delimiter(header_keys::END_OF_FIELD, field)?;

        let row = self
            .values
            .get(header_keys::END_OF_ROW)
            .ok_or(BlmError::HeaderMissingRowDelimiter)?;
        let row = unquote_delimiter(header_keys::END_OF_ROW, row)?;

        Ok(Header {
            version,
            delimiters: Delimiters { field, row },
        })
    }
}

/// Strip the surrounding quote characters from a delimiter value such as `'^'`
fn unquote_delimiter(key: &str, value: &str) -> Result<char> {
    let mut chars = value.chars();
    chars.next();
    chars.next_back();

    let mut inner = chars;
    match (inner.next(), inner.next()) {
        (Some(delimiter), None) => Ok(delimiter),
        (None, _) => Err(BlmError::invalid_format(format!(
            "empty {} delimiter in header",
            key.to_uppercase()
        ))),
        (Some(_), Some(_)) => Err(BlmError::invalid_format(format!(
            "{} delimiter {} is not a single character",
            key.to_uppercase(),
            value
        ))),
    }
}
