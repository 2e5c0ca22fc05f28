//! Field definition parsing and field-name normalization

use std::collections::HashMap;

use super::header::Delimiters;
use super::section::between;
use super::tokenizer::tokenize_row;
use crate::constants::{DATA_MARKER, DEFINITION_MARKER};
use crate::error::{BlmError, Result};

/// Canonical, ordered column names shared by every record of a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTitles {
    names: Vec<String>,
    name_to_index: HashMap<String, usize>,
}

impl FieldTitles {
    /// Build from already-normalized names, rejecting duplicates
    pub fn new(names: Vec<String>) -> Result<Self> {
        let mut name_to_index = HashMap::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            if name_to_index.insert(name.clone(), index).is_some() {
                return Err(BlmError::invalid_format(format!(
                    "duplicate field title '{}' in definition",
                    name
                )));
            }
        }

        Ok(Self {
            names,
            name_to_index,
        })
    }

    /// Parse the definition section of a full BLM buffer
    pub fn parse(contents: &str, delimiters: Delimiters) -> Result<Self> {
        let definitions = between(contents, DEFINITION_MARKER, DATA_MARKER)?.trim();

        let title_row = definitions
            .split(delimiters.row)
            .find(|row| !row.is_empty())
            .ok_or_else(|| BlmError::invalid_format("definition section has no title row"))?;

        let names = tokenize_row(title_row, delimiters.field)
            .iter()
            .map(|title| normalize_field_name(title))
            .collect();

        Self::new(names)
    }

    /// Index of a field in record order
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.name_to_index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_index.contains_key(name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Convert a raw definition title to its canonical camel-case identifier.
///
/// The title is lower-cased first; any character that is not alphanumeric
/// starts a new word and is dropped. `"Property Id"` becomes `propertyId`
/// and `"MEDIA_IMAGE_TEXT_00"` becomes `mediaImageText00`.
pub fn normalize_field_name(title: &str) -> String {
    let mut name = String::with_capacity(title.len());
    let mut word_start = false;

    for c in title.trim().to_lowercase().chars() {
        if !c.is_alphanumeric() {
            word_start = !name.is_empty();
            continue;
        }

        if word_start {
            name.extend(c.to_uppercase());
            word_start = false;
        } else {
            name.push(c);
        }
    }

    name
}
