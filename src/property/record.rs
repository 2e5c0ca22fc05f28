//! A single property listing

use std::sync::Arc;

use super::classifier::{self, CertificateKind, ViewCache};
use super::view::{FieldView, MediaEntry};
use crate::error::{BlmError, Result};
use crate::parser::FieldTitles;

/// One data row zipped against the file's field titles.
///
/// Attributes are addressed by their normalized field name and always
/// follow the definition order. The derived views ([`features`],
/// [`images`], [`epcs`], [`hips`]) are computed on first access; see
/// [`classifier`](super::classifier) for how their key sets are frozen.
///
/// [`features`]: Record::features
/// [`images`]: Record::images
/// [`epcs`]: Record::epcs
/// [`hips`]: Record::hips
#[derive(Debug, Clone)]
pub struct Record {
    titles: Arc<FieldTitles>,
    values: Vec<String>,
    views: ViewCache,
}

impl Record {
    /// Zip `values` against `titles`; the counts must match exactly
    pub fn new(titles: Arc<FieldTitles>, values: Vec<String>) -> Result<Self> {
        if values.len() != titles.len() {
            return Err(BlmError::SchemaMismatch {
                record_id: values.first().cloned().unwrap_or_default(),
                expected: titles.len(),
                actual: values.len(),
            });
        }

        Ok(Self {
            titles,
            values,
            views: ViewCache::default(),
        })
    }

    /// The first attribute, which identifies the listing
    pub fn id(&self) -> &str {
        self.values.first().map_or("", String::as_str)
    }

    /// Value of a field by its normalized name
    pub fn get(&self, name: &str) -> Result<&str> {
        self.titles
            .index_of(name)
            .map(|index| self.values[index].as_str())
            .ok_or_else(|| BlmError::unknown_field(name))
    }

    /// Replace the value of an existing field.
    ///
    /// Views already computed keep their key sets but report the new value.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let index = self
            .titles
            .index_of(name)
            .ok_or_else(|| BlmError::unknown_field(name))?;
        self.values[index] = value.into();
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.titles.contains(name)
    }

    /// All `(name, value)` pairs in definition order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.titles
            .iter()
            .zip(self.values.iter().map(String::as_str))
    }

    pub fn field_titles(&self) -> &Arc<FieldTitles> {
        &self.titles
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Non-blank marketing features keyed by field name
    pub fn features(&self) -> FieldView<String> {
        classifier::features(self)
    }

    /// Photographs (`mediaImage00`-`59`) with their captions
    pub fn images(&self) -> Result<FieldView<MediaEntry>> {
        classifier::images(self)
    }

    /// Energy performance certificates
    pub fn epcs(&self) -> Result<FieldView<MediaEntry>> {
        classifier::certificates(self, CertificateKind::Epc)
    }

    /// Home information pack documents
    pub fn hips(&self) -> Result<FieldView<MediaEntry>> {
        classifier::certificates(self, CertificateKind::Hip)
    }

    pub(crate) fn entry(&self, index: usize) -> (&str, &str) {
        (self.titles.names()[index].as_str(), self.values[index].as_str())
    }

    pub(crate) fn views(&self) -> &ViewCache {
        &self.views
    }
}

/// Records are equal when they share field names and values; cached views are ignored
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.titles == other.titles && self.values == other.values
    }
}

impl Eq for Record {}
