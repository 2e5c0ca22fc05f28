//! Record classification into features, images, EPC and HIP views
//!
//! Views are derived from naming conventions in the normalized field keys:
//!
//! | View     | Keys                                                   | Kept when                 |
//! |----------|--------------------------------------------------------|---------------------------|
//! | features | `feature*`                                             | value is not blank        |
//! | images   | `mediaImageNN`, NN < 60                                | value is not blank        |
//! | epcs     | `mediaImage60`-`61`, `mediaDocument50`-`99`            | caption is `EPC`          |
//! | hips     | same keys as epcs                                      | caption is `HIP`          |
//!
//! The caption of `mediaImageNN` is `mediaImageTextNN`, and the caption of
//! `mediaDocumentNN` is `mediaDocumentTextNN`.
//!
//! Each view memoizes the indices of its matching keys the first time it is
//! requested. Values are always read fresh from the record, so
//! [`Record::set`] is visible on the next access, but which keys belong to a
//! view never changes after that first computation.

use once_cell::sync::OnceCell;

use super::record::Record;
use super::view::{FieldView, MediaEntry};
use crate::constants::media;
use crate::error::{BlmError, Result};

/// A media key split into its kind and two-digit slot number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSlot {
    Image(u8),
    Document(u8),
}

impl MediaSlot {
    /// Parse `mediaImageNN` or `mediaDocumentNN`; anything else is not a slot
    pub fn parse(key: &str) -> Option<Self> {
        if let Some(digits) = key.strip_prefix(media::IMAGE_PREFIX) {
            parse_slot_number(digits).map(MediaSlot::Image)
        } else if let Some(digits) = key.strip_prefix(media::DOCUMENT_PREFIX) {
            parse_slot_number(digits).map(MediaSlot::Document)
        } else {
            None
        }
    }

    pub fn number(self) -> u8 {
        match self {
            MediaSlot::Image(n) | MediaSlot::Document(n) => n,
        }
    }

    /// Key of the companion field holding this slot's caption
    pub fn caption_key(self) -> String {
        match self {
            MediaSlot::Image(n) => format!("{}{:02}", media::IMAGE_CAPTION_PREFIX, n),
            MediaSlot::Document(n) => format!("{}{:02}", media::DOCUMENT_CAPTION_PREFIX, n),
        }
    }

    /// Image slots below 60 hold photographs
    pub fn is_photograph(self) -> bool {
        matches!(self, MediaSlot::Image(n) if n < media::FIRST_CERTIFICATE_IMAGE_SLOT)
    }

    /// Slots that may hold EPC or HIP documents, depending on their caption
    pub fn is_certificate(self) -> bool {
        match self {
            MediaSlot::Image(n) => media::CERTIFICATE_IMAGE_SLOTS.contains(&n),
            MediaSlot::Document(n) => media::CERTIFICATE_DOCUMENT_SLOTS.contains(&n),
        }
    }
}

fn parse_slot_number(digits: &str) -> Option<u8> {
    if digits.len() != media::SLOT_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

pub fn is_feature_key(key: &str) -> bool {
    key.starts_with(media::FEATURE_PREFIX)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Certificate document kinds sharing the same slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateKind {
    /// Energy performance certificate
    Epc,
    /// Home information pack
    Hip,
}

impl CertificateKind {
    pub fn caption(self) -> &'static str {
        match self {
            CertificateKind::Epc => media::EPC_CAPTION,
            CertificateKind::Hip => media::HIP_CAPTION,
        }
    }
}

/// Memoized key sets, one cell per view
#[derive(Debug, Clone, Default)]
pub(crate) struct ViewCache {
    features: OnceCell<Vec<usize>>,
    images: OnceCell<Vec<usize>>,
    epcs: OnceCell<Vec<usize>>,
    hips: OnceCell<Vec<usize>>,
}

impl ViewCache {
    fn certificates(&self, kind: CertificateKind) -> &OnceCell<Vec<usize>> {
        match kind {
            CertificateKind::Epc => &self.epcs,
            CertificateKind::Hip => &self.hips,
        }
    }
}

/// Non-blank `feature*` values
pub(crate) fn features(record: &Record) -> FieldView<String> {
    let indices = record.views().features.get_or_init(|| {
        record
            .attributes()
            .enumerate()
            .filter(|(_, (key, _))| is_feature_key(key))
            .map(|(index, _)| index)
            .collect()
    });

    indices
        .iter()
        .map(|&index| record.entry(index))
        .filter(|(_, value)| !is_blank(value))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Photographs with their captions
pub(crate) fn images(record: &Record) -> Result<FieldView<MediaEntry>> {
    let indices = record.views().images.get_or_init(|| {
        record
            .attributes()
            .enumerate()
            .filter(|(_, (key, value))| {
                !is_blank(value) && MediaSlot::parse(key).is_some_and(MediaSlot::is_photograph)
            })
            .map(|(index, _)| index)
            .collect()
    });

    indices
        .iter()
        .map(|&index| -> Result<(String, MediaEntry)> {
            let (key, url) = record.entry(index);
            let caption = slot_caption(record, key)?;
            Ok((key.to_string(), MediaEntry::new(url, caption)))
        })
        .collect()
}

/// Certificate slots whose caption names `kind`
pub(crate) fn certificates(
    record: &Record,
    kind: CertificateKind,
) -> Result<FieldView<MediaEntry>> {
    let indices = record.views().certificates(kind).get_or_init(|| {
        record
            .attributes()
            .enumerate()
            .filter(|(_, (key, _))| MediaSlot::parse(key).is_some_and(MediaSlot::is_certificate))
            .map(|(index, _)| index)
            .collect()
    });

    let mut entries = Vec::new();
    for &index in indices {
        let (key, url) = record.entry(index);
        let caption = slot_caption(record, key)?;
        if caption == kind.caption() {
            entries.push((key.to_string(), MediaEntry::new(url, caption)));
        }
    }
    Ok(entries.into_iter().collect())
}

fn slot_caption<'a>(record: &'a Record, key: &str) -> Result<&'a str> {
    match MediaSlot::parse(key) {
        Some(slot) => record.get(&slot.caption_key()),
        None => Err(BlmError::unknown_field(key)),
    }
}
