//! JSON shape of a record
//!
//! ```json
//! {
//!   "property": { "agentRef": "123", "feature1": "Garden", ... },
//!   "features": { "feature1": "Garden" },
//!   "images":   { "mediaImage00": { "url": "...", "caption": "Front" } },
//!   "epcs":     { "mediaImage60": { "url": "...", "caption": "EPC" } }
//! }
//! ```
//!
//! `hips` is only emitted through [`Record::rendered`] with hips enabled.

use serde::ser::{Error as _, SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use super::record::Record;

/// Serializable view of a record with a configurable set of groups
#[derive(Debug, Clone, Copy)]
pub struct RenderedRecord<'a> {
    record: &'a Record,
    include_hips: bool,
}

impl Record {
    /// Serializable form of this record, optionally including `hips`
    pub fn rendered(&self, include_hips: bool) -> RenderedRecord<'_> {
        RenderedRecord {
            record: self,
            include_hips,
        }
    }
}

/// Attributes in definition order
struct Property<'a>(&'a Record);

impl Serialize for Property<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in self.0.attributes() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for RenderedRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let record = self.record;
        let images = record.images().map_err(S::Error::custom)?;
        let epcs = record.epcs().map_err(S::Error::custom)?;

        let fields = if self.include_hips { 5 } else { 4 };
        let mut state = serializer.serialize_struct("Record", fields)?;
        state.serialize_field("property", &Property(record))?;
        state.serialize_field("features", &record.features())?;
        state.serialize_field("images", &images)?;
        state.serialize_field("epcs", &epcs)?;
        if self.include_hips {
            let hips = record.hips().map_err(S::Error::custom)?;
            state.serialize_field("hips", &hips)?;
        }
        state.end()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rendered(false).serialize(serializer)
    }
}
