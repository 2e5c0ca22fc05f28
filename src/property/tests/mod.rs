//! Test utilities for record and classifier testing

use std::sync::Arc;

use crate::parser::FieldTitles;
use crate::property::Record;


/// Build a record from normalized `(field, value)` pairs
pub fn record_from(pairs: &[(&str, &str)]) -> Record {
    let titles = FieldTitles::new(pairs.iter().map(|(key, _)| key.to_string()).collect()).unwrap();
    let values = pairs.iter().map(|(_, value)| value.to_string()).collect();
    Record::new(Arc::new(titles), values).unwrap()
}

/// A listing with two photographs, one EPC image, one HIP document and
/// features with a blank entry
pub fn create_listing() -> Record {
    record_from(&[
        ("agentRef", "1234_0001"),
        ("feature1", "Garden"),
        ("feature2", ""),
        ("feature3", "Garage"),
        ("mediaImage00", "http://x/front.jpg"),
        ("mediaImageText00", "Front"),
        ("mediaImage05", "http://x/a.jpg"),
        ("mediaImageText05", "Front"),
        ("mediaImage06", ""),
        ("mediaImageText06", ""),
        ("mediaImage60", "http://x/epc.pdf"),
        ("mediaImageText60", "EPC"),
        ("mediaDocument50", "http://x/hip.pdf"),
        ("mediaDocumentText50", "HIP"),
        ("mediaDocument51", "http://x/brochure.pdf"),
        ("mediaDocumentText51", "Brochure"),
    ])
}
