//! Tests for field definition parsing

use super::create_test_blm;
use crate::error::BlmError;
use crate::parser::{Delimiters, FieldTitles};

const CARET: Delimiters = Delimiters {
    field: '^',
    row: '~',
};

#[test]
fn test_titles_normalized_in_order() {
    let titles = FieldTitles::parse(&create_test_blm(), CARET).unwrap();

    assert_eq!(
        titles.names(),
        &[
            "agentRef",
            "address1",
            "feature1",
            "feature2",
            "mediaImage00",
            "mediaImageText00",
            "mediaImage60",
            "mediaImageText60",
        ]
    );
}

#[test]
fn test_blank_segments_discarded() {
    let text = "#DEFINITION#\n\n~~AGENT_REF^Property Id^~\n~\n#DATA#\n#END#";
    let titles = FieldTitles::parse(text, CARET).unwrap();

    assert_eq!(titles.names(), &["agentRef", "propertyId"]);
}

#[test]
fn test_only_first_row_used() {
    let text = "#DEFINITION#\nAGENT_REF^PRICE^~\nIGNORED^ROW^~\n#DATA#\n#END#";
    let titles = FieldTitles::parse(text, CARET).unwrap();

    assert_eq!(titles.names(), &["agentRef", "price"]);
}

#[test]
fn test_empty_definition_section() {
    let err = FieldTitles::parse("#DEFINITION#\n \n#DATA#\n#END#", CARET).unwrap_err();
    assert!(matches!(err, BlmError::InvalidFormat { .. }));
}

#[test]
fn test_missing_data_marker() {
    let err = FieldTitles::parse("#DEFINITION#\nA^B^~\n#END#", CARET).unwrap_err();
    assert!(matches!(err, BlmError::InvalidFormat { .. }));
}

#[test]
fn test_titles_colliding_after_normalization() {
    let err = FieldTitles::parse("#DEFINITION#\nAGENT_REF^Agent Ref^~\n#DATA#\n#END#", CARET)
        .unwrap_err();
    assert!(matches!(err, BlmError::InvalidFormat { .. }));
}
