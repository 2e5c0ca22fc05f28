//! Locating the marker-delimited sections of a BLM buffer

use crate::error::{BlmError, Result};

/// Byte offset of `marker` in `contents`
pub fn find_marker(contents: &str, marker: &str) -> Result<usize> {
    contents
        .find(marker)
        .ok_or_else(|| BlmError::invalid_format(format!("missing {} marker", marker)))
}

/// Text between the end of `start_marker` and the start of `end_marker`.
///
/// The end marker is searched for after the start marker, so a marker-like
/// string inside an earlier section cannot truncate a later one.
pub fn between<'a>(contents: &'a str, start_marker: &str, end_marker: &str) -> Result<&'a str> {
    let start = find_marker(contents, start_marker)? + start_marker.len();
    let end = start + find_marker(&contents[start..], end_marker)?;
    Ok(&contents[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_markers() {
        let text = "#A#one#B#two#C#";
        assert_eq!(between(text, "#A#", "#B#").unwrap(), "one");
        assert_eq!(between(text, "#B#", "#C#").unwrap(), "two");
        assert_eq!(between(text, "#A#", "#C#").unwrap(), "one#B#two");
    }

    #[test]
    fn test_missing_marker() {
        let err = between("#A#one", "#A#", "#B#").unwrap_err();
        match err {
            BlmError::InvalidFormat { reason } => assert!(reason.contains("#B#")),
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }
}
