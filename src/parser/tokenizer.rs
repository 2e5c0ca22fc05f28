//! Row tokenization shared by the definition and data sections

/// Split one raw row into its field values.
///
/// The row's final character is dropped before splitting: every field in a
/// BLM row is terminated by the field delimiter, so the last one is a
/// trailing artifact rather than a separator.
pub fn tokenize_row(row: &str, field_delimiter: char) -> Vec<String> {
    strip_last_char(row)
        .split(field_delimiter)
        .map(str::to_string)
        .collect()
}

fn strip_last_char(row: &str) -> &str {
    match row.char_indices().next_back() {
        Some((index, _)) => &row[..index],
        None => row,
    }
}
