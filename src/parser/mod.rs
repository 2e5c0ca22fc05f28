//! Structural parser for BLM files
//!
//! ## Architecture
//!
//! - [`header`] - version and delimiters from the `#HEADER#` section
//! - [`definition`] - ordered, normalized field titles from `#DEFINITION#`
//! - [`data`] - one record per row of the `#DATA#` section
//! - [`tokenizer`] - row splitting shared by the definition and data sections
//! - [`blm_parser`] - source handling and phase orchestration
//!
//! ## Usage
//!
//! ```rust
//! use blm_parser::BlmParser;
//!
//! let blm = "#HEADER#\nVersion : 3\nEOF : '^'\nEOR : '~'\n\
//!            #DEFINITION#\nAGENT_REF^FEATURE1^~\n\
//!            #DATA#\n123^Garden^~\n#END#";
//!
//! let records = BlmParser::from_contents(blm).parse()?;
//! assert_eq!(records[0].get("agentRef")?, "123");
//! # Ok::<(), blm_parser::BlmError>(())
//! ```

pub mod blm_parser;
pub mod data;
pub mod definition;
pub mod header;
pub mod section;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

pub use blm_parser::{BlmDocument, BlmParser, parse_contents};
pub use definition::{FieldTitles, normalize_field_name};
pub use header::{Delimiters, Header};
pub use tokenizer::tokenize_row;
