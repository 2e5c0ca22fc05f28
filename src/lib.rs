//! BLM Parser Library
//!
//! A Rust library for reading BLM property-listing flat files, the
//! delimiter-configurable format used to exchange listings with property
//! portals.
//!
//! This library provides tools for:
//! - Reading the version and delimiters declared in the `#HEADER#` section
//! - Normalizing `#DEFINITION#` titles into camel-case field names
//! - Turning every `#DATA#` row into a [`Record`] with typed accessors
//! - Deriving feature, image, EPC and HIP views from field naming conventions
//! - Rendering records as JSON
//!
//! Parse progress is reported through a [`ParseObserver`]; the default
//! observer logs through `tracing`.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod observer;
pub mod parser;
pub mod property;
pub mod stats;

pub use config::BlmConfig;
pub use error::{BlmError, Result};
pub use observer::{NullObserver, ParseObserver, TracingObserver};
pub use parser::{BlmDocument, BlmParser, Delimiters, FieldTitles, Header};
pub use property::{FieldView, MediaEntry, Record};

/// Parse an in-memory BLM buffer into records
pub fn parse_str(contents: &str) -> Result<Vec<Record>> {
    parser::parse_contents(contents, &TracingObserver::default()).map(|document| document.records)
}
