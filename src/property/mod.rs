//! Parsed property listings and their derived views
//!
//! - [`record`] - the [`Record`] type and its typed accessors
//! - [`classifier`] - feature, image, EPC and HIP classification
//! - [`view`] - ordered view containers and [`MediaEntry`]
//! - [`serialize`] - JSON rendering

pub mod classifier;
pub mod record;
pub mod serialize;
pub mod view;

#[cfg(test)]
pub mod tests;

pub use classifier::{CertificateKind, MediaSlot};
pub use record::Record;
pub use serialize::RenderedRecord;
pub use view::{FieldView, MediaEntry};
