//! Format constants for BLM files
//!
//! Section markers, header keys and the naming conventions the record
//! classifier matches against.

// =============================================================================
// Section Markers
// =============================================================================

/// Opening marker of the header section
pub const HEADER_MARKER: &str = "#HEADER#";

/// Marker separating the header from the field definitions
pub const DEFINITION_MARKER: &str = "#DEFINITION#";

/// Marker separating the field definitions from the data rows
pub const DATA_MARKER: &str = "#DATA#";

/// Marker closing the data section
pub const END_MARKER: &str = "#END#";

// =============================================================================
// Header Keys
// =============================================================================

/// Separator between a header key and its value
pub const HEADER_KEY_SEPARATOR: char = ':';

pub mod header_keys {
    /// Schema version, passed through untouched
    pub const VERSION: &str = "version";

    /// End-of-field delimiter
    pub const END_OF_FIELD: &str = "eof";

    /// End-of-row delimiter
    pub const END_OF_ROW: &str = "eor";
}

// =============================================================================
// Classification Rules
// =============================================================================

/// Key prefixes and caption conventions used to derive record views.
///
/// All keys are in the normalized camel-case form produced from the
/// definition row, e.g. `MEDIA_IMAGE_00` becomes `mediaImage00`.
pub mod media {
    use std::ops::RangeInclusive;

    /// Prefix of marketing feature fields
    pub const FEATURE_PREFIX: &str = "feature";

    /// Prefix of image slots
    pub const IMAGE_PREFIX: &str = "mediaImage";

    /// Prefix of image caption slots
    pub const IMAGE_CAPTION_PREFIX: &str = "mediaImageText";

    /// Prefix of document slots
    pub const DOCUMENT_PREFIX: &str = "mediaDocument";

    /// Prefix of document caption slots
    pub const DOCUMENT_CAPTION_PREFIX: &str = "mediaDocumentText";

    /// Number of digits in a media slot suffix
    pub const SLOT_DIGITS: usize = 2;

    /// Image slots below this number are photographs
    pub const FIRST_CERTIFICATE_IMAGE_SLOT: u8 = 60;

    /// Image slots that may carry certificate documents
    pub const CERTIFICATE_IMAGE_SLOTS: RangeInclusive<u8> = 60..=61;

    /// Document slots that may carry certificate documents
    pub const CERTIFICATE_DOCUMENT_SLOTS: RangeInclusive<u8> = 50..=99;

    /// Caption marking an energy performance certificate
    pub const EPC_CAPTION: &str = "EPC";

    /// Caption marking a home information pack
    pub const HIP_CAPTION: &str = "HIP";
}

// =============================================================================
// File Discovery
// =============================================================================

/// Default extension matched when scanning directories
pub const DEFAULT_EXTENSION: &str = "blm";
