//! Configuration management and validation.
//!
//! Settings are layered: defaults, then an optional JSON file, then
//! command-line overrides applied by the binary.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::constants::DEFAULT_EXTENSION;
use crate::error::{BlmError, Result};

/// Output and discovery settings for the `blm` tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlmConfig {
    /// Pretty-print JSON output
    pub pretty: bool,

    /// Emit the `hips` group alongside the canonical record groups
    pub include_hips: bool,

    /// File extension matched when scanning a directory (case-insensitive)
    pub extension: String,

    /// Descend into subdirectories when scanning
    pub recursive: bool,

    /// Stop at the first file that fails to parse
    pub fail_fast: bool,
}

impl Default for BlmConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            include_hips: false,
            extension: DEFAULT_EXTENSION.to_string(),
            recursive: false,
            fail_fast: true,
        }
    }
}

impl BlmConfig {
    /// Load a JSON config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| BlmError::io(path, e))?;
        let config: Self = serde_json::from_str(&text).map_err(|e| {
            BlmError::configuration(format!("invalid config file {}: {}", path.display(), e))
        })?;
        debug!("Loaded configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_hips(mut self) -> Self {
        self.include_hips = true;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_recursive(mut self) -> Self {
        self.recursive = true;
        self
    }

    /// Keep going after a file fails, reporting failures at the end
    pub fn with_keep_going(mut self) -> Self {
        self.fail_fast = false;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let extension = self.extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(BlmError::configuration("extension must not be empty"));
        }
        if extension.contains(['/', '\\']) {
            return Err(BlmError::configuration(format!(
                "extension '{}' must not contain path separators",
                self.extension
            )));
        }
        Ok(())
    }

    /// Whether `path` carries the configured extension
    pub fn matches_extension(&self, path: &Path) -> bool {
        let wanted = self.extension.trim_start_matches('.');
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = BlmConfig::default();
        assert!(config.pretty);
        assert!(!config.include_hips);
        assert_eq!(config.extension, "blm");
        assert!(!config.recursive);
        assert!(config.fail_fast);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = BlmConfig::default()
            .with_pretty(false)
            .with_hips()
            .with_extension("txt")
            .with_recursive()
            .with_keep_going();

        assert!(!config.pretty);
        assert!(config.include_hips);
        assert_eq!(config.extension, "txt");
        assert!(config.recursive);
        assert!(!config.fail_fast);
    }

    #[test]
    fn test_validation() {
        assert!(BlmConfig::default().with_extension("").validate().is_err());
        assert!(BlmConfig::default().with_extension(".").validate().is_err());
        assert!(BlmConfig::default().with_extension("a/b").validate().is_err());
        assert!(BlmConfig::default().with_extension(".blm").validate().is_ok());
    }

    #[test]
    fn test_matches_extension() {
        let config = BlmConfig::default();
        assert!(config.matches_extension(Path::new("feed/listing.blm")));
        assert!(config.matches_extension(Path::new("LISTING.BLM")));
        assert!(!config.matches_extension(Path::new("listing.csv")));
        assert!(!config.matches_extension(Path::new("blm")));

        let dotted = BlmConfig::default().with_extension(".BLM");
        assert!(dotted.matches_extension(Path::new("listing.blm")));
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"include_hips": true, "recursive": true}}"#).unwrap();

        let config = BlmConfig::from_file(file.path()).unwrap();
        assert!(config.include_hips);
        assert!(config.recursive);
        assert!(config.pretty);
        assert_eq!(config.extension, "blm");
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();
        assert!(matches!(
            BlmConfig::from_file(file.path()),
            Err(BlmError::Configuration { .. })
        ));

        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"extension": ""}}"#).unwrap();
        assert!(matches!(
            BlmConfig::from_file(file.path()),
            Err(BlmError::Configuration { .. })
        ));
    }
}
