//! Run statistics for multi-file processing

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of converting a batch of BLM files
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ProcessingStats {
    pub files_processed: usize,
    pub files_failed: usize,
    pub total_records: usize,

    /// Failed files with their error messages
    pub failures: Vec<(PathBuf, String)>,

    pub processing_time_ms: u128,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, records: usize) {
        self.files_processed += 1;
        self.total_records += records;
    }

    pub fn record_failure(&mut self, path: PathBuf, error: impl ToString) {
        self.files_failed += 1;
        self.failures.push((path, error.to_string()));
    }

    pub fn total_files(&self) -> usize {
        self.files_processed + self.files_failed
    }

    /// Percentage of files parsed successfully
    pub fn success_rate(&self) -> f64 {
        if self.total_files() == 0 {
            0.0
        } else {
            (self.files_processed as f64 / self.total_files() as f64) * 100.0
        }
    }

    pub fn is_successful(&self) -> bool {
        self.files_failed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = ProcessingStats::new();
        assert_eq!(stats.total_files(), 0);
        assert_eq!(stats.success_rate(), 0.0);
        assert!(stats.is_successful());
    }

    #[test]
    fn test_success_and_failure_counts() {
        let mut stats = ProcessingStats::new();
        stats.record_success(10);
        stats.record_success(5);
        stats.record_failure(PathBuf::from("bad.blm"), "BLM header invalid");

        assert_eq!(stats.files_processed, 2);
        assert_eq!(stats.files_failed, 1);
        assert_eq!(stats.total_records, 15);
        assert_eq!(stats.total_files(), 3);
        assert!((stats.success_rate() - 66.666).abs() < 0.01);
        assert!(!stats.is_successful());
        assert_eq!(stats.failures[0].0, PathBuf::from("bad.blm"));
    }
}
