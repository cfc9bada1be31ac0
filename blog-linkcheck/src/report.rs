//! Link check report types.

use serde::Serialize;

use crate::error::{BrokenLink, ScanError};

/// Result of a link check run. Built fresh each run; never persisted.
///
/// A non-empty `scan_errors` means some documents were never checked, so
/// `ok` is false even when `broken` is empty.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct LinkReport {
    /// Number of documents read and checked.
    pub scanned_files: usize,
    /// Number of documents that could not be read.
    pub failed_files: usize,
    /// Internal links checked across all scanned documents.
    pub total_checked: usize,
    /// Unresolved links, ordered by file then line.
    pub broken: Vec<BrokenLink>,
    /// Documents that could not be read, plus directory walk errors.
    pub scan_errors: Vec<ScanError>,
    /// True when nothing is broken and every document was scanned.
    pub ok: bool,
}

impl LinkReport {
    /// Number of broken links found.
    #[must_use]
    pub fn total_broken(&self) -> usize {
        self.broken.len()
    }

    /// Total number of documents attempted (scanned + failed).
    #[must_use]
    pub fn files_attempted(&self) -> usize {
        self.scanned_files + self.failed_files
    }
}
