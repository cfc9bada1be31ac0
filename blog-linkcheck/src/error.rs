//! Error types for link checking.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Failures that abort a run before any document is scanned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LinkCheckError {
    /// The blog section directory does not exist.
    #[error("{} not found", .path.display())]
    MissingSection {
        /// The directory that was expected to hold blog posts.
        path: PathBuf,
    },
}

/// The kind of scan-level failure that prevented a document from being checked.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanErrorKind {
    /// An I/O error occurred while reading the file.
    IoError,
    /// The file exceeded the configured maximum size limit.
    FileTooLarge,
    /// The file content is not valid UTF-8.
    InvalidEncoding,
    /// A directory traversal error (permission denied, etc.).
    WalkError,
}

/// A document that could not be checked at all.
///
/// Distinct from a broken link: a `ScanError` means the links of this file
/// were never looked at, so the run must not be reported as clean.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ScanError {
    /// The file path that could not be scanned.
    pub file: PathBuf,
    /// The kind of failure.
    pub kind: ScanErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ScanError {
    /// Format the error for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: [scan error] {}", self.file.display(), self.message)
    }
}

/// An internal link whose target does not resolve.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct BrokenLink {
    /// Document containing the link, relative to the repository root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// The link target exactly as written.
    pub target: String,
}

impl BrokenLink {
    /// Format as `{file}:{line} → {target}`.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}:{} \u{2192} {}", self.file.display(), self.line, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_broken_link() {
        let broken = BrokenLink {
            file: PathBuf::from("content/blog/post.md"),
            line: 12,
            target: "/blog/missing/".to_owned(),
        };
        assert_eq!(
            broken.format_human_readable(),
            "content/blog/post.md:12 \u{2192} /blog/missing/"
        );
    }

    #[test]
    fn test_format_scan_error() {
        let err = ScanError {
            file: PathBuf::from("content/blog/bad.md"),
            kind: ScanErrorKind::InvalidEncoding,
            message: "File is not valid UTF-8".to_owned(),
        };
        let formatted = err.format_human_readable();
        assert!(formatted.starts_with("content/blog/bad.md: [scan error]"));
        assert!(formatted.contains("UTF-8"));
    }

    #[test]
    fn test_missing_section_message() {
        let err = LinkCheckError::MissingSection {
            path: PathBuf::from("content/blog"),
        };
        assert_eq!(err.to_string(), "content/blog not found");
    }
}
