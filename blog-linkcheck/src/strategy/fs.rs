//! Filesystem document source.
//!
//! Discovers the blog section's markdown documents and reads them safely:
//! - Only regular `*.md` files directly inside the section are listed
//! - Results are sorted so runs are deterministic
//! - Bounded reads keep a single oversized file from exhausting memory

use std::io::Read;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ScanError, ScanErrorKind};

/// Result of attempting to read a document for scanning.
pub enum ScanResult {
    /// File was read successfully; contains the UTF-8 content.
    Ok(String),
    /// File could not be read; contains the scan error.
    Err(ScanError),
}

/// Check if file has the markdown extension.
fn is_markdown(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("md")
}

/// Find the markdown documents directly inside `section_dir`.
///
/// Returns `(files, scan_errors)`:
/// - `files`: documents sorted lexicographically by path.
/// - `scan_errors`: traversal errors (permission denied, etc.). These are
///   never silently discarded.
pub fn find_documents(section_dir: &Path) -> (Vec<PathBuf>, Vec<ScanError>) {
    let mut files = Vec::new();
    let mut scan_errors = Vec::new();

    for entry_result in WalkDir::new(section_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry_result {
            Ok(e) => e,
            Err(walk_err) => {
                let path = walk_err
                    .path()
                    .map_or_else(|| section_dir.to_path_buf(), Path::to_path_buf);
                scan_errors.push(ScanError {
                    file: path,
                    kind: ScanErrorKind::WalkError,
                    message: format!("Directory traversal error: {walk_err}"),
                });
                continue;
            }
        };

        let file_path = entry.path();
        if !file_path.is_file() || !is_markdown(file_path) {
            continue;
        }

        files.push(file_path.to_path_buf());
    }

    files.sort();
    (files, scan_errors)
}

/// Read a file using a bounded streaming read, enforcing `max_file_size`.
///
/// Returns `ScanResult::Err` if:
/// - The file exceeds `max_file_size`
/// - An I/O error occurs
/// - The content is not valid UTF-8
pub fn read_file_bounded(path: &Path, max_file_size: u64) -> ScanResult {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(e) => {
            return ScanResult::Err(ScanError {
                file: path.to_owned(),
                kind: ScanErrorKind::IoError,
                message: format!("Failed to open file: {e}"),
            });
        }
    };

    // Read at most max_file_size + 1 bytes to detect oversized files
    let mut buffer = Vec::new();
    if let Err(e) = file
        .take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
    {
        return ScanResult::Err(ScanError {
            file: path.to_owned(),
            kind: ScanErrorKind::IoError,
            message: format!("Failed to read file: {e}"),
        });
    }

    if buffer.len() as u64 > max_file_size {
        return ScanResult::Err(ScanError {
            file: path.to_owned(),
            kind: ScanErrorKind::FileTooLarge,
            message: format!("File exceeds maximum size of {max_file_size} bytes"),
        });
    }

    match String::from_utf8(buffer) {
        Ok(content) => ScanResult::Ok(content),
        Err(_) => ScanResult::Err(ScanError {
            file: path.to_owned(),
            kind: ScanErrorKind::InvalidEncoding,
            message: "File is not valid UTF-8".to_owned(),
        }),
    }
}
