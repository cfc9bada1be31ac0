//! # blog-linkcheck
//!
//! Internal link checker for a static site's markdown content.
//!
//! Every blog post is scanned for markdown links outside fenced code blocks.
//! Links into the site itself (posts, images, data files, other pages) are
//! checked against the content and static trees; external URLs, anchors and
//! template syntax are skipped. Nothing is rendered and nothing is fixed:
//! broken links are only reported.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use blog_linkcheck::{CheckConfig, SiteLayout, check_site};
//!
//! let layout = SiteLayout::new("path/to/site");
//! let report = check_site(&layout, &CheckConfig::default()).unwrap();
//! println!("Links checked: {}", report.total_checked);
//! println!("Broken: {}", report.total_broken());
//! println!("OK: {}", report.ok);
//! ```

mod classify;
mod config;
mod error;
mod extract;
pub mod output;
mod probe;
mod report;
mod resolve;
mod scanner;
mod strategy;

pub use classify::{BlogTarget, TargetKind, classify, is_internal};
pub use config::{BLOG_SECTION, CheckConfig, SECTION_INDEX, SiteLayout};
pub use error::{BrokenLink, LinkCheckError, ScanError, ScanErrorKind};
pub use extract::{Link, extract_links, line_targets};
pub use probe::{CachedProbe, DiskProbe, MemoryProbe, PathProbe};
pub use report::LinkReport;
pub use resolve::{ResolutionOutcome, Resolver};
pub use scanner::{ProseLines, is_fence, prose_lines};

use std::path::Path;

use strategy::fs::{ScanResult, find_documents, read_file_bounded};

/// Check every internal link in one document.
///
/// Returns one outcome per internal link, in line order. External, anchor
/// and template targets produce no outcome.
#[must_use]
pub fn check_document<P: PathProbe>(
    resolver: &Resolver<P>,
    source_file: &Path,
    content: &str,
) -> Vec<ResolutionOutcome> {
    extract_links(source_file, content)
        .into_iter()
        .filter_map(|link| resolver.check_link(link))
        .collect()
}

/// Check the links of every blog post on disk.
///
/// Existence checks go through a per-run cache over the real filesystem.
///
/// # Errors
///
/// Returns [`LinkCheckError::MissingSection`] if the blog directory does not
/// exist. Unreadable documents are not errors here: they are recorded in
/// `report.scan_errors` and make the report fail.
pub fn check_site(
    layout: &SiteLayout,
    config: &CheckConfig,
) -> Result<LinkReport, LinkCheckError> {
    check_site_with_probe(layout, config, CachedProbe::new(DiskProbe))
}

/// Like [`check_site`], resolving link targets through `probe`.
///
/// Documents are still discovered and read from disk.
///
/// # Errors
///
/// Returns [`LinkCheckError::MissingSection`] if the blog directory does not
/// exist.
pub fn check_site_with_probe<P: PathProbe>(
    layout: &SiteLayout,
    config: &CheckConfig,
    probe: P,
) -> Result<LinkReport, LinkCheckError> {
    let blog_dir = layout.blog_dir();
    if !blog_dir.is_dir() {
        return Err(LinkCheckError::MissingSection {
            path: layout.relative_to_root(&blog_dir),
        });
    }

    let resolver = Resolver::new(layout, probe);
    let (files, mut scan_errors) = find_documents(&blog_dir);
    for walk_err in &mut scan_errors {
        tracing::warn!(file = %walk_err.file.display(), "{}", walk_err.message);
        walk_err.file = layout.relative_to_root(&walk_err.file);
    }
    let mut scanned_files: usize = 0;
    let mut total_checked: usize = 0;
    let mut broken = Vec::new();

    for file_path in &files {
        let relative = layout.relative_to_root(file_path);

        let content = match read_file_bounded(file_path, config.max_file_size) {
            ScanResult::Ok(c) => c,
            ScanResult::Err(mut e) => {
                tracing::warn!(file = %relative.display(), "{}", e.message);
                e.file = relative;
                scan_errors.push(e);
                continue;
            }
        };

        let outcomes = check_document(&resolver, &relative, &content);
        scanned_files += 1;
        total_checked += outcomes.len();
        tracing::debug!(
            file = %relative.display(),
            links = outcomes.len(),
            "scanned document"
        );

        for outcome in outcomes.into_iter().filter(|o| !o.resolved) {
            tracing::debug!(
                file = %relative.display(),
                line = outcome.link.line,
                target = %outcome.link.target,
                "broken link"
            );
            broken.push(BrokenLink {
                file: outcome.link.source_file,
                line: outcome.link.line,
                target: outcome.link.target,
            });
        }
    }

    let failed_files = failed_documents(&scan_errors);
    let ok = broken.is_empty() && scan_errors.is_empty();
    Ok(LinkReport {
        scanned_files,
        failed_files,
        total_checked,
        broken,
        scan_errors,
        ok,
    })
}

/// Documents that were found but could not be read. Directory walk errors
/// are not documents.
fn failed_documents(scan_errors: &[ScanError]) -> usize {
    scan_errors
        .iter()
        .filter(|e| e.kind != ScanErrorKind::WalkError)
        .count()
}
