//! Shared output formatting for link reports.
//!
//! Provides JSON and plain-text formatters for `LinkReport`.

use std::io::Write;

use crate::report::LinkReport;

/// Format a `LinkReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &LinkReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `LinkReport` as human-readable plain text to a writer.
///
/// A clean run prints a single summary line. Otherwise every broken link is
/// listed as `<file>:<line> → <target>` under a header with the counts,
/// followed by any documents that could not be scanned.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &LinkReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    if report.ok {
        writeln!(
            writer,
            "All internal links OK ({} checked across {} files)",
            report.total_checked, report.scanned_files
        )?;
        return Ok(());
    }

    if !report.broken.is_empty() {
        writeln!(
            writer,
            "BROKEN LINKS FOUND ({} broken / {} checked)",
            report.total_broken(),
            report.total_checked
        )?;
        writeln!(writer)?;
        for broken in &report.broken {
            writeln!(writer, "  {}", broken.format_human_readable())?;
        }
        writeln!(writer)?;
    }

    if !report.scan_errors.is_empty() {
        writeln!(writer, "FILES NOT SCANNED ({})", report.scan_errors.len())?;
        writeln!(writer)?;
        for scan_err in &report.scan_errors {
            writeln!(writer, "  {}", scan_err.format_human_readable())?;
        }
        writeln!(writer)?;
        writeln!(
            writer,
            "{} of {} files checked ({} internal links)",
            report.scanned_files,
            report.files_attempted(),
            report.total_checked
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BrokenLink, ScanError, ScanErrorKind};
    use std::path::PathBuf;

    fn report(broken: Vec<BrokenLink>, scan_errors: Vec<ScanError>) -> LinkReport {
        let ok = broken.is_empty() && scan_errors.is_empty();
        LinkReport {
            scanned_files: 2,
            failed_files: scan_errors.len(),
            total_checked: 5,
            broken,
            scan_errors,
            ok,
        }
    }

    fn render(report: &LinkReport) -> String {
        let mut buf = Vec::new();
        write_human(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_success_is_single_line() {
        let out = render(&report(vec![], vec![]));
        assert_eq!(out, "All internal links OK (5 checked across 2 files)\n");
    }

    #[test]
    fn test_broken_links_listed_with_summary() {
        let out = render(&report(
            vec![
                BrokenLink {
                    file: PathBuf::from("content/blog/a.md"),
                    line: 3,
                    target: "/blog/gone/".to_owned(),
                },
                BrokenLink {
                    file: PathBuf::from("content/blog/b.md"),
                    line: 9,
                    target: "/images/x.png".to_owned(),
                },
            ],
            vec![],
        ));
        assert_eq!(
            out,
            "BROKEN LINKS FOUND (2 broken / 5 checked)\n\
             \n  content/blog/a.md:3 \u{2192} /blog/gone/\
             \n  content/blog/b.md:9 \u{2192} /images/x.png\
             \n\n"
        );
    }

    #[test]
    fn test_scan_errors_listed_separately() {
        let out = render(&report(
            vec![],
            vec![ScanError {
                file: PathBuf::from("content/blog/bad.md"),
                kind: ScanErrorKind::InvalidEncoding,
                message: "File is not valid UTF-8".to_owned(),
            }],
        ));
        assert!(!out.contains("BROKEN LINKS FOUND"));
        assert!(out.contains("FILES NOT SCANNED (1)"));
        assert!(out.contains("content/blog/bad.md: [scan error] File is not valid UTF-8"));
        assert!(out.contains("2 of 3 files checked"));
    }

    #[test]
    fn test_json_contract() {
        let mut buf = Vec::new();
        write_json(&report(vec![], vec![]), &mut buf).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        for key in [
            "scanned_files",
            "failed_files",
            "total_checked",
            "broken",
            "scan_errors",
            "ok",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert!(json["ok"].as_bool().unwrap());
    }
}
