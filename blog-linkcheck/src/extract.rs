//! Markdown link extraction.
//!
//! Uses a two-stage approach per line:
//! 1. A discovery regex finds each `[text](` opener
//! 2. A balanced-parenthesis walk finds where the target ends

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::scanner::prose_lines;

/// Link text in square brackets immediately followed by an opening parenthesis.
static LINK_OPENER: LazyLock<Regex> = LazyLock::new(|| match Regex::new(r"\[[^\]]*\]\(") {
    Ok(regex) => regex,
    Err(err) => panic!("Invalid link regex: {err}"),
});

/// A link found in a document. Immutable once extracted.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct Link {
    /// Document the link was found in.
    pub source_file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Target between the parentheses, trimmed.
    pub target: String,
}

/// Byte length of the target starting at `rest`, up to (not including) the
/// parenthesis that balances the already-consumed opening one.
fn balanced_target_len(rest: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in rest.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' if depth == 0 => return Some(idx),
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Every link target on a single line, left to right.
///
/// Links never span lines. An opener without a closing parenthesis on the
/// same line is not a link, but later openers on the line are still tried.
/// `[text]()` has no target; a whitespace-only target is kept as `""`.
#[must_use]
pub fn line_targets(line: &str) -> Vec<&str> {
    let mut targets = Vec::new();
    let mut pos = 0;

    while let Some(mat) = LINK_OPENER.find_at(line, pos) {
        let rest = &line[mat.end()..];
        let Some(len) = balanced_target_len(rest) else {
            pos = mat.start() + 1;
            continue;
        };

        let raw = &rest[..len];
        if !raw.is_empty() {
            targets.push(raw.trim());
        }
        // Resume after the closing parenthesis.
        pos = mat.end() + len + 1;
    }

    targets
}

/// Extract every link from the prose lines of a document.
#[must_use]
pub fn extract_links(source_file: &Path, content: &str) -> Vec<Link> {
    prose_lines(content)
        .flat_map(|(line, text)| {
            line_targets(text).into_iter().map(move |target| Link {
                source_file: source_file.to_path_buf(),
                line,
                target: target.to_owned(),
            })
        })
        .collect()
}
