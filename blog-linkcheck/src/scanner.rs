//! Line scanner that hides fenced code blocks.
//!
//! Link syntax inside a fenced block is sample text, not a live reference,
//! so only prose lines are handed to the extractor. Fences are not nested:
//! every fence line toggles the state, and an unterminated fence swallows the
//! rest of the document.

use std::iter::Enumerate;
use std::str::Lines;

/// Markdown parsing state for code block tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FenceState {
    Prose,
    FencedBlock,
}

/// Whether `line` opens or closes a fenced code block.
#[must_use]
pub fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with("```")
}

/// Iterator over `(line_number, line)` pairs outside fenced code blocks.
///
/// Line numbers are 1-indexed and count every physical line, fences and
/// blank lines included, so they match the document as written.
#[derive(Debug, Clone)]
pub struct ProseLines<'a> {
    lines: Enumerate<Lines<'a>>,
    state: FenceState,
}

impl<'a> Iterator for ProseLines<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, line) in self.lines.by_ref() {
            if is_fence(line) {
                self.state = match self.state {
                    FenceState::Prose => FenceState::FencedBlock,
                    FenceState::FencedBlock => FenceState::Prose,
                };
                continue;
            }
            if self.state == FenceState::Prose {
                return Some((idx + 1, line));
            }
        }
        None
    }
}

/// Scan `content` and yield only the lines outside fenced code blocks.
#[must_use]
pub fn prose_lines(content: &str) -> ProseLines<'_> {
    ProseLines {
        lines: content.lines().enumerate(),
        state: FenceState::Prose,
    }
}
