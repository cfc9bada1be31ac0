//! Configuration types for link checking.
//!
//! Split into the site layout (where content and assets live) and the check
//! options (how documents are read). Neither is loaded from a file; the CLI
//! fills them from flags with defaults matching the conventional layout.

use std::path::{Path, PathBuf};

/// Name of the content section whose documents are scanned and whose
/// `/blog/...` links are resolved against post slugs.
pub const BLOG_SECTION: &str = "blog";

/// File that represents the landing page of a content section or directory.
pub const SECTION_INDEX: &str = "_index.md";

/// Where markdown documents and static assets live, relative to a repository root.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct SiteLayout {
    /// Repository root. Reported file paths are relative to this directory.
    pub repo_root: PathBuf,
    /// Content directory name under the root (default: `content`).
    pub content_dir: PathBuf,
    /// Static asset directory name under the root (default: `static`).
    pub static_dir: PathBuf,
}

impl SiteLayout {
    /// Layout rooted at `repo_root` with the default directory names.
    #[must_use]
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
            ..Self::default()
        }
    }

    /// Root of the markdown content tree.
    #[must_use]
    pub fn content_root(&self) -> PathBuf {
        self.repo_root.join(&self.content_dir)
    }

    /// Root of the static asset tree.
    #[must_use]
    pub fn static_root(&self) -> PathBuf {
        self.repo_root.join(&self.static_dir)
    }

    /// Directory holding blog posts (`<content>/blog`).
    #[must_use]
    pub fn blog_dir(&self) -> PathBuf {
        self.content_root().join(BLOG_SECTION)
    }

    /// Express `path` relative to the repository root when possible.
    #[must_use]
    pub fn relative_to_root(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.repo_root)
            .map_or_else(|_| path.to_path_buf(), Path::to_path_buf)
    }
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self {
            repo_root: PathBuf::from("."),
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Options controlling how documents are read.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct CheckConfig {
    /// Maximum document size in bytes (default: 10 MB).
    /// Larger documents are reported as scan errors instead of being read.
    pub max_file_size: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            max_file_size: 10_485_760,
        }
    }
}
