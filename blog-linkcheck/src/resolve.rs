//! Resolution of internal link targets against the content and static trees.

use std::path::PathBuf;

use serde::Serialize;

use crate::classify::{BlogTarget, TargetKind, classify};
use crate::config::{SECTION_INDEX, SiteLayout};
use crate::extract::Link;
use crate::probe::PathProbe;

/// Whether one extracted link resolved.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ResolutionOutcome {
    /// The link that was judged.
    pub link: Link,
    /// True if the target exists.
    pub resolved: bool,
}

/// Maps link targets to existence checks using per-prefix conventions.
///
/// Read-only: the resolver never touches the trees beyond asking the probe.
#[derive(Debug)]
pub struct Resolver<P> {
    content_root: PathBuf,
    static_root: PathBuf,
    blog_dir: PathBuf,
    probe: P,
}

impl<P: PathProbe> Resolver<P> {
    /// Build a resolver for `layout` that checks paths through `probe`.
    #[must_use]
    pub fn new(layout: &SiteLayout, probe: P) -> Self {
        Self {
            content_root: layout.content_root(),
            static_root: layout.static_root(),
            blog_dir: layout.blog_dir(),
            probe,
        }
    }

    /// True if `target` resolves. Ignored targets have nothing to check and
    /// count as resolved.
    #[must_use]
    pub fn resolve(&self, target: &str) -> bool {
        self.resolve_kind(classify(target))
    }

    /// True if an already classified target resolves.
    #[must_use]
    pub fn resolve_kind(&self, kind: TargetKind<'_>) -> bool {
        match kind {
            TargetKind::Ignored | TargetKind::Relative => true,
            TargetKind::Blog(blog) => self.resolve_blog(blog),
            TargetKind::Asset { path } => self.probe.exists(&self.static_root.join(path)),
            // Series pages come from taxonomy config this checker does not load.
            TargetKind::Series => false,
            TargetKind::AbsoluteOther { path } => self.resolve_absolute(path),
        }
    }

    /// Judge a single link.
    #[must_use]
    pub fn resolve_link(&self, link: Link) -> ResolutionOutcome {
        let resolved = self.resolve(&link.target);
        ResolutionOutcome { link, resolved }
    }

    /// Judge a single link, or `None` when its target is not checked at all.
    #[must_use]
    pub fn check_link(&self, link: Link) -> Option<ResolutionOutcome> {
        let kind = classify(&link.target);
        if !kind.is_internal() {
            return None;
        }
        let resolved = self.resolve_kind(kind);
        Some(ResolutionOutcome { link, resolved })
    }

    fn resolve_blog(&self, blog: BlogTarget<'_>) -> bool {
        match blog {
            BlogTarget::SectionIndex => self.probe.exists(&self.blog_dir.join(SECTION_INDEX)),
            // Posts live directly under the blog directory; no nested lookup.
            BlogTarget::Post { slug } if slug.contains('/') => false,
            BlogTarget::Post { slug } => self
                .probe
                .exists(&self.blog_dir.join(format!("{slug}.md"))),
        }
    }

    fn resolve_absolute(&self, path: &str) -> bool {
        if self.probe.exists(&self.static_root.join(path)) {
            return true;
        }

        let content_path = self.content_root.join(path);
        if self.probe.exists(&content_path) || self.probe.exists(&content_path.join(SECTION_INDEX))
        {
            return true;
        }

        // Appended to the path as written: `about/` looks for `about/.md`.
        self.probe.exists(&self.content_root.join(format!("{path}.md")))
    }
}
