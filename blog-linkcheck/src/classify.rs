//! Link target classification.
//!
//! A single pass turns a raw target into a [`TargetKind`]; the resolver then
//! dispatches on the variant. Classification is purely prefix-based and
//! case-sensitive.

use crate::config::BLOG_SECTION;

/// Prefixes of targets that point outside the site.
const EXTERNAL_SCHEMES: &[&str] = &["http://", "https://", "mailto:", "tel:"];

/// Open delimiter of the site generator's template syntax.
const TEMPLATE_OPEN: &str = "{{";

/// Link prefixes mirrored by relative path under the static root.
const ASSET_PREFIXES: &[&str] = &["/images/", "/data/"];

/// Taxonomy pages generated from site configuration.
const SERIES_PREFIX: &str = "/series/";

/// What a blog-section link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogTarget<'a> {
    /// `/blog` or `/blog/`: the section landing page.
    SectionIndex,
    /// `/blog/<slug>/`: a single post.
    Post {
        /// Path after `/blog/` with trailing slashes removed.
        slug: &'a str,
    },
}

/// Category of a link target, with the path fragment the resolver needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind<'a> {
    /// External URL, same-document anchor, or template syntax.
    Ignored,
    /// A link into the blog section.
    Blog(BlogTarget<'a>),
    /// An image or data file.
    Asset {
        /// Path relative to the static root (leading slashes removed).
        path: &'a str,
    },
    /// A taxonomy series page.
    Series,
    /// Any other root-relative path.
    AbsoluteOther {
        /// Path with every leading `/` removed.
        path: &'a str,
    },
    /// A path relative to the linking document.
    Relative,
}

impl TargetKind<'_> {
    /// Whether this target is checked against the site trees.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

/// True if `target` is expected to resolve within the site's own trees.
#[must_use]
pub fn is_internal(target: &str) -> bool {
    !(EXTERNAL_SCHEMES
        .iter()
        .any(|scheme| target.starts_with(scheme))
        || target.starts_with('#')
        || target.starts_with(TEMPLATE_OPEN))
}

/// Drop a trailing `#anchor` fragment.
fn strip_fragment(target: &str) -> &str {
    target.split_once('#').map_or(target, |(path, _)| path)
}

fn classify_blog(path: &str) -> Option<BlogTarget<'_>> {
    let rest = path.strip_prefix('/')?.strip_prefix(BLOG_SECTION)?;
    if rest.is_empty() {
        return Some(BlogTarget::SectionIndex);
    }
    let slug = rest.strip_prefix('/')?.trim_end_matches('/');
    if slug.is_empty() {
        Some(BlogTarget::SectionIndex)
    } else {
        Some(BlogTarget::Post { slug })
    }
}

/// Classify a raw link target. First matching rule wins.
#[must_use]
pub fn classify(target: &str) -> TargetKind<'_> {
    if !is_internal(target) {
        return TargetKind::Ignored;
    }

    let path = strip_fragment(target);

    if let Some(blog) = classify_blog(path) {
        return TargetKind::Blog(blog);
    }
    if ASSET_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        return TargetKind::Asset {
            path: path.trim_start_matches('/'),
        };
    }
    if path.starts_with(SERIES_PREFIX) {
        return TargetKind::Series;
    }
    if path.starts_with('/') {
        // Every leading slash goes, or joining would escape the site roots.
        TargetKind::AbsoluteOther {
            path: path.trim_start_matches('/'),
        }
    } else {
        TargetKind::Relative
    }
}
