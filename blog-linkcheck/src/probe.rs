//! The "path exists" capability the resolver depends on.
//!
//! Resolution only ever asks whether a path exists, so the filesystem is
//! abstracted behind [`PathProbe`]. [`DiskProbe`] asks the real filesystem,
//! [`CachedProbe`] memoizes answers for one run, and [`MemoryProbe`] is an
//! in-memory fixture for tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Answers whether a file or directory exists at a path.
pub trait PathProbe {
    /// True if `path` names an existing file or directory.
    fn exists(&self, path: &Path) -> bool;
}

impl<P: PathProbe + ?Sized> PathProbe for &P {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// Probe backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskProbe;

impl PathProbe for DiskProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Memoizes another probe's answers for the lifetime of one run.
///
/// The same image or post is often linked from many documents; each distinct
/// path hits the inner probe once.
#[derive(Debug, Default)]
pub struct CachedProbe<P> {
    inner: P,
    cache: RefCell<HashMap<PathBuf, bool>>,
}

impl<P: PathProbe> CachedProbe<P> {
    /// Wrap `inner` with an empty cache.
    #[must_use]
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Number of distinct paths looked up so far.
    #[must_use]
    pub fn cached_paths(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<P: PathProbe> PathProbe for CachedProbe<P> {
    fn exists(&self, path: &Path) -> bool {
        if let Some(&hit) = self.cache.borrow().get(path) {
            return hit;
        }
        let found = self.inner.exists(path);
        self.cache.borrow_mut().insert(path.to_path_buf(), found);
        found
    }
}

/// In-memory set of existing paths.
///
/// Adding a file also registers every ancestor directory, so directory
/// lookups behave like they would on disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryProbe {
    paths: HashSet<PathBuf>,
}

impl MemoryProbe {
    /// Empty fixture: nothing exists.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixture containing the given files (and their parent directories).
    #[must_use]
    pub fn with_files<I, T>(files: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<Path>,
    {
        let mut probe = Self::new();
        for file in files {
            probe.add_file(file);
        }
        probe
    }

    /// Register `file` and all of its ancestors.
    pub fn add_file(&mut self, file: impl AsRef<Path>) {
        for ancestor in file.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.paths.insert(ancestor.to_path_buf());
        }
    }
}

impl PathProbe for MemoryProbe {
    fn exists(&self, path: &Path) -> bool {
        self.paths.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingProbe {
        calls: Cell<usize>,
    }

    impl PathProbe for CountingProbe {
        fn exists(&self, _path: &Path) -> bool {
            self.calls.set(self.calls.get() + 1);
            true
        }
    }

    #[test]
    fn test_memory_probe_registers_ancestors() {
        let probe = MemoryProbe::with_files(["site/static/images/cat.png"]);
        assert!(probe.exists(Path::new("site/static/images/cat.png")));
        assert!(probe.exists(Path::new("site/static/images")));
        assert!(probe.exists(Path::new("site")));
        assert!(!probe.exists(Path::new("site/static/images/dog.png")));
    }

    #[test]
    fn test_cached_probe_hits_inner_once_per_path() {
        let cached = CachedProbe::new(CountingProbe {
            calls: Cell::new(0),
        });
        assert!(cached.exists(Path::new("a")));
        assert!(cached.exists(Path::new("a")));
        assert!(cached.exists(Path::new("b")));
        assert_eq!(cached.inner.calls.get(), 2);
        assert_eq!(cached.cached_paths(), 2);
    }

    #[test]
    fn test_disk_probe() {
        let tmp = tempfile::TempDir::new().unwrap();
        let file = tmp.path().join("present.md");
        std::fs::write(&file, "x").unwrap();
        assert!(DiskProbe.exists(&file));
        assert!(DiskProbe.exists(tmp.path()));
        assert!(!DiskProbe.exists(&tmp.path().join("absent.md")));
    }
}
