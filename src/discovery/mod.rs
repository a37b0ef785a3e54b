mod pattern;

pub use pattern::FilePattern;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;

/// Expands file patterns into the files to lint.
pub trait FileDiscovery {
    /// Return the ordered, deduplicated files matched by `pattern`.
    ///
    /// Matching nothing is not an error.
    ///
    /// # Errors
    /// Returns an error if the pattern is invalid.
    fn discover(&self, pattern: &str) -> Result<Vec<PathBuf>>;
}

/// Glob-based discovery relative to a working directory.
///
/// The input may hold several patterns, one per line. Each pattern's matches
/// are sorted; patterns are unioned in the order given. Returned paths are
/// relative to the working directory with `/` separators, or absolute when the
/// pattern is absolute.
///
/// Wildcards don't descend into hidden entries (names starting with `.`)
/// below the literal prefix of the pattern.
#[derive(Debug, Clone)]
pub struct GlobDiscovery {
    root: PathBuf,
}

impl GlobDiscovery {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn expand(&self, pattern: &FilePattern) -> Vec<String> {
        if pattern.is_literal() {
            let path = self.root.join(pattern.as_str());
            return if path.is_file() {
                vec![pattern.as_str().to_string()]
            } else {
                Vec::new()
            };
        }

        let absolute = Path::new(pattern.as_str()).is_absolute();
        let walk_root = self.root.join(pattern.base());

        let mut matched = BTreeSet::new();
        for entry in WalkDir::new(&walk_root)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
        {
            let candidate = if absolute {
                entry.path()
            } else {
                entry.path().strip_prefix(&self.root).unwrap_or(entry.path())
            };
            let candidate = to_slash(candidate);
            if pattern.is_match(&candidate) {
                matched.insert(candidate);
            }
        }
        matched.into_iter().collect()
    }
}

impl FileDiscovery for GlobDiscovery {
    fn discover(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let mut files = IndexSet::new();
        for line in pattern.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let parsed = FilePattern::parse(line)?;
            let found = self.expand(&parsed);
            debug!(pattern = parsed.as_str(), matched = found.len(), "expanded pattern");
            files.extend(found);
        }
        Ok(files.into_iter().map(PathBuf::from).collect())
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn to_slash(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
