use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use tracing::debug;

use crate::error::{LintCheckError, Result};

use super::LintConfig;

/// Name of the nested configuration file looked up next to linted files.
pub const LOCAL_CONFIG_NAME: &str = ".lint-check.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Maximum depth of an extends chain.
///
/// Depth starts at 0 for the file being loaded, so up to 11 files per chain.
pub const MAX_EXTENDS_DEPTH: usize = 10;

/// Resolves the configuration the engine applies to a given file.
pub trait ConfigResolver {
    /// Effective configuration for `target`, seeded by the optional `base` path.
    ///
    /// # Errors
    /// Returns an error if any contributing config file cannot be read or parsed.
    fn resolve(&self, base: Option<&Path>, target: &Path) -> Result<LintConfig>;

    /// The base configuration on its own, without nested overrides.
    ///
    /// # Errors
    /// Returns an error if the base config cannot be read or parsed.
    fn read_base(&self, base: Option<&Path>) -> Result<LintConfig>;
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Canonicalize a path to its absolute, normalized form.
    ///
    /// # Errors
    /// Returns an error if the path cannot be canonicalized (e.g., file doesn't exist).
    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf>;

    /// Platform-specific configuration directory for lint-check-run.
    ///
    /// - Windows: `%APPDATA%\lint-check-run`
    /// - macOS: `~/Library/Application Support/lint-check-run`
    /// - Linux: `~/.config/lint-check-run` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn canonicalize(&self, path: &Path) -> std::io::Result<PathBuf> {
        dunce::canonicalize(path)
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "lint-check-run")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Resolves configuration from TOML files on disk.
///
/// Layers, lowest precedence first:
/// 1. The base config if given, else the user config if present, else empty
/// 2. Every `.lint-check.toml` from the workspace root down to the target's
///    directory; the upward search stops at a file with `root = true`
///
/// Parsed files are cached for the lifetime of the resolver.
#[derive(Debug)]
pub struct FileConfigResolver<F: FileSystem = RealFileSystem> {
    fs: F,
    root: PathBuf,
    cache: RefCell<HashMap<PathBuf, LintConfig>>,
}

impl FileConfigResolver<RealFileSystem> {
    /// Create a resolver rooted at the workspace directory `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_fs(RealFileSystem, root)
    }
}

impl<F: FileSystem> FileConfigResolver<F> {
    #[must_use]
    pub fn with_fs(fs: F, root: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            root: root.into(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    /// Load one config file with its extends chain resolved.
    fn load_file(&self, path: &Path) -> Result<LintConfig> {
        if let Some(cached) = self.cache.borrow().get(path) {
            return Ok(cached.clone());
        }

        let config = self.load_with_extends(path, &mut IndexSet::new(), 0)?;
        self.cache
            .borrow_mut()
            .insert(path.to_path_buf(), config.clone());
        Ok(config)
    }

    fn load_with_extends(
        &self,
        path: &Path,
        visited: &mut IndexSet<String>,
        depth: usize,
    ) -> Result<LintConfig> {
        if depth > MAX_EXTENDS_DEPTH {
            return Err(LintCheckError::ExtendsTooDeep {
                depth,
                max: MAX_EXTENDS_DEPTH,
                chain: visited.iter().cloned().collect(),
            });
        }

        let canonical = self
            .fs
            .canonicalize(path)
            .map_err(|source| LintCheckError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        let key = canonical.to_string_lossy().to_string();

        if !visited.insert(key.clone()) {
            // IndexSet preserves insertion order, so chain shows the actual traversal sequence
            let mut chain: Vec<String> = visited.iter().cloned().collect();
            chain.push(key);
            return Err(LintCheckError::CircularExtends { chain });
        }

        let content =
            self.fs
                .read_to_string(&canonical)
                .map_err(|source| LintCheckError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        let config: LintConfig =
            toml::from_str(&content).map_err(|source| LintCheckError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), extends = config.extends.len(), "loaded config");

        let dir = canonical.parent().unwrap_or_else(|| Path::new("."));
        let mut merged = LintConfig::default();
        for parent in &config.extends {
            let parent_config = self.load_with_extends(&dir.join(parent), visited, depth + 1)?;
            merged.merge(parent_config);
        }

        let is_root = config.root;
        merged.merge(config);
        merged.root = is_root;

        // Sibling extends may share ancestors; only the current chain counts as a cycle
        visited.pop();
        Ok(merged)
    }

    /// Nested configs applying to `target`, farthest first.
    fn nested_layers(&self, target: &Path) -> Result<Vec<LintConfig>> {
        let absolute = self.root.join(target);
        let Some(dir) = absolute.parent() else {
            return Ok(Vec::new());
        };

        let mut layers = Vec::new();
        for ancestor in dir.ancestors() {
            let candidate = ancestor.join(LOCAL_CONFIG_NAME);
            if self.fs.is_file(&candidate) {
                let layer = self.load_file(&candidate)?;
                let stop = layer.root;
                layers.push(layer);
                if stop {
                    break;
                }
            }
            if ancestor == self.root || !ancestor.starts_with(&self.root) {
                break;
            }
        }

        layers.reverse();
        Ok(layers)
    }
}

impl<F: FileSystem> ConfigResolver for FileConfigResolver<F> {
    fn resolve(&self, base: Option<&Path>, target: &Path) -> Result<LintConfig> {
        let mut effective = self.read_base(base)?;
        for layer in self.nested_layers(target)? {
            effective.merge(layer);
        }
        Ok(effective.into_effective())
    }

    fn read_base(&self, base: Option<&Path>) -> Result<LintConfig> {
        let config = match base {
            Some(path) => self.load_file(&self.root.join(path))?,
            None => match self.user_config_path() {
                Some(path) if self.fs.is_file(&path) => self.load_file(&path)?,
                _ => LintConfig::default(),
            },
        };
        Ok(config.into_effective())
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
