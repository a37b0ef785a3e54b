use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::ConfigResolver;
use crate::engine::{LintEngine, LintResult};
use crate::error::{LintCheckError, Result};

/// Runs the lint engine over discovered files, one at a time.
///
/// Files are processed in the order given. A single [`LintResult`] is folded
/// through the loop and returned once every file has been linted; any read or
/// engine failure aborts the whole run.
pub struct LintRunner<'a, R: ConfigResolver, E: LintEngine> {
    root: PathBuf,
    resolver: &'a R,
    engine: &'a E,
}

impl<'a, R: ConfigResolver, E: LintEngine> LintRunner<'a, R, E> {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, resolver: &'a R, engine: &'a E) -> Self {
        Self {
            root: root.into(),
            resolver,
            engine,
        }
    }

    /// Lint `files` (relative to the working directory or absolute).
    ///
    /// # Errors
    /// Returns an error if a file cannot be read, its configuration cannot be
    /// resolved, or the engine fails.
    pub fn run(&self, files: &[PathBuf], base_config: Option<&Path>) -> Result<LintResult> {
        files
            .iter()
            .try_fold(LintResult::default(), |mut result, file| {
                self.lint_file(file, base_config, &mut result)?;
                Ok(result)
            })
    }

    fn lint_file(
        &self,
        file: &Path,
        base_config: Option<&Path>,
        result: &mut LintResult,
    ) -> Result<()> {
        let bytes = fs::read(self.root.join(file)).map_err(|source| LintCheckError::FileAccess {
            path: file.to_path_buf(),
            source,
        })?;
        // Invalid UTF-8 is linted with replacement characters, not rejected.
        let content = String::from_utf8_lossy(&bytes);
        let config = self.resolver.resolve(base_config, file)?;

        let file_name = file.to_string_lossy().replace('\\', "/");
        debug!(file = %file_name, rules = config.rules.len(), "linting");
        self.engine.lint(&file_name, &content, &config, result)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
