//! The end-to-end lint run: open a check run, lint, report, close.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::config::ConfigResolver;
use crate::discovery::FileDiscovery;
use crate::engine::LintEngine;
use crate::error::Result;
use crate::github::{CheckRunReporter, HttpClient};
use crate::inputs::Configuration;
use crate::report::{CheckReport, Verdict};
use crate::runner::LintRunner;

/// One lint run against one commit, with injected collaborators.
///
/// The check run is opened before any file is read and completed exactly
/// once, with a single update carrying every annotation. If linting fails
/// after the run was opened, the run is completed as a failure naming the
/// error, unless that was disabled with [`Pipeline::with_close_on_error`].
pub struct Pipeline<D, R, E, C>
where
    D: FileDiscovery,
    R: ConfigResolver,
    E: LintEngine,
    C: HttpClient,
{
    root: PathBuf,
    discovery: D,
    resolver: R,
    engine: E,
    reporter: CheckRunReporter<C>,
    close_on_error: bool,
}

impl<D, R, E, C> Pipeline<D, R, E, C>
where
    D: FileDiscovery,
    R: ConfigResolver,
    E: LintEngine,
    C: HttpClient,
{
    #[must_use]
    pub fn new(
        root: impl Into<PathBuf>,
        discovery: D,
        resolver: R,
        engine: E,
        reporter: CheckRunReporter<C>,
    ) -> Self {
        Self {
            root: root.into(),
            discovery,
            resolver,
            engine,
            reporter,
            close_on_error: true,
        }
    }

    /// Whether to complete the check run as failed when linting errors out.
    /// When disabled, the run is left `in_progress`.
    #[must_use]
    pub const fn with_close_on_error(mut self, close_on_error: bool) -> Self {
        self.close_on_error = close_on_error;
        self
    }

    pub const fn reporter(&self) -> &CheckRunReporter<C> {
        &self.reporter
    }

    /// Execute the run and return the delivered verdict.
    ///
    /// # Errors
    /// Returns the first failure: opening the run, discovery, reading or
    /// linting a file, rendering the report, or completing the run.
    pub fn run(&self, config: &Configuration) -> Result<Verdict> {
        let run = self.reporter.open()?;

        match self.lint(&config.file_pattern, config.base_config_path.as_deref()) {
            Ok(report) => {
                info!(
                    errors = report.verdict.error_count(),
                    warnings = report.verdict.warning_count(),
                    "lint finished"
                );
                self.reporter.close(run, &report)?;
                Ok(report.verdict)
            }
            Err(e) => {
                error!(kind = %e.kind(), "lint run failed: {e}");
                if self.close_on_error {
                    if let Err(close_err) = self.reporter.abandon(run, &e) {
                        warn!(kind = %close_err.kind(), "could not complete check run: {close_err}");
                    }
                } else {
                    warn!(id = run.id(), "leaving check run in progress");
                }
                Err(e)
            }
        }
    }

    fn lint(&self, file_pattern: &str, base_config: Option<&Path>) -> Result<CheckReport> {
        let files = self.discovery.discover(file_pattern)?;
        info!(files = files.len(), "discovered files");

        let result =
            LintRunner::new(&self.root, &self.resolver, &self.engine).run(&files, base_config)?;
        let base = self.resolver.read_base(base_config)?;
        CheckReport::new(&result, &base)
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
