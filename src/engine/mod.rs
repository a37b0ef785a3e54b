//! Lint engine capability and the values it produces.

mod directive;
mod pattern;
mod position;

pub use directive::Suppressions;
pub use pattern::PatternEngine;
pub use position::{LineAndCharacter, LineIndex};

use crate::config::{LintConfig, RuleSeverity};
use crate::error::Result;

/// A lint engine: inspects one file and records its findings.
///
/// Engines never own the accumulator; the caller threads one [`LintResult`]
/// through every file of a run.
pub trait LintEngine {
    /// Lint `content` of `file_name` under `config`, recording into `result`.
    ///
    /// # Errors
    /// Returns an error if the configuration is malformed or the engine fails.
    fn lint(
        &self,
        file_name: &str,
        content: &str,
        config: &LintConfig,
        result: &mut LintResult,
    ) -> Result<()>;
}

/// One issue reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFailure {
    file_name: String,
    start: LineAndCharacter,
    end: LineAndCharacter,
    rule_name: String,
    severity: RuleSeverity,
    failure: String,
}

impl RuleFailure {
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        start: LineAndCharacter,
        end: LineAndCharacter,
        rule_name: impl Into<String>,
        severity: RuleSeverity,
        failure: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            start,
            end,
            rule_name: rule_name.into(),
            severity,
            failure: failure.into(),
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub const fn start_position(&self) -> LineAndCharacter {
        self.start
    }

    #[must_use]
    pub const fn end_position(&self) -> LineAndCharacter {
        self.end
    }

    #[must_use]
    pub fn rule_name(&self) -> &str {
        &self.rule_name
    }

    #[must_use]
    pub const fn rule_severity(&self) -> &RuleSeverity {
        &self.severity
    }

    #[must_use]
    pub fn failure(&self) -> &str {
        &self.failure
    }
}

/// Accumulated output of a lint run across files.
///
/// The counters are maintained by the engine and are authoritative; they are
/// not derived from `failures` after the fact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintResult {
    failures: Vec<RuleFailure>,
    error_count: usize,
    warning_count: usize,
}

impl LintResult {
    /// Record a failure and bump the counter matching its severity.
    ///
    /// Severities other than `error` and `warning` are kept but not counted.
    pub fn record(&mut self, failure: RuleFailure) {
        match failure.rule_severity() {
            RuleSeverity::Error => self.error_count += 1,
            RuleSeverity::Warning => self.warning_count += 1,
            RuleSeverity::Off | RuleSeverity::Custom(_) => {}
        }
        self.failures.push(failure);
    }

    #[must_use]
    pub fn failures(&self) -> &[RuleFailure] {
        &self.failures
    }

    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.error_count
    }

    #[must_use]
    pub const fn warning_count(&self) -> usize {
        self.warning_count
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
