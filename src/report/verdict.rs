use serde::Serialize;

use crate::engine::LintResult;

/// Final state of a completed check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conclusion {
    Success,
    Failure,
}

impl Conclusion {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

/// Aggregate pass/fail decision of a lint run.
///
/// Built only from the engine's counters; the conclusion and the summary line
/// are both derived from the same two numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    error_count: usize,
    warning_count: usize,
}

impl Verdict {
    #[must_use]
    pub const fn from_counts(error_count: usize, warning_count: usize) -> Self {
        Self {
            error_count,
            warning_count,
        }
    }

    #[must_use]
    pub const fn from_result(result: &LintResult) -> Self {
        Self::from_counts(result.error_count(), result.warning_count())
    }

    #[must_use]
    pub const fn error_count(&self) -> usize {
        self.error_count
    }

    #[must_use]
    pub const fn warning_count(&self) -> usize {
        self.warning_count
    }

    #[must_use]
    pub const fn conclusion(&self) -> Conclusion {
        if self.error_count > 0 {
            Conclusion::Failure
        } else {
            Conclusion::Success
        }
    }

    /// Summary line shown on the check run.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{} error(s), {} warning(s) found",
            self.error_count, self.warning_count
        )
    }
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
