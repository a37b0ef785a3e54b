use serde::Serialize;

use crate::config::RuleSeverity;
use crate::engine::RuleFailure;

/// Annotation level understood by the check run API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationLevel {
    Notice,
    Warning,
    Failure,
}

impl AnnotationLevel {
    /// Map an engine severity to an annotation level.
    ///
    /// Total over all severities: anything that is not `warning` or `error`
    /// becomes a notice.
    #[must_use]
    pub const fn from_severity(severity: &RuleSeverity) -> Self {
        match severity {
            RuleSeverity::Warning => Self::Warning,
            RuleSeverity::Error => Self::Failure,
            RuleSeverity::Off | RuleSeverity::Custom(_) => Self::Notice,
        }
    }
}

/// Wire-ready rendering of one finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub path: String,
    pub start_line: usize,
    pub end_line: usize,
    #[serde(rename = "annotation_level")]
    pub level: AnnotationLevel,
    pub message: String,
}

impl From<&RuleFailure> for Annotation {
    fn from(failure: &RuleFailure) -> Self {
        let start_line = failure.start_position().line;
        Self {
            path: failure.file_name().to_string(),
            start_line,
            end_line: failure.end_position().line.max(start_line),
            level: AnnotationLevel::from_severity(failure.rule_severity()),
            message: format!("[{}] {}", failure.rule_name(), failure.failure()),
        }
    }
}

/// Normalize findings one-to-one, preserving their order.
#[must_use]
pub fn normalize(failures: &[RuleFailure]) -> Vec<Annotation> {
    failures.iter().map(Annotation::from).collect()
}

#[cfg(test)]
#[path = "annotation_tests.rs"]
mod tests;
