use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Severity a rule reports its findings with.
///
/// The set is open: any value other than `error`, `warning` and `off` is kept
/// verbatim as an engine-specific severity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RuleSeverity {
    Error,
    Warning,
    /// Rule disabled.
    Off,
    Custom(String),
}

impl RuleSeverity {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Off => "off",
            Self::Custom(name) => name,
        }
    }

    #[must_use]
    pub const fn is_off(&self) -> bool {
        matches!(self, Self::Off)
    }
}

impl From<&str> for RuleSeverity {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "error" => Self::Error,
            "warning" => Self::Warning,
            "off" | "none" => Self::Off,
            _ => Self::Custom(value.trim().to_string()),
        }
    }
}

impl From<String> for RuleSeverity {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<RuleSeverity> for String {
    fn from(value: RuleSeverity) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for RuleSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rule entry `[rules.<id>]`.
///
/// All fields are optional so that a nested config can override one aspect of
/// an inherited rule (typically its severity).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    /// Regular expression matched against the file content (multi-line mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Message reported for each match. Defaults to the rule id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<RuleSeverity>,
}

/// Lint configuration as read from one file, or the merged effective result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Config files this one inherits from, relative to this file.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,

    /// Stop nested discovery from looking at parent directories.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub root: bool,

    /// Severity for rules that don't set one. Falls back to `error`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_severity: Option<RuleSeverity>,

    /// Glob patterns of files the engine skips.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,

    pub rules: IndexMap<String, RuleConfig>,
}

impl LintConfig {
    /// Effective severity of `rule`, applying `default_severity`.
    #[must_use]
    pub fn severity_of(&self, rule: &RuleConfig) -> RuleSeverity {
        rule.severity
            .clone()
            .or_else(|| self.default_severity.clone())
            .unwrap_or(RuleSeverity::Error)
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
