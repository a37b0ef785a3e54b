//! Turning a lint result into the payload of a completed check run.

mod annotation;
mod verdict;

pub use annotation::{Annotation, AnnotationLevel, normalize};
pub use verdict::{Conclusion, Verdict};

use std::fmt::Write;

use crate::config::LintConfig;
use crate::engine::LintResult;
use crate::error::Result;

/// Everything the completing update of a check run carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub verdict: Verdict,
    pub annotations: Vec<Annotation>,
    pub text: String,
}

impl CheckReport {
    /// Build the report from the run's result and the base configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration cannot be rendered as JSON.
    pub fn new(result: &LintResult, base_config: &LintConfig) -> Result<Self> {
        Ok(Self {
            verdict: Verdict::from_result(result),
            annotations: normalize(result.failures()),
            text: render_text(base_config)?,
        })
    }
}

/// Report body: the base configuration the run was seeded with.
///
/// # Errors
/// Returns an error if the configuration cannot be rendered as JSON.
pub fn render_text(base_config: &LintConfig) -> Result<String> {
    let json = serde_json::to_string_pretty(base_config)?;

    let mut text = String::from("## Results\n\n");
    text.push_str("<details>\n<summary>Base configuration</summary>\n\n");
    let _ = writeln!(text, "```json\n{json}\n```");
    text.push_str("</details>\n");
    Ok(text)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
