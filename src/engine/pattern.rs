use std::cell::RefCell;
use std::collections::HashMap;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::config::{LintConfig, RuleSeverity};
use crate::error::{LintCheckError, Result};

use super::{LineIndex, LintEngine, LintResult, RuleFailure, Suppressions};

/// Lint engine whose rules are regular expressions over the file content.
///
/// Each match is one finding spanning the matched text. Within a file,
/// findings are ordered by position, then by rule declaration order.
///
/// Exclude globs match like file patterns: `*` never crosses `/`.
#[derive(Debug, Default)]
pub struct PatternEngine {
    compiled: RefCell<HashMap<String, Regex>>,
    excludes: RefCell<HashMap<Vec<String>, GlobSet>>,
}

struct CompiledRule {
    id: String,
    regex: Regex,
    severity: RuleSeverity,
    message: String,
}

impl PatternEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn regex(&self, rule: &str, pattern: &str) -> Result<Regex> {
        if let Some(regex) = self.compiled.borrow().get(pattern) {
            return Ok(regex.clone());
        }

        let regex = RegexBuilder::new(pattern)
            .multi_line(true)
            .build()
            .map_err(|source| LintCheckError::InvalidRule {
                rule: rule.to_string(),
                source,
            })?;
        self.compiled
            .borrow_mut()
            .insert(pattern.to_string(), regex.clone());
        Ok(regex)
    }

    fn is_excluded(&self, patterns: &[String], file_name: &str) -> Result<bool> {
        if patterns.is_empty() {
            return Ok(false);
        }
        if let Some(set) = self.excludes.borrow().get(patterns) {
            return Ok(set.is_match(file_name));
        }

        let set = build_exclude_set(patterns)?;
        let excluded = set.is_match(file_name);
        self.excludes.borrow_mut().insert(patterns.to_vec(), set);
        Ok(excluded)
    }

    fn compile_rules(&self, config: &LintConfig) -> Result<Vec<CompiledRule>> {
        let mut rules = Vec::new();
        for (id, rule) in &config.rules {
            let severity = config.severity_of(rule);
            if severity.is_off() {
                continue;
            }

            let pattern = rule
                .pattern
                .as_deref()
                .ok_or_else(|| LintCheckError::Engine(format!("rule '{id}' has no pattern")))?;

            rules.push(CompiledRule {
                id: id.clone(),
                regex: self.regex(id, pattern)?,
                severity,
                message: rule.message.clone().unwrap_or_else(|| id.clone()),
            });
        }
        Ok(rules)
    }
}

fn build_exclude_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| LintCheckError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| LintCheckError::InvalidPattern {
        pattern: "combined patterns".to_string(),
        source: e,
    })
}

impl LintEngine for PatternEngine {
    fn lint(
        &self,
        file_name: &str,
        content: &str,
        config: &LintConfig,
        result: &mut LintResult,
    ) -> Result<()> {
        if self.is_excluded(&config.exclude, file_name)? {
            debug!(file = file_name, "excluded by config");
            return Ok(());
        }

        let rules = self.compile_rules(config)?;
        if rules.is_empty() {
            return Ok(());
        }

        let index = LineIndex::new(content);
        let suppressions = Suppressions::parse(content);

        let mut found = Vec::new();
        for (order, rule) in rules.iter().enumerate() {
            for m in rule.regex.find_iter(content) {
                let start = index.position(m.start());
                if suppressions.is_suppressed(start.line, &rule.id) {
                    continue;
                }
                let failure = RuleFailure::new(
                    file_name,
                    start,
                    index.position(m.end()),
                    rule.id.as_str(),
                    rule.severity.clone(),
                    rule.message.as_str(),
                );
                found.push((m.start(), order, failure));
            }
        }

        found.sort_by_key(|(offset, order, _)| (*offset, *order));
        for (_, _, failure) in found {
            result.record(failure);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
