use globset::{GlobBuilder, GlobMatcher};

use crate::error::{LintCheckError, Result};

const GLOB_META: &[char] = &['*', '?', '[', '{'];

/// A file pattern split into its literal directory prefix and a matcher.
#[derive(Debug)]
pub struct FilePattern {
    text: String,
    base: String,
    matcher: Option<GlobMatcher>,
}

impl FilePattern {
    /// Parse `pattern`; a leading `./` is ignored.
    ///
    /// `*` and `?` never match `/`, `**` spans directories, and `{a,b}`
    /// alternation is supported.
    ///
    /// # Errors
    /// Returns an error if the glob syntax is invalid.
    pub fn parse(pattern: &str) -> Result<Self> {
        let mut text = pattern.trim();
        while let Some(rest) = text.strip_prefix("./") {
            text = rest;
        }

        if !text.contains(GLOB_META) {
            return Ok(Self {
                text: text.to_string(),
                base: text.to_string(),
                matcher: None,
            });
        }

        let matcher = GlobBuilder::new(text)
            .literal_separator(true)
            .build()
            .map_err(|source| LintCheckError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?
            .compile_matcher();

        let literal: Vec<&str> = text
            .split('/')
            .take_while(|segment| !segment.contains(GLOB_META))
            .collect();

        Ok(Self {
            text: text.to_string(),
            base: literal.join("/"),
            matcher: Some(matcher),
        })
    }

    /// The pattern text as matched, without a leading `./`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Longest leading run of path segments without glob syntax.
    ///
    /// For a pattern without any glob syntax this is the whole pattern.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Whether the pattern names a single literal path.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        self.matcher.is_none()
    }

    /// Match a `/`-separated candidate path.
    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        self.matcher
            .as_ref()
            .map_or_else(|| candidate == self.text, |m| m.is_match(candidate))
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
