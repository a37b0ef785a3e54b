//! Layered merging of lint configurations.
//!
//! Layers are applied lowest precedence first:
//! - rules merge field by field (the overlay's `Some` values win)
//! - `default_severity` is replaced when the overlay sets it
//! - `exclude` lists are appended, unless the overlay starts with `$reset`

use super::LintConfig;

/// The reset marker used to clear inherited `exclude` entries.
pub const RESET_MARKER: &str = "$reset";

impl LintConfig {
    /// Apply `overlay` on top of `self`.
    ///
    /// `extends` and `root` are per-file discovery settings and are not carried
    /// into the merged result.
    pub fn merge(&mut self, overlay: Self) {
        if overlay.default_severity.is_some() {
            self.default_severity = overlay.default_severity;
        }

        merge_excludes(&mut self.exclude, overlay.exclude);

        for (id, rule) in overlay.rules {
            let entry = self.rules.entry(id).or_default();
            if rule.pattern.is_some() {
                entry.pattern = rule.pattern;
            }
            if rule.message.is_some() {
                entry.message = rule.message;
            }
            if rule.severity.is_some() {
                entry.severity = rule.severity;
            }
        }
    }

    /// Strip per-file settings, leaving only what the engine consumes.
    #[must_use]
    pub fn into_effective(mut self) -> Self {
        self.extends.clear();
        self.root = false;
        self.exclude.retain(|p| p != RESET_MARKER);
        self
    }
}

fn merge_excludes(base: &mut Vec<String>, overlay: Vec<String>) {
    if overlay.first().is_some_and(|p| p == RESET_MARKER) {
        base.clear();
        base.extend(overlay.into_iter().skip(1));
    } else {
        base.extend(overlay);
    }
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
