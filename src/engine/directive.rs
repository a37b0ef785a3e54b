use std::collections::{HashMap, HashSet};

const DISABLE_NEXT_LINE: &str = "lint-check:disable-next-line";
const DISABLE_LINE: &str = "lint-check:disable-line";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Scope {
    All,
    Rules(HashSet<String>),
}

impl Scope {
    fn covers(&self, rule: &str) -> bool {
        match self {
            Self::All => true,
            Self::Rules(rules) => rules.contains(rule),
        }
    }

    fn absorb(&mut self, other: Self) {
        match (self, other) {
            (Self::All, _) => {}
            (this, Self::All) => *this = Self::All,
            (Self::Rules(rules), Self::Rules(more)) => rules.extend(more),
        }
    }
}

/// Lines whose findings are suppressed by inline directives.
///
/// Recognized anywhere on a line, whatever the comment syntax:
/// - `lint-check:disable-next-line [rule ...]`
/// - `lint-check:disable-line [rule ...]`
///
/// Without rule ids the directive covers every rule.
#[derive(Debug, Default)]
pub struct Suppressions {
    lines: HashMap<usize, Scope>,
}

impl Suppressions {
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut suppressions = Self::default();
        for (line_no, line) in content.lines().enumerate() {
            if let Some(rest) = after_marker(line, DISABLE_NEXT_LINE) {
                suppressions.add(line_no + 1, parse_scope(rest));
            } else if let Some(rest) = after_marker(line, DISABLE_LINE) {
                suppressions.add(line_no, parse_scope(rest));
            }
        }
        suppressions
    }

    /// Whether findings of `rule` starting on zero-based `line` are suppressed.
    #[must_use]
    pub fn is_suppressed(&self, line: usize, rule: &str) -> bool {
        self.lines.get(&line).is_some_and(|scope| scope.covers(rule))
    }

    fn add(&mut self, line: usize, scope: Scope) {
        match self.lines.get_mut(&line) {
            Some(existing) => existing.absorb(scope),
            None => {
                self.lines.insert(line, scope);
            }
        }
    }
}

fn after_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.find(marker).map(|pos| &line[pos + marker.len()..])
}

fn is_rule_id(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '/' | '.' | '@'))
}

fn parse_scope(rest: &str) -> Scope {
    // Rule ids run until the first token that can't be one (e.g. `*/`, `-->`)
    let rules: HashSet<String> = rest
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .take_while(|token| is_rule_id(token))
        .map(str::to_string)
        .collect();

    if rules.is_empty() {
        Scope::All
    } else {
        Scope::Rules(rules)
    }
}

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;
