use crate::config::{LintConfig, RuleConfig, RuleSeverity};
use crate::engine::{LineAndCharacter, LintEngine, LintResult};
use crate::error::LintCheckError;

use super::PatternEngine;

fn config(rules: &[(&str, &str, &str)]) -> LintConfig {
    let mut config = LintConfig::default();
    for (id, pattern, severity) in rules {
        config.rules.insert(
            (*id).to_string(),
            RuleConfig {
                pattern: Some((*pattern).to_string()),
                message: None,
                severity: Some(RuleSeverity::from(*severity)),
            },
        );
    }
    config
}

fn lint(content: &str, config: &LintConfig) -> LintResult {
    let mut result = LintResult::default();
    PatternEngine::new()
        .lint("src/a.ts", content, config, &mut result)
        .unwrap();
    result
}

#[test]
fn reports_each_match_with_positions() {
    let config = config(&[("no-any", r":\s*any\b", "error")]);
    let result = lint("let a = 1;\nlet b: any = 2;\n", &config);

    assert_eq!(result.failures().len(), 1);
    let failure = &result.failures()[0];
    assert_eq!(failure.file_name(), "src/a.ts");
    assert_eq!(failure.rule_name(), "no-any");
    assert_eq!(failure.start_position(), LineAndCharacter::new(1, 5));
    assert_eq!(failure.end_position(), LineAndCharacter::new(1, 10));
    assert_eq!(result.error_count(), 1);
    assert_eq!(result.warning_count(), 0);
}

#[test]
fn message_defaults_to_rule_id() {
    let config = config(&[("no-console", r"console\.log", "warning")]);
    let result = lint("console.log(1)", &config);

    assert_eq!(result.failures()[0].failure(), "no-console");
    assert_eq!(result.warning_count(), 1);
}

#[test]
fn configured_message_is_used() {
    let mut config = config(&[("no-any", "any", "error")]);
    config.rules["no-any"].message = Some("Unexpected any".to_string());
    let result = lint("any", &config);

    assert_eq!(result.failures()[0].failure(), "Unexpected any");
}

#[test]
fn multiline_match_spans_lines() {
    let config = config(&[("empty-block", r"\{\s*\n\s*\}", "warning")]);
    let result = lint("fn() {\n}\n", &config);

    let failure = &result.failures()[0];
    assert_eq!(failure.start_position().line, 0);
    assert_eq!(failure.end_position().line, 1);
}

#[test]
fn anchors_match_per_line() {
    let config = config(&[("no-todo", r"^\s*// TODO", "warning")]);
    let result = lint("a\n  // TODO fix\nb\n// TODO again\n", &config);

    let lines: Vec<_> = result
        .failures()
        .iter()
        .map(|f| f.start_position().line)
        .collect();
    assert_eq!(lines, vec![1, 3]);
}

#[test]
fn findings_ordered_by_position_then_rule_order() {
    let config = config(&[("second", "b", "warning"), ("first", "a", "error")]);
    let result = lint("b a\nab", &config);

    let order: Vec<_> = result
        .failures()
        .iter()
        .map(|f| (f.start_position().line, f.rule_name().to_string()))
        .collect();
    assert_eq!(
        order,
        vec![
            (0, "second".to_string()),
            (0, "first".to_string()),
            (1, "first".to_string()),
            (1, "second".to_string()),
        ]
    );
}

#[test]
fn off_rules_are_skipped_even_without_pattern() {
    let mut config = config(&[("active", "x", "error")]);
    config.rules.insert(
        "disabled".to_string(),
        RuleConfig {
            pattern: None,
            message: None,
            severity: Some(RuleSeverity::Off),
        },
    );
    let result = lint("x", &config);

    assert_eq!(result.failures().len(), 1);
}

#[test]
fn custom_severity_reported_but_not_counted() {
    let config = config(&[("style", "x", "info")]);
    let result = lint("x x", &config);

    assert_eq!(result.failures().len(), 2);
    assert_eq!(
        result.failures()[0].rule_severity(),
        &RuleSeverity::Custom("info".to_string())
    );
    assert_eq!(result.error_count(), 0);
    assert_eq!(result.warning_count(), 0);
}

#[test]
fn default_severity_applies_to_rules_without_one() {
    let mut config = LintConfig {
        default_severity: Some(RuleSeverity::Warning),
        ..LintConfig::default()
    };
    config.rules.insert(
        "r".to_string(),
        RuleConfig {
            pattern: Some("x".to_string()),
            ..RuleConfig::default()
        },
    );
    let result = lint("x", &config);

    assert_eq!(result.warning_count(), 1);
    assert_eq!(result.error_count(), 0);
}

#[test]
fn suppressed_findings_are_neither_reported_nor_counted() {
    let config = config(&[
        ("no-any", r":\s*any", "error"),
        ("no-var", r"\bvar\b", "warning"),
    ]);
    let content = "// lint-check:disable-next-line no-any\nvar x: any;\n";
    let result = lint(content, &config);

    assert_eq!(result.failures().len(), 1);
    assert_eq!(result.failures()[0].rule_name(), "no-var");
    assert_eq!(result.error_count(), 0);
    assert_eq!(result.warning_count(), 1);
}

#[test]
fn excluded_files_produce_no_findings() {
    let mut config = config(&[("no-any", "any", "error")]);
    config.exclude = vec!["src/**".to_string()];
    let result = lint("any", &config);

    assert!(result.failures().is_empty());
    assert_eq!(result.error_count(), 0);
}

#[test]
fn rule_without_pattern_is_engine_error() {
    let mut config = LintConfig::default();
    config
        .rules
        .insert("broken".to_string(), RuleConfig::default());

    let err = PatternEngine::new()
        .lint("a.ts", "x", &config, &mut LintResult::default())
        .unwrap_err();

    assert!(matches!(err, LintCheckError::Engine(_)));
    assert!(err.to_string().contains("broken"));
}

#[test]
fn invalid_regex_is_engine_error() {
    let config = config(&[("bad", "(unclosed", "error")]);

    let err = PatternEngine::new()
        .lint("a.ts", "x", &config, &mut LintResult::default())
        .unwrap_err();

    assert!(matches!(err, LintCheckError::InvalidRule { ref rule, .. } if rule == "bad"));
}

#[test]
fn accumulates_across_calls() {
    let config = config(&[("no-any", "any", "error")]);
    let engine = PatternEngine::new();
    let mut result = LintResult::default();

    engine.lint("a.ts", "any", &config, &mut result).unwrap();
    engine.lint("b.ts", "any any", &config, &mut result).unwrap();

    assert_eq!(result.error_count(), 3);
    let files: Vec<_> = result.failures().iter().map(|f| f.file_name()).collect();
    assert_eq!(files, vec!["a.ts", "b.ts", "b.ts"]);
}

#[test]
fn same_offset_findings_follow_rule_order_from_toml() {
    let config: LintConfig = toml::from_str(
        r#"
[rules.zeta]
pattern = "any"
severity = "warning"

[rules.alpha]
pattern = "any"
severity = "error"
"#,
    )
    .unwrap();
    let result = lint("let a: any;\n", &config);

    let rules: Vec<_> = result.failures().iter().map(|f| f.rule_name()).collect();
    assert_eq!(rules, vec!["zeta", "alpha"]);
    assert_eq!(
        result.failures()[0].start_position(),
        result.failures()[1].start_position()
    );
}

#[test]
fn exclude_single_star_does_not_cross_directories() {
    let mut config = config(&[("no-any", "any", "error")]);
    config.exclude = vec!["src/*.ts".to_string()];
    let engine = PatternEngine::new();
    let mut result = LintResult::default();

    engine.lint("src/a.ts", "any", &config, &mut result).unwrap();
    engine.lint("src/nested/b.ts", "any", &config, &mut result).unwrap();

    let files: Vec<_> = result.failures().iter().map(|f| f.file_name()).collect();
    assert_eq!(files, vec!["src/nested/b.ts"]);
}

#[test]
fn invalid_exclude_glob_is_error() {
    let mut config = config(&[("no-any", "any", "error")]);
    config.exclude = vec!["src/[x".to_string()];

    let err = PatternEngine::new()
        .lint("a.ts", "any", &config, &mut LintResult::default())
        .unwrap_err();

    assert!(matches!(err, LintCheckError::InvalidPattern { .. }));
}
