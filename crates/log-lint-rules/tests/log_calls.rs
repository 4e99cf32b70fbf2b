//! Integration test: message rules end-to-end via Analyzer.
//!
//! Fixture files under `tests/fixtures/log_calls/` annotate every line that
//! must produce a finding with a trailing `// expect: <message>` comment.

use log_lint_core::{apply_replacements, replacements_of, Analyzer, Config, Severity, Violation};
use log_lint_rules::LogMessages;
use std::path::PathBuf;

const EXPECT_MARKER: &str = "// expect: ";

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/log_calls")
}

fn analyzer(config: Config) -> Analyzer {
    Analyzer::builder()
        .root(fixture_root())
        .config(config)
        .rule(LogMessages::new())
        .build()
        .expect("analyzer should build")
}

/// Collects `(file, line, message)` from the fixture annotations.
fn expectations() -> Vec<(PathBuf, usize, String)> {
    let mut expected = Vec::new();
    for name in ["rules.rs", "server.rs"] {
        let content = std::fs::read_to_string(fixture_root().join(name))
            .expect("fixture file should exist");
        for (index, line) in content.lines().enumerate() {
            if let Some((_, message)) = line.split_once(EXPECT_MARKER) {
                expected.push((PathBuf::from(name), index + 1, message.trim().to_string()));
            }
        }
    }
    expected.sort();
    expected
}

fn findings(violations: &[Violation]) -> Vec<(PathBuf, usize, String)> {
    let mut found: Vec<_> = violations
        .iter()
        .map(|v| (v.location.file.clone(), v.location.line, v.message.clone()))
        .collect();
    found.sort();
    found
}

#[test]
fn fixture_findings_match_annotations() {
    let result = analyzer(Config::default())
        .analyze()
        .expect("analysis should succeed");

    assert_eq!(result.files_checked, 2);
    assert_eq!(findings(&result.violations), expectations());
}

#[test]
fn every_finding_is_a_warning_by_default() {
    let result = analyzer(Config::default()).analyze().unwrap();

    assert!(!result.violations.is_empty());
    assert!(result
        .violations
        .iter()
        .all(|v| v.severity == Severity::Warning));
    assert!(!result.has_errors());
}

#[test]
fn severity_override_applies_per_rule() {
    let config = Config::parse(
        r#"
[rules.sensitive-data]
severity = "error"
"#,
    )
    .expect("config should parse");

    let result = analyzer(config).analyze().unwrap();
    let errors: Vec<&str> = result
        .violations
        .iter()
        .filter(|v| v.severity == Severity::Error)
        .map(|v| v.rule.as_str())
        .collect();

    assert_eq!(errors.len(), 4);
    assert!(errors.iter().all(|rule| *rule == "sensitive-data"));
}

#[test]
fn disabled_rules_stay_quiet() {
    let config = Config::parse(
        r"
check_lowercase = false
check_english_only = false
check_special_chars = false
",
    )
    .expect("config should parse");

    let result = analyzer(config).analyze().unwrap();
    assert!(result.violations.iter().all(|v| v.code == "LL004"));
    assert_eq!(result.violations.len(), 4);
}

#[test]
fn server_report_snapshot() {
    let analyzer = analyzer(Config::default());
    let violations = analyzer
        .analyze_file(&fixture_root().join("server.rs"))
        .expect("fixture should analyze");

    let report: Vec<String> = violations.iter().map(ToString::to_string).collect();
    insta::assert_snapshot!(report.join("\n"), @r"
    server.rs:4:17: warning [LL001] log message should start with lowercase letter
    server.rs:18:18: warning [LL004] log message may contain sensitive data (keyword: password)
    server.rs:27:29: warning [LL002] log message should be in English only
    server.rs:33:17: warning [LL003] log message should not contain emojis
    server.rs:34:17: warning [LL003] log message should not contain excessive punctuation or special characters
    ");
}

#[test]
fn fixes_clear_fixable_findings() {
    let analyzer = analyzer(Config::default());
    let path = fixture_root().join("rules.rs");
    let original = std::fs::read_to_string(&path).unwrap();

    let violations = analyzer.analyze_source(&path, &original).unwrap();
    let outcome = apply_replacements(&original, &replacements_of(&violations));
    assert!(outcome.changed());
    assert_eq!(outcome.applied, 6);
    assert_eq!(outcome.skipped, 0);

    let remaining = analyzer.analyze_source(&path, &outcome.content).unwrap();
    assert!(remaining.iter().all(|v| v.replacement().is_none()));
    assert!(outcome
        .content
        .contains(r#"slog::Info("starting server on port 8080"); // expect:"#));
    assert!(outcome
        .content
        .contains(r#"slog::Error("connection failed"); // expect:"#));
}

#[test]
fn parse_failure_names_the_file() {
    let analyzer = analyzer(Config::default());
    let err = analyzer
        .analyze_source(&fixture_root().join("broken.rs"), "fn broken( {")
        .unwrap_err();
    assert!(err.to_string().contains("broken.rs"));
}
