//! Check command implementation.

use anyhow::{bail, Context, Result};
use log_lint_core::{apply_replacements, Analyzer, LintResult, Replacement, RuleId, Severity};
use log_lint_rules::LogMessages;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config_layers::{Layer, LayeredConfig};
use crate::OutputFormat;

/// Fix passes before giving up. Fixes on the same literal overlap, so each
/// pass can only land one of them.
const MAX_FIX_PASSES: usize = 4;

/// Command-line options for `check`.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule names or codes to restrict the run to.
    pub rules: Option<String>,
    /// Extra exclude globs.
    pub exclude: Vec<String>,
    /// Rewrite files with available fixes.
    pub fix: bool,
    /// Failure threshold overriding the config.
    pub fail_on: Option<Severity>,
}

/// Runs the check command.
pub fn run(path: &Path, options: &CheckOptions, layered: LayeredConfig) -> Result<()> {
    let LayeredConfig { mut config, layer } = layered;
    if let Layer::Global(global) = &layer {
        tracing::info!("Using global config: {}", global.display());
    }

    if let Some(filter) = &options.rules {
        config.restrict_to(&parse_rule_filter(filter)?);
    }

    let analyzer = Analyzer::builder()
        .root(path)
        .config(config)
        .rule(LogMessages::new())
        .excludes(options.exclude.iter().cloned())
        .build()
        .context("Failed to build analyzer")?;

    tracing::info!("Analyzing {}", path.display());

    let mut result = analyzer.analyze().context("Analysis failed")?;
    if options.fix {
        result = fix_until_stable(&analyzer, result)?;
    }

    super::output::print(&result, options.format, analyzer.root())?;

    let threshold = options
        .fail_on
        .unwrap_or_else(|| analyzer.config().fail_on());
    if result.has_violations_at(threshold) {
        std::process::exit(1);
    }

    Ok(())
}

/// Maps `--rules` entries to rule ids, warning about unknown ones.
///
/// Fails when nothing in the filter names a known rule, since the run would
/// otherwise check nothing and pass.
fn parse_rule_filter(filter: &str) -> Result<Vec<RuleId>> {
    let ids: Vec<RuleId> = filter
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| {
            let id = RuleId::parse(name);
            if id.is_none() {
                tracing::warn!("Unknown rule: {}", name);
            }
            id
        })
        .collect();

    if ids.is_empty() {
        let known: Vec<&str> = RuleId::ALL.iter().map(|id| id.name()).collect();
        bail!(
            "--rules `{filter}` names no known rule (expected one of: {})",
            known.join(", ")
        );
    }
    Ok(ids)
}

/// Applies fixes and re-analyzes until nothing changes or the pass limit
/// is reached. Returns the findings that remain.
fn fix_until_stable(analyzer: &Analyzer, mut result: LintResult) -> Result<LintResult> {
    for pass in 1..=MAX_FIX_PASSES {
        let fixed = apply_fixes(analyzer.root(), &result)?;
        if fixed == 0 {
            break;
        }
        tracing::info!("Fix pass {pass}: rewrote {fixed} literal(s)");
        result = analyzer.analyze().context("Analysis failed")?;
    }
    Ok(result)
}

/// Writes the fixes carried by `result` to disk, one file at a time.
/// Returns the number of replacements applied.
fn apply_fixes(root: &Path, result: &LintResult) -> Result<usize> {
    let mut by_file: BTreeMap<PathBuf, Vec<&Replacement>> = BTreeMap::new();
    for violation in &result.violations {
        if let Some(replacement) = violation.replacement() {
            by_file
                .entry(root.join(&violation.location.file))
                .or_default()
                .push(replacement);
        }
    }

    let mut applied = 0;
    for (path, replacements) in by_file {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let outcome = apply_replacements(&content, &replacements);
        if outcome.changed() {
            std::fs::write(&path, &outcome.content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::debug!(
                "Fixed {}: {} applied, {} deferred",
                path.display(),
                outcome.applied,
                outcome.skipped
            );
        }
        applied += outcome.applied;
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn analyzer(root: &Path) -> Analyzer {
        Analyzer::builder()
            .root(root)
            .rule(LogMessages::new())
            .build()
            .unwrap()
    }

    #[test]
    fn rule_filter_accepts_names_and_codes() {
        assert_eq!(
            parse_rule_filter("lowercase-start, LL004").unwrap(),
            vec![RuleId::LowercaseStart, RuleId::SensitiveData]
        );
        assert_eq!(
            parse_rule_filter("no-such-rule,,special-chars").unwrap(),
            vec![RuleId::SpecialChars]
        );
    }

    #[test]
    fn rule_filter_without_known_rules_is_an_error() {
        let err = parse_rule_filter("lowercase,LL009").unwrap_err();
        assert!(err.to_string().contains("names no known rule"));
        assert!(err.to_string().contains("sensitive-data"));
        assert!(parse_rule_filter(" , ").is_err());
    }

    #[test]
    fn stacked_fixes_land_over_several_passes() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("main.rs");
        fs::write(
            &file,
            "fn main() {\n    logger.Error(\"Connection failed!!!\");\n    logger.Info(\"Ready...\");\n}\n",
        )
        .unwrap();

        let analyzer = analyzer(tmp.path());
        let first = analyzer.analyze().unwrap();
        assert_eq!(first.fixable_count(), 4);

        let remaining = fix_until_stable(&analyzer, first).unwrap();
        assert!(remaining.violations.is_empty());
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "fn main() {\n    logger.Error(\"connection failed\");\n    logger.Info(\"ready\");\n}\n"
        );
    }

    #[test]
    fn unfixable_findings_remain() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("lib.rs");
        let source = "fn f() {\n    logger.Info(\"token: \" + token);\n}\n";
        fs::write(&file, source).unwrap();

        let analyzer = analyzer(tmp.path());
        let first = analyzer.analyze().unwrap();
        let remaining = fix_until_stable(&analyzer, first).unwrap();

        assert_eq!(remaining.violations.len(), 1);
        assert_eq!(remaining.violations[0].code, "LL004");
        assert_eq!(fs::read_to_string(&file).unwrap(), source);
    }
}
