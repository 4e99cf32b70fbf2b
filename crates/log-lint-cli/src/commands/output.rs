//! Shared output formatting for lint results.

use anyhow::Result;
use log_lint_core::{LintResult, Severity, Violation, ViolationDiagnostic};
use miette::{GraphicalReportHandler, NamedSource, Report};
use std::path::Path;

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `root` is where violation paths are relative to; the rich format reads
/// source snippets from there.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
        OutputFormat::Rich => return print_rich(result, root),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for violation in &result.violations {
        let severity_indicator = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{} {} at {}:{}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        );
        println!("  {}: {}", severity_indicator, violation.message);
        if let Some(suggestion) = &violation.suggestion {
            println!("  = help: {}", suggestion.message);
            if let Some(replacement) = &suggestion.replacement {
                println!("  = fix: {}", replacement.new_text);
            }
        }
        println!();
    }

    print_summary(result);
}

fn print_summary(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();
    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked
    );

    let fixable = result.fixable_count();
    if fixable > 0 {
        println!("{fixable} finding(s) can be fixed with `log-lint check --fix`");
    }
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
}

fn print_rich(result: &LintResult, root: &Path) -> Result<()> {
    let handler = GraphicalReportHandler::new();

    for violation in &result.violations {
        let rendered = render_rich(&handler, violation, root)?;
        println!("{rendered}");
    }

    print_summary(result);
    Ok(())
}

fn render_rich(
    handler: &GraphicalReportHandler,
    violation: &Violation,
    root: &Path,
) -> Result<String> {
    let file = &violation.location.file;
    let source = std::fs::read_to_string(root.join(file)).unwrap_or_else(|e| {
        tracing::debug!("No source for {}: {}", file.display(), e);
        String::new()
    });

    let report = Report::new(ViolationDiagnostic::from(violation))
        .with_source_code(NamedSource::new(file.display().to_string(), source));

    let mut rendered = String::new();
    handler.render_report(&mut rendered, &*report)?;
    Ok(rendered)
}
