//! # log-lint-core
//!
//! Core framework for linting log messages based on `syn` AST analysis.
//!
//! This crate provides the shared pieces every log-lint front end needs:
//!
//! - [`Rule`] trait for per-file AST passes
//! - [`Analyzer`] for discovering, parsing and checking source files
//! - [`Config`] with the message rule toggles and keyword list
//! - [`Violation`] for representing lint findings, with optional fixes
//! - [`apply_replacements`] for writing suggested fixes back to source
//!
//! ## Example
//!
//! ```ignore
//! use log_lint_core::{Analyzer, Config};
//! use log_lint_rules::LogMessages;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .config(Config::default())
//!     .rule(LogMessages::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod fix;
mod rule;
mod rule_id;
mod types;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{
    AnalyzerConfig, Config, ConfigError, RuleConfig, DEFAULT_SENSITIVE_KEYWORDS,
    PROJECT_CONFIG_NAMES,
};
pub use context::FileContext;
pub use fix::{apply_replacements, replacements_of, FixOutcome};
pub use rule::{Rule, RuleBox};
pub use rule_id::RuleId;
pub use types::{
    LintResult, Location, Replacement, Severity, Suggestion, Violation, ViolationDiagnostic,
};
pub use utils::allowance::{AllowCheck, AllowDirectives};
