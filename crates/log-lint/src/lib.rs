//! # log-lint
//!
//! Linter for the message text of log calls in Rust projects.
//!
//! This is the main facade crate that re-exports the core types and the
//! message rules.
//!
//! ## Quick Start — `cargo test` Integration
//!
//! ```toml
//! [dev-dependencies]
//! log-lint = "0.2"
//! ```
//!
//! ```rust,ignore
//! // tests/log_messages.rs
//! log_lint::check!();
//! ```
//!
//! This runs log-lint as part of `cargo test`. Configure via `log-lint.toml`.
//!
//! ## Suppression Comments
//!
//! ```rust,ignore
//! // log-lint: allow(sensitive-data) reason="logs the field name only"
//! logger.Info("password policy updated");
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use log_lint::rules::LogMessages;
//! use log_lint::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(LogMessages::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use log_lint_core::*;

/// Log call classification, message extraction and the message rules.
pub mod rules {
    pub use log_lint_rules::*;
}

mod runner;

#[doc(hidden)]
pub mod __internal {
    pub use crate::runner::run_check;
}

/// Generates a `#[test]` that lints the enclosing workspace.
///
/// Accepts optional `config = "path"` (relative to the workspace root) and
/// `fail_on = "error" | "warning" | "info"` arguments, in either order.
///
/// ```rust,ignore
/// log_lint::check!();
/// log_lint::check!(config = "ci/log-lint.toml", fail_on = "error");
/// ```
#[macro_export]
macro_rules! check {
    () => {
        $crate::__check_test!(::core::option::Option::None, ::core::option::Option::None);
    };
    (config = $config:literal $(,)?) => {
        $crate::__check_test!(
            ::core::option::Option::Some($config),
            ::core::option::Option::None
        );
    };
    (fail_on = $fail_on:literal $(,)?) => {
        $crate::__check_test!(
            ::core::option::Option::None,
            ::core::option::Option::Some($fail_on)
        );
    };
    (config = $config:literal, fail_on = $fail_on:literal $(,)?) => {
        $crate::__check_test!(
            ::core::option::Option::Some($config),
            ::core::option::Option::Some($fail_on)
        );
    };
    (fail_on = $fail_on:literal, config = $config:literal $(,)?) => {
        $crate::__check_test!(
            ::core::option::Option::Some($config),
            ::core::option::Option::Some($fail_on)
        );
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __check_test {
    ($config:expr, $fail_on:expr) => {
        #[test]
        fn log_lint_check() {
            $crate::__internal::run_check($config, $fail_on);
        }
    };
}
