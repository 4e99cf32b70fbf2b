//! # log-lint-rules
//!
//! Log call classification, message extraction and the message rules.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | LL001 | `lowercase-start` | Messages start with a lowercase letter |
//! | LL002 | `english-only` | No Cyrillic, Han, Hiragana or Katakana text |
//! | LL003 | `special-chars` | No emojis, `!!!` or `...` |
//! | LL004 | `sensitive-data` | No passwords, tokens, keys or other secrets |
//!
//! The rules run behind one file-level pass, [`LogMessages`], which finds
//! calls such as `logger.Info("...")` or `slog.InfoContext(ctx, "...")`.
//!
//! ## Usage
//!
//! ```ignore
//! use log_lint_core::Analyzer;
//! use log_lint_rules::LogMessages;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(LogMessages::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod call;
pub mod classifier;
pub mod engine;
pub mod extractor;
mod log_messages;
pub mod rules;

pub use call::{ArgExpr, CallSite, Fragment};
pub use classifier::{classify, classify_call, is_log_method, Classification};
pub use engine::{Engine, FindingSink};
pub use extractor::{extract, Message};
pub use log_messages::LogMessages;
pub use rules::{all_rules, rule_for, MessageRule, MessageRuleBox};

/// Re-export core types for convenience.
pub use log_lint_core::{Rule, RuleId, Severity, Violation};
