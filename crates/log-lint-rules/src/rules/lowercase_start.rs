//! Rule requiring log messages to start with a lowercase letter.
//!
//! Only an upper-case letter in first position fires; digits, symbols and
//! quotes are left alone. The fix lower-cases that one character.

use super::{string_literal, violation, MessageRule};
use crate::call::Fragment;
use log_lint_core::{Config, Replacement, RuleId, Suggestion, Violation};

/// Flags messages whose first character is an upper-case letter.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseStart;

impl MessageRule for LowercaseStart {
    fn id(&self) -> RuleId {
        RuleId::LowercaseStart
    }

    fn description(&self) -> &'static str {
        "Log messages must start with a lowercase letter"
    }

    fn evaluate(&self, fragment: &Fragment, _config: &Config) -> Option<Violation> {
        let mut chars = fragment.text.chars();
        let first = chars.next()?;
        if !(first.is_alphabetic() && first.is_uppercase()) {
            return None;
        }

        let fixed: String = first.to_lowercase().chain(chars).collect();
        let replacement = Replacement::new(fragment.location.clone(), string_literal(&fixed));

        Some(
            violation(
                self,
                fragment,
                "log message should start with lowercase letter",
            )
            .with_suggestion(Suggestion::with_fix(
                "Convert first letter to lowercase",
                replacement,
            )),
        )
    }
}
