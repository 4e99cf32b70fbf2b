//! Rule against emojis and runs of punctuation in log messages.
//!
//! Checks, first match wins:
//!
//! 1. any code point in U+1F300..=U+1F9FF (no automatic fix)
//! 2. `!!!`, fixed by removing every occurrence
//! 3. `...`, fixed by removing every occurrence
//!
//! Single `!` or `.` never fire.

use super::{string_literal, violation, MessageRule};
use crate::call::Fragment;
use log_lint_core::{Config, Replacement, RuleId, Suggestion, Violation};

const EXCESSIVE_PUNCTUATION: &[&str] = &["!!!", "..."];

const PUNCTUATION_MESSAGE: &str =
    "log message should not contain excessive punctuation or special characters";

/// Returns true if `c` falls in the emoji block range this rule flags.
#[must_use]
pub fn is_emoji(c: char) -> bool {
    ('\u{1F300}'..='\u{1F9FF}').contains(&c)
}

/// Flags emojis and excessive punctuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecialChars;

impl MessageRule for SpecialChars {
    fn id(&self) -> RuleId {
        RuleId::SpecialChars
    }

    fn description(&self) -> &'static str {
        "Log messages must not contain emojis or excessive punctuation"
    }

    fn evaluate(&self, fragment: &Fragment, _config: &Config) -> Option<Violation> {
        let text = &fragment.text;

        if text.chars().any(is_emoji) {
            return Some(
                violation(self, fragment, "log message should not contain emojis")
                    .with_suggestion(Suggestion::new("Remove the emoji from the message")),
            );
        }

        let pattern = EXCESSIVE_PUNCTUATION
            .iter()
            .find(|pattern| text.contains(*pattern))?;

        let fixed = text.replace(pattern, "");
        let replacement = Replacement::new(fragment.location.clone(), string_literal(&fixed));

        Some(
            violation(self, fragment, PUNCTUATION_MESSAGE).with_suggestion(Suggestion::with_fix(
                "Remove excessive punctuation",
                replacement,
            )),
        )
    }
}
