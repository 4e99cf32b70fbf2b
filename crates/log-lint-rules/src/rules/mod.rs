//! Message rules.
//!
//! Each rule looks at one [`Fragment`] and reports at most one violation.
//! Rules are stateless; the same instances are shared across files and
//! threads.

mod english_only;
mod lowercase_start;
mod sensitive_data;
mod special_chars;

pub use english_only::{is_non_latin_script, EnglishOnly};
pub use lowercase_start::LowercaseStart;
pub use sensitive_data::SensitiveData;
pub use special_chars::{is_emoji, SpecialChars};

use crate::call::Fragment;
use log_lint_core::{Config, RuleId, Severity, Violation};

/// A validator for the text of one log message fragment.
pub trait MessageRule: Send + Sync {
    /// Identifier of this rule.
    fn id(&self) -> RuleId;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str;

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Checks the fragment's text and returns a violation if it breaks the
    /// rule. Must be total over any text, including the empty string.
    fn evaluate(&self, fragment: &Fragment, config: &Config) -> Option<Violation>;
}

/// Type alias for boxed [`MessageRule`] trait objects.
pub type MessageRuleBox = Box<dyn MessageRule>;

/// Returns every message rule, in gate evaluation order.
#[must_use]
pub fn all_rules() -> Vec<MessageRuleBox> {
    RuleId::ALL.into_iter().map(rule_for).collect()
}

/// Returns the rule implementing `id`.
#[must_use]
pub fn rule_for(id: RuleId) -> MessageRuleBox {
    match id {
        RuleId::EnglishOnly => Box::new(EnglishOnly),
        RuleId::LowercaseStart => Box::new(LowercaseStart),
        RuleId::SpecialChars => Box::new(SpecialChars),
        RuleId::SensitiveData => Box::new(SensitiveData),
    }
}

/// Builds a violation anchored at the fragment's literal.
fn violation(rule: &dyn MessageRule, fragment: &Fragment, message: impl Into<String>) -> Violation {
    let id = rule.id();
    Violation::new(
        id.code(),
        id.name(),
        rule.default_severity(),
        fragment.location.clone(),
        message,
    )
}

/// Renders `text` as a Rust string literal, quotes included.
fn string_literal(text: &str) -> String {
    format!("{text:?}")
}
