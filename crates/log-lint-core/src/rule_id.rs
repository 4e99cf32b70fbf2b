//! Identifiers for the built-in message rules.

use serde::{Deserialize, Serialize};

/// One of the message rules log-lint knows about.
///
/// The declaration order is the evaluation order used by the engine when the
/// english-only gate is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    /// Non-Latin scripts (Cyrillic, Han, Hiragana, Katakana) in the message.
    EnglishOnly,
    /// Message starts with an upper-case letter.
    LowercaseStart,
    /// Emojis or runs of `!!!` / `...`.
    SpecialChars,
    /// Keywords hinting at secrets.
    SensitiveData,
}

impl RuleId {
    /// All rules, in gate evaluation order.
    pub const ALL: [Self; 4] = [
        Self::EnglishOnly,
        Self::LowercaseStart,
        Self::SpecialChars,
        Self::SensitiveData,
    ];

    /// Kebab-case rule name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::EnglishOnly => "english-only",
            Self::LowercaseStart => "lowercase-start",
            Self::SpecialChars => "special-chars",
            Self::SensitiveData => "sensitive-data",
        }
    }

    /// Stable rule code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::LowercaseStart => "LL001",
            Self::EnglishOnly => "LL002",
            Self::SpecialChars => "LL003",
            Self::SensitiveData => "LL004",
        }
    }

    /// Name of the config flag that toggles this rule.
    #[must_use]
    pub fn config_flag(self) -> &'static str {
        match self {
            Self::LowercaseStart => "check_lowercase",
            Self::EnglishOnly => "check_english_only",
            Self::SpecialChars => "check_special_chars",
            Self::SensitiveData => "check_sensitive_data",
        }
    }

    /// Looks a rule up by name or code.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == s || id.code().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_names_and_codes() {
        assert_eq!(RuleId::parse("sensitive-data"), Some(RuleId::SensitiveData));
        assert_eq!(RuleId::parse("LL001"), Some(RuleId::LowercaseStart));
        assert_eq!(RuleId::parse("ll003"), Some(RuleId::SpecialChars));
        assert_eq!(RuleId::parse("no-such-rule"), None);
    }

    #[test]
    fn gate_rule_comes_first() {
        assert_eq!(RuleId::ALL[0], RuleId::EnglishOnly);
    }
}
