//! Rule flagging log messages that mention secrets.
//!
//! The message is lower-cased and searched for each configured keyword in
//! list order; the first hit is reported with the keyword as configured.
//! Matching is plain substring search, so `tokens` and `pwd_reset` both hit.
//! There is no automatic fix: only the author knows what the safe message is.

use super::{violation, MessageRule};
use crate::call::Fragment;
use log_lint_core::{Config, RuleId, Suggestion, Violation};

/// Flags messages containing a sensitive keyword.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensitiveData;

impl SensitiveData {
    /// Returns the first keyword (in list order) found in `text`.
    #[must_use]
    pub fn matched_keyword<'k>(text: &str, keywords: &[&'k str]) -> Option<&'k str> {
        let lowered = text.to_lowercase();
        keywords
            .iter()
            .copied()
            .filter(|keyword| !keyword.is_empty())
            .find(|keyword| lowered.contains(&keyword.to_lowercase()))
    }
}

impl MessageRule for SensitiveData {
    fn id(&self) -> RuleId {
        RuleId::SensitiveData
    }

    fn description(&self) -> &'static str {
        "Log messages must not mention passwords, tokens, keys or other secrets"
    }

    fn evaluate(&self, fragment: &Fragment, config: &Config) -> Option<Violation> {
        let keywords = config.sensitive_keywords();
        let keyword = Self::matched_keyword(&fragment.text, &keywords)?;

        Some(
            violation(
                self,
                fragment,
                format!("log message may contain sensitive data (keyword: {keyword})"),
            )
            .with_suggestion(Suggestion::new(
                "Log an identifier or a redacted marker instead of the sensitive value",
            )),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_support::fragment;

    fn check_with(text: &str, config: &Config) -> Option<Violation> {
        SensitiveData.evaluate(&fragment(text), config)
    }

    fn check(text: &str) -> Option<Violation> {
        check_with(text, &Config::default())
    }

    #[test]
    fn default_keywords_fire() {
        let v = check("user password: secret").unwrap();
        assert_eq!(v.code, "LL004");
        assert_eq!(
            v.message,
            "log message may contain sensitive data (keyword: password)"
        );
        assert!(v.replacement().is_none());

        assert!(check("auth token: abc123").is_some());
        assert!(check("api_key=12345").is_some());
    }

    #[test]
    fn match_is_case_insensitive() {
        let v = check("PASSWORD reset").unwrap();
        assert!(v.message.ends_with("(keyword: password)"));
    }

    #[test]
    fn first_keyword_in_list_order_wins() {
        // "secret" appears first in the text, but "token" comes first in the list.
        let v = check("secret token rotated").unwrap();
        assert!(v.message.ends_with("(keyword: token)"));
    }

    #[test]
    fn safe_message_passes() {
        assert!(check("user login successful").is_none());
        assert!(check("").is_none());
    }

    #[test]
    fn custom_keywords_replace_defaults() {
        let mut config = Config::default();
        config.sensitive_keywords = vec!["SSN".to_string(), "card_number".to_string()];

        let v = check_with("customer ssn on file", &config).unwrap();
        assert!(v.message.ends_with("(keyword: SSN)"));
        assert!(check_with("user password: x", &config).is_none());
    }

    #[test]
    fn empty_keyword_list_uses_defaults() {
        let mut config = Config::default();
        config.sensitive_keywords.clear();
        assert!(check_with("private_key loaded", &config).is_some());
    }

    #[test]
    fn blank_keywords_never_match() {
        assert_eq!(SensitiveData::matched_keyword("anything", &["", "thing"]), Some("thing"));
    }
}
