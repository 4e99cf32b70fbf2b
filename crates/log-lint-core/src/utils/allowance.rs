//! Comment-based allowance directives.
//!
//! Supports directives like:
//! ```text
//! // log-lint: allow(sensitive-data) reason="field name, not a value"
//! ```
//!
//! A directive applies to findings on its own line (trailing comment) and
//! on the line directly below it.

use std::collections::HashSet;

const DIRECTIVE_PREFIX: &str = "log-lint:";

/// Result of checking for allow directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowCheck {
    /// Rule is not allowed.
    Denied,
    /// Rule is allowed with optional reason.
    Allowed {
        /// The reason provided (if any).
        reason: Option<String>,
    },
}

impl AllowCheck {
    /// Returns true if allowed.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }

    /// Returns the reason if allowed.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Allowed { reason } => reason.as_deref(),
            Self::Denied => None,
        }
    }
}

/// Parsed allowance directive.
#[derive(Debug, Clone)]
pub struct AllowDirective {
    /// Rule names that are allowed.
    pub rules: HashSet<String>,
    /// Optional reason for the allowance.
    pub reason: Option<String>,
}

/// Allow directives of one file, parsed once and looked up per finding.
#[derive(Debug, Clone, Default)]
pub struct AllowDirectives {
    by_line: Vec<Option<AllowDirective>>,
}

impl AllowDirectives {
    /// Parses every directive in `content`.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        if !content.contains(DIRECTIVE_PREFIX) {
            return Self::default();
        }
        Self {
            by_line: content.lines().map(parse_allow_directive).collect(),
        }
    }

    /// Returns `AllowCheck::Allowed` with optional reason if a directive
    /// naming `rule_name` (or `all`) sits on `line` (1-indexed) or on the
    /// line above it.
    #[must_use]
    pub fn check(&self, line: usize, rule_name: &str) -> AllowCheck {
        for check_line in [line.saturating_sub(1), line] {
            let Some(Some(directive)) = check_line
                .checked_sub(1)
                .and_then(|index| self.by_line.get(index))
            else {
                continue;
            };

            if directive.rules.contains(rule_name) || directive.rules.contains("all") {
                return AllowCheck::Allowed {
                    reason: directive.reason.clone(),
                };
            }
        }

        AllowCheck::Denied
    }
}

/// Parses an allowance directive from a line containing a `//` comment.
///
/// Every `//` on the line is tried, so a `//` inside a string literal does
/// not hide a trailing directive.
fn parse_allow_directive(line: &str) -> Option<AllowDirective> {
    line.match_indices("//")
        .find_map(|(start, _)| parse_comment(line[start..].trim_start_matches('/').trim()))
}

fn parse_comment(comment_content: &str) -> Option<AllowDirective> {
    let directive = comment_content.strip_prefix(DIRECTIVE_PREFIX)?.trim();
    let allow_content = directive.strip_prefix("allow(")?.trim();

    let paren_end = allow_content.find(')')?;
    let rules: HashSet<String> = allow_content[..paren_end]
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if rules.is_empty() {
        return None;
    }

    let rest = allow_content[paren_end + 1..].trim();
    let reason = rest
        .strip_prefix("reason=")
        .map(str::trim)
        .and_then(|r| r.strip_prefix('"'))
        .and_then(|r| r.find('"').map(|end| r[..end].to_string()));

    Some(AllowDirective { rules, reason })
}
