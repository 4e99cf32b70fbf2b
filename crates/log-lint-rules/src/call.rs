//! Host-neutral model of a call site.
//!
//! The syntax adapter lowers whatever tree it walks into these types, so the
//! classifier, extractor and rules never see `syn` directly.

use log_lint_core::Location;

/// A string literal: its decoded text and where the literal token sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Literal text with quoting removed and escapes resolved.
    pub text: String,
    /// Span of the whole literal token, quotes included.
    pub location: Location,
}

impl Fragment {
    /// Creates a fragment.
    #[must_use]
    pub fn new(text: impl Into<String>, location: Location) -> Self {
        Self {
            text: text.into(),
            location,
        }
    }
}

/// A call argument, reduced to the shapes message extraction cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgExpr {
    /// A string literal.
    Literal(Fragment),
    /// A `+` chain, operands in source order.
    Concat(Vec<ArgExpr>),
    /// Anything else: identifiers, calls, format macros, numbers.
    Other,
}

/// A function or method invocation seen by the tree walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    /// Method name or last path segment of the callee.
    pub callee: String,
    /// Positional arguments.
    pub args: Vec<ArgExpr>,
    /// Location of the callee name.
    pub location: Location,
}

impl CallSite {
    /// Creates a call site.
    #[must_use]
    pub fn new(callee: impl Into<String>, args: Vec<ArgExpr>, location: Location) -> Self {
        Self {
            callee: callee.into(),
            args,
            location,
        }
    }
}
