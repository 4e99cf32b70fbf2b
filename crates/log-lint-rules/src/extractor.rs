//! Reduces a message argument to the literal text the rules inspect.

use crate::call::{ArgExpr, Fragment};

/// Nesting limit for the left walk through concatenations.
pub const MAX_CONCAT_DEPTH: usize = 2048;

/// The checkable content of a log message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The whole message is one non-empty string literal.
    Literal(Fragment),
    /// The message is a `+` chain. Holds the literal fragments found while
    /// walking its left-hand operands from the outermost `+` inward. Right
    /// operands are never inspected, so in practice this is the leftmost
    /// leaf when that leaf is a literal.
    Concat(Vec<Fragment>),
}

/// Extracts the message from an argument.
///
/// Returns `None` for empty literals and for anything that is neither a
/// literal nor a concatenation.
#[must_use]
pub fn extract(arg: &ArgExpr) -> Option<Message> {
    match arg {
        ArgExpr::Literal(fragment) if fragment.text.is_empty() => None,
        ArgExpr::Literal(fragment) => Some(Message::Literal(fragment.clone())),
        ArgExpr::Concat(operands) => Some(Message::Concat(left_walk(operands))),
        ArgExpr::Other => None,
    }
}

/// Follows the first operand of each chain. A literal ends the walk with a
/// fragment, a nested chain is entered, anything else ends it empty.
fn left_walk(operands: &[ArgExpr]) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut current = operands;
    for _ in 0..MAX_CONCAT_DEPTH {
        match current.first() {
            Some(ArgExpr::Literal(fragment)) => {
                fragments.push(fragment.clone());
                break;
            }
            Some(ArgExpr::Concat(inner)) => current = inner,
            Some(ArgExpr::Other) | None => break,
        }
    }
    fragments
}
