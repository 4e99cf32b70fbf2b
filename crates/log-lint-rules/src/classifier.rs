//! Decides whether a call is a log call and where its message lives.
//!
//! Matching is by name only: `Info` on any receiver or path counts, no type
//! or import resolution is attempted.

use crate::call::CallSite;

/// Leveled methods whose first argument is the message.
pub const LOG_METHODS: &[&str] = &["Debug", "Info", "Warn", "Error", "Fatal", "Panic"];

/// Context-carrying variants; argument 0 is the context, 1 the message.
pub const CONTEXT_METHODS: &[&str] = &["DebugContext", "InfoContext", "WarnContext", "ErrorContext"];

/// Result of classifying a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Not a logging call.
    NotLogCall,
    /// A logging call. `message_index` is `None` when the call has too few
    /// arguments to hold a message.
    LogCall {
        /// Position of the message argument.
        message_index: Option<usize>,
    },
}

impl Classification {
    /// Returns the message argument position, if there is one.
    #[must_use]
    pub fn message_index(self) -> Option<usize> {
        match self {
            Self::LogCall { message_index } => message_index,
            Self::NotLogCall => None,
        }
    }
}

/// Returns true if `name` is one of the leveled logging method names.
#[must_use]
pub fn is_log_method(name: &str) -> bool {
    LOG_METHODS.contains(&name) || CONTEXT_METHODS.contains(&name)
}

/// Classifies a call by callee name and argument count.
#[must_use]
pub fn classify(callee: &str, arg_count: usize) -> Classification {
    let index = if CONTEXT_METHODS.contains(&callee) {
        1
    } else if LOG_METHODS.contains(&callee) {
        0
    } else {
        return Classification::NotLogCall;
    };

    Classification::LogCall {
        message_index: (index < arg_count).then_some(index),
    }
}

/// Classifies a [`CallSite`].
#[must_use]
pub fn classify_call(call: &CallSite) -> Classification {
    classify(&call.callee, call.args.len())
}
