//! Rule trait for per-file lint passes.

use crate::config::Config;
use crate::context::FileContext;
use crate::types::{Severity, Violation};

/// A per-file lint pass based on `syn` AST analysis.
///
/// The analyzer hands every parsed file to each registered rule together
/// with the run's [`Config`]. Rules are shared across worker threads, so
/// they must not hold per-file state.
///
/// # Example
///
/// ```ignore
/// use log_lint_core::{Config, FileContext, Rule, Violation};
/// use syn::visit::Visit;
///
/// pub struct NoPrintln;
///
/// impl Rule for NoPrintln {
///     fn name(&self) -> &'static str { "no-println" }
///     fn code(&self) -> &'static str { "LL900" }
///
///     fn check(&self, ctx: &FileContext, config: &Config, ast: &syn::File) -> Vec<Violation> {
///         let mut visitor = PrintlnVisitor::new(ctx);
///         visitor.visit_file(ast);
///         visitor.violations
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str;

    /// Returns the rule code.
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Checks a single file and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `config` - The run's configuration, read-only
    /// * `ast` - The parsed syntax tree of the file
    fn check(&self, ctx: &FileContext, config: &Config, ast: &syn::File) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Location;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }

        fn check(&self, ctx: &FileContext, _config: &Config, _ast: &syn::File) -> Vec<Violation> {
            vec![Violation::new(
                self.code(),
                self.name(),
                self.default_severity(),
                Location::new(ctx.relative_path.clone(), 1, 1),
                "Test violation",
            )]
        }
    }

    #[test]
    fn test_rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.description(), "");
        assert_eq!(rule.default_severity(), Severity::Warning);
    }
}
