//! File-level rule that walks Rust syntax trees for log calls.
//!
//! Every method call (`logger.Info(..)`) and qualified path call
//! (`slog::Info(..)`) whose callee is a leveled log name is lowered into a
//! [`CallSite`] and handed to the [`Engine`]. Macro invocations such as
//! `info!(..)` are not inspected: their arguments are unparsed tokens.
//!
//! # Suppression
//!
//! - `// log-lint: allow(sensitive-data) reason="..."` on the literal's line
//!   or the line above
//! - `// log-lint: allow(all)` for every message rule

use crate::call::{ArgExpr, CallSite, Fragment};
use crate::classifier::is_log_method;
use crate::engine::{Engine, FindingSink};
use log_lint_core::{AllowDirectives, Config, FileContext, Rule, Violation};
use proc_macro2::Span;
use syn::punctuated::Punctuated;
use syn::visit::Visit;
use syn::{BinOp, Expr, ExprBinary, ExprCall, ExprLit, ExprMethodCall, Lit, Token};
use tracing::debug;

/// Rule code for the log message pass.
pub const CODE: &str = "LL000";

/// Rule name for the log message pass.
pub const NAME: &str = "log-messages";

/// Runs the message rules over every log call in a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogMessages;

impl LogMessages {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rule for LogMessages {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Checks the message text of leveled log calls"
    }

    fn check(&self, ctx: &FileContext, config: &Config, ast: &syn::File) -> Vec<Violation> {
        let mut visitor = LogCallVisitor {
            ctx,
            engine: Engine::new(config),
            allows: AllowDirectives::parse(ctx.content),
            violations: Vec::new(),
        };

        visitor.visit_file(ast);
        visitor.violations
    }
}

struct LogCallVisitor<'a> {
    ctx: &'a FileContext<'a>,
    engine: Engine<'a>,
    allows: AllowDirectives,
    violations: Vec<Violation>,
}

impl LogCallVisitor<'_> {
    fn process(&mut self, callee: String, span: Span, args: &Punctuated<Expr, Token![,]>) {
        let args = args.iter().map(|arg| lower(self.ctx, arg)).collect();
        let call = CallSite::new(callee, args, self.ctx.span_location(span));

        let mut sink = SuppressingSink {
            allows: &self.allows,
            violations: &mut self.violations,
        };
        self.engine.process(&call, &mut sink);
    }
}

impl<'ast> Visit<'ast> for LogCallVisitor<'_> {
    fn visit_expr_method_call(&mut self, node: &'ast ExprMethodCall) {
        let name = node.method.to_string();
        if is_log_method(&name) {
            self.process(name, node.method.span(), &node.args);
        }

        syn::visit::visit_expr_method_call(self, node);
    }

    fn visit_expr_call(&mut self, node: &'ast ExprCall) {
        // A bare `Error(..)` is a constructor or local fn, not a logger.
        if let Expr::Path(func) = &*node.func {
            if func.path.segments.len() >= 2 {
                if let Some(segment) = func.path.segments.last() {
                    let name = segment.ident.to_string();
                    if is_log_method(&name) {
                        self.process(name, segment.ident.span(), &node.args);
                    }
                }
            }
        }

        syn::visit::visit_expr_call(self, node);
    }
}

/// Drops findings covered by an allow directive before they are collected.
struct SuppressingSink<'a> {
    allows: &'a AllowDirectives,
    violations: &'a mut Vec<Violation>,
}

impl FindingSink for SuppressingSink<'_> {
    fn report(&mut self, violation: Violation) {
        let line = violation.location.line;
        if self.allows.check(line, &violation.rule).is_allowed() {
            debug!("Suppressed {} at line {line}", violation.rule);
            return;
        }
        self.violations.push(violation);
    }
}

/// Lowers a call argument into the host-neutral model.
fn lower(ctx: &FileContext<'_>, expr: &Expr) -> ArgExpr {
    match expr {
        Expr::Binary(binary) if is_add(binary) => lower_concat(ctx, binary),
        _ => lower_leaf(ctx, expr),
    }
}

fn lower_leaf(ctx: &FileContext<'_>, expr: &Expr) -> ArgExpr {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) => ArgExpr::Literal(Fragment::new(lit.value(), ctx.span_location(lit.span()))),
        _ => ArgExpr::Other,
    }
}

/// Flattens the left spine of a `+` chain, looking through parentheses on
/// the left. Right operands are kept as leaves; a parenthesized chain on the
/// right lowers to `Other`.
fn lower_concat(ctx: &FileContext<'_>, root: &ExprBinary) -> ArgExpr {
    let mut operands = Vec::new();
    let mut node = root;
    loop {
        operands.push(lower_leaf(ctx, &node.right));
        match unparen(&node.left) {
            Expr::Binary(left) if is_add(left) => node = left,
            left => {
                operands.push(lower_leaf(ctx, left));
                break;
            }
        }
    }

    operands.reverse();
    ArgExpr::Concat(operands)
}

fn unparen(mut expr: &Expr) -> &Expr {
    while let Expr::Paren(paren) = expr {
        expr = &paren.expr;
    }
    expr
}

fn is_add(binary: &ExprBinary) -> bool {
    matches!(binary.op, BinOp::Add(_))
}
