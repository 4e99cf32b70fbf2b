//! Per-call-site driver: classify, extract, run the rules in order.
//!
//! The engine keeps no state between call sites. It borrows the run's
//! [`Config`] and reports each violation to a [`FindingSink`] the moment a
//! rule produces it.

use crate::call::{CallSite, Fragment};
use crate::classifier::classify_call;
use crate::extractor::{extract, Message};
use crate::rules::{all_rules, MessageRuleBox};
use log_lint_core::{Config, RuleId, Violation};
use tracing::trace;

/// Receiver for violations as the engine produces them.
pub trait FindingSink {
    /// Accepts one violation.
    fn report(&mut self, violation: Violation);
}

impl FindingSink for Vec<Violation> {
    fn report(&mut self, violation: Violation) {
        self.push(violation);
    }
}

/// Runs the enabled message rules against log call sites.
pub struct Engine<'c> {
    config: &'c Config,
    rules: Vec<MessageRuleBox>,
}

impl<'c> Engine<'c> {
    /// Creates an engine with the rules `config` enables, in gate order.
    #[must_use]
    pub fn new(config: &'c Config) -> Self {
        let rules = all_rules()
            .into_iter()
            .filter(|rule| config.is_rule_enabled(rule.id()))
            .collect();
        Self { config, rules }
    }

    /// Returns the ids of the rules this engine runs, in order.
    #[must_use]
    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    /// Checks one call site, reporting violations to `sink`.
    pub fn process(&self, call: &CallSite, sink: &mut dyn FindingSink) {
        let Some(index) = classify_call(call).message_index() else {
            return;
        };
        let Some(message) = call.args.get(index).and_then(extract) else {
            return;
        };

        trace!("Checking {} call at line {}", call.callee, call.location.line);

        match message {
            Message::Literal(fragment) => self.check_literal(&fragment, sink),
            Message::Concat(fragments) => self.check_concat(&fragments, sink),
        }
    }

    /// Checks one call site and collects its violations.
    #[must_use]
    pub fn check(&self, call: &CallSite) -> Vec<Violation> {
        let mut violations = Vec::new();
        self.process(call, &mut violations);
        violations
    }

    /// Runs every enabled rule on a literal message, stopping after a
    /// firing english-only rule when the gate is on.
    fn check_literal(&self, fragment: &Fragment, sink: &mut dyn FindingSink) {
        for rule in &self.rules {
            let Some(violation) = rule.evaluate(fragment, self.config) else {
                continue;
            };
            sink.report(violation);

            if rule.id() == RuleId::EnglishOnly && self.config.english_only_gate {
                return;
            }
        }
    }

    /// Concatenations carry runtime values whose rendered text is unknown,
    /// so only the sensitive-data rule runs, once per left-walk fragment.
    fn check_concat(&self, fragments: &[Fragment], sink: &mut dyn FindingSink) {
        let Some(rule) = self
            .rules
            .iter()
            .find(|rule| rule.id() == RuleId::SensitiveData)
        else {
            return;
        };

        for fragment in fragments {
            if let Some(violation) = rule.evaluate(fragment, self.config) {
                sink.report(violation);
            }
        }
    }
}
