//! List rules command implementation.

use log_lint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!(
        "{:<8} {:<17} {:<22} Description",
        "Code", "Name", "Config flag"
    );
    println!("{}", "-".repeat(100));

    for rule in all_rules() {
        let id = rule.id();
        println!(
            "{:<8} {:<17} {:<22} {}",
            id.code(),
            id.name(),
            id.config_flag(),
            rule.description()
        );
    }

    println!("\nRules run in the order above. With english_only_gate = true (default),");
    println!("an english-only finding stops the remaining rules for that message.");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  log-lint check --rules lowercase-start,sensitive-data");
    println!("  log-lint check --rules LL001,LL004");
}
