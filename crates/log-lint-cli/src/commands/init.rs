//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# log-lint configuration

# Rule toggles
check_lowercase = true
check_english_only = true
check_special_chars = true
check_sensitive_data = true

# Stop the other rules on a message once english-only has fired
english_only_gate = true

# Matched case-insensitively, in order; an empty list restores the defaults
sensitive_keywords = [
    "password",
    "passwd",
    "pwd",
    "token",
    "api_key",
    "apikey",
    "api-key",
    "secret",
    "private_key",
    "privatekey",
    "credential",
]

# Lowest severity that fails `log-lint check` and `log_lint::check!()`
fail_on = "warning"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
    "**/vendor/**",
]

# Respect .gitignore files
respect_gitignore = true

# Worker threads for file analysis (default: sequential)
# parallelism = 4

# Per-rule overrides
# [rules.sensitive-data]
# severity = "error"
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("log-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created log-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit log-lint.toml to configure rules");
    println!("  2. Run: log-lint check");

    Ok(())
}
