//! Internal runner for `check!()` macro integration.
//!
//! This module is `#[doc(hidden)]` and not part of the public API.
//! It is called by the generated test function from `log_lint::check!()`.

use log_lint_core::{Analyzer, Config, Severity};
use log_lint_rules::LogMessages;
use std::path::{Path, PathBuf};

/// Runs log-lint analysis as part of `cargo test`.
///
/// Called by the `check!()` macro-generated test function.
/// Panics with a formatted report if violations are found.
///
/// # Panics
///
/// Panics if violations at or above `fail_on` severity are found, if an
/// explicit config cannot be loaded, or if the analyzer cannot be built.
pub fn run_check(config_path: Option<&str>, fail_on: Option<&str>) {
    let root = find_project_root();
    let config = load_config(&root, config_path);
    let effective_fail_on = resolve_fail_on(fail_on, &config);
    let analysis_root = root.join(&config.analyzer.root);

    let analyzer = Analyzer::builder()
        .root(analysis_root)
        .config(config)
        .rule(LogMessages::new())
        .build()
        .unwrap_or_else(|e| {
            panic!("log-lint: failed to build analyzer: {e}");
        });

    let result = analyzer.analyze().unwrap_or_else(|e| {
        panic!("log-lint: analysis failed: {e}");
    });

    if result.has_violations_at(effective_fail_on) {
        let report = result.format_test_report(effective_fail_on);
        panic!("{report}");
    }
}

/// Loads the config: an explicit path must load, discovered files fall
/// back to defaults when broken.
fn load_config(root: &Path, explicit_path: Option<&str>) -> Config {
    if let Some(path) = explicit_path {
        let full_path = if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            root.join(path)
        };
        return Config::from_file(&full_path).unwrap_or_else(|e| {
            panic!(
                "log-lint: failed to load config from {}: {e}",
                full_path.display()
            );
        });
    }

    Config::discover(root)
}

/// Checks whether a `Cargo.toml` file defines a `[workspace]` section
/// by parsing as TOML, avoiding false positives from comments or strings.
fn has_workspace_section(cargo_toml: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(cargo_toml) else {
        return false;
    };
    let Ok(table) = content.parse::<toml::Table>() else {
        return false;
    };
    table.contains_key("workspace")
}

/// Finds the project root by looking for `Cargo.toml` from `CARGO_MANIFEST_DIR`.
fn find_project_root() -> PathBuf {
    // CARGO_MANIFEST_DIR points to the crate containing the test,
    // which may be a workspace member. Walk up to find workspace root.
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let manifest_path = PathBuf::from(&manifest_dir);
        return workspace_root_from(&manifest_path).unwrap_or(manifest_path);
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn workspace_root_from(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| {
            let cargo_toml = dir.join("Cargo.toml");
            cargo_toml.exists() && has_workspace_section(&cargo_toml)
        })
        .map(Path::to_path_buf)
}

/// Resolves the effective `fail_on` severity from macro arg > config > default.
fn resolve_fail_on(macro_arg: Option<&str>, config: &Config) -> Severity {
    match macro_arg {
        Some(name) => Severity::parse(name).unwrap_or_else(|| {
            panic!("log-lint: unknown severity `{name}`. Valid values: error, warning, info")
        }),
        None => config.fail_on(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolve_fail_on_defaults_to_warning() {
        let config = Config::default();
        assert_eq!(resolve_fail_on(None, &config), Severity::Warning);
    }

    #[test]
    fn resolve_fail_on_from_config() {
        let mut config = Config::default();
        config.fail_on = Some(Severity::Error);
        assert_eq!(resolve_fail_on(None, &config), Severity::Error);
    }

    #[test]
    fn resolve_fail_on_macro_arg_overrides_config() {
        let mut config = Config::default();
        config.fail_on = Some(Severity::Info);
        assert_eq!(resolve_fail_on(Some("error"), &config), Severity::Error);
    }

    #[test]
    #[should_panic(expected = "unknown severity")]
    fn resolve_fail_on_invalid_panics() {
        resolve_fail_on(Some("fatal"), &Config::default());
    }

    #[test]
    fn workspace_root_found_from_member() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("Cargo.toml"),
            "[workspace]\nmembers = [\"crates/app\"]\n",
        )
        .unwrap();
        let member = tmp.path().join("crates/app");
        fs::create_dir_all(&member).unwrap();
        fs::write(member.join("Cargo.toml"), "[package]\nname = \"app\"\n").unwrap();

        assert_eq!(workspace_root_from(&member), Some(tmp.path().to_path_buf()));
    }

    #[test]
    fn workspace_mention_in_comment_is_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("Cargo.toml"),
            "# [workspace]\n[package]\nname = \"solo\"\n",
        )
        .unwrap();
        assert!(!has_workspace_section(&tmp.path().join("Cargo.toml")));
    }

    #[test]
    fn discovered_legacy_json_config_is_loaded() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(".loglinter.json"),
            r#"{"check_lowercase": false, "sensitive_keywords": ["ssn"]}"#,
        )
        .unwrap();

        let config = load_config(tmp.path(), None);
        assert!(!config.check_lowercase);
        assert_eq!(config.sensitive_keywords(), vec!["ssn"]);
    }

    #[test]
    fn broken_discovered_config_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("log-lint.toml"), "check_lowercase = [").unwrap();
        assert_eq!(load_config(tmp.path(), None), Config::default());
    }

    #[test]
    #[should_panic(expected = "failed to load config")]
    fn missing_explicit_config_panics() {
        let tmp = TempDir::new().unwrap();
        load_config(tmp.path(), Some("missing.toml"));
    }
}
