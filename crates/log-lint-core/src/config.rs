//! Configuration types for log-lint.
//!
//! A config is loaded once per run and then only read. Two file formats are
//! accepted: TOML (`log-lint.toml`) and the legacy JSON format
//! (`.loglinter.json`), chosen by file extension.

use crate::rule_id::RuleId;
use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Keywords used by the sensitive-data rule when none are configured.
pub const DEFAULT_SENSITIVE_KEYWORDS: &[&str] = &[
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
];

const DEFAULT_ALLOWED_PUNCTUATION: &str = ".,;:!?";

/// Project config file names, in lookup order.
pub const PROJECT_CONFIG_NAMES: &[&str] = &["log-lint.toml", ".log-lint.toml", ".loglinter.json"];

/// Top-level configuration for log-lint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Enables the lowercase-start rule.
    #[serde(default = "default_true")]
    pub check_lowercase: bool,

    /// Enables the english-only rule.
    #[serde(default = "default_true")]
    pub check_english_only: bool,

    /// When true, a firing english-only rule suppresses all other rules
    /// for the same message.
    #[serde(default = "default_true")]
    pub english_only_gate: bool,

    /// Enables the special-chars rule.
    #[serde(default = "default_true")]
    pub check_special_chars: bool,

    /// Enables the sensitive-data rule.
    #[serde(default = "default_true")]
    pub check_sensitive_data: bool,

    /// Keywords for the sensitive-data rule, matched case-insensitively in
    /// list order. An empty list means [`DEFAULT_SENSITIVE_KEYWORDS`].
    #[serde(default = "default_keywords")]
    pub sensitive_keywords: Vec<String>,

    /// Punctuation considered acceptable. Reserved; no rule reads it yet.
    #[serde(default = "default_allowed_punctuation")]
    pub allowed_punctuation: String,

    /// Severity threshold that fails a run (default: warning).
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Per-rule overrides keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            check_lowercase: true,
            check_english_only: true,
            english_only_gate: true,
            check_special_chars: true,
            check_sensitive_data: true,
            sensitive_keywords: default_keywords(),
            allowed_punctuation: default_allowed_punctuation(),
            fail_on: None,
            analyzer: AnalyzerConfig::default(),
            rules: HashMap::new(),
        }
    }
}

impl Config {
    /// Loads configuration from a file. `.json` files are parsed as JSON,
    /// everything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse(&content)
        }
    }

    /// Loads configuration from a file, falling back to defaults.
    ///
    /// A missing, unreadable or malformed file is never fatal: the problem
    /// is logged and [`Config::default`] is returned instead.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    /// Returns the first of [`PROJECT_CONFIG_NAMES`] that exists in `dir`.
    #[must_use]
    pub fn find_project_file(dir: &Path) -> Option<PathBuf> {
        PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads the project config of `dir`, or defaults when it has none.
    /// A broken file falls back to defaults like [`Config::load_or_default`].
    #[must_use]
    pub fn discover(dir: &Path) -> Self {
        match Self::find_project_file(dir) {
            Some(path) => Self::load_or_default(&path),
            None => {
                debug!("No project config in {}", dir.display());
                Self::default()
            }
        }
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Parses configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn parse_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled, combining its `check_*` flag with any
    /// `[rules.<name>] enabled` override.
    #[must_use]
    pub fn is_rule_enabled(&self, rule: RuleId) -> bool {
        let flag = match rule {
            RuleId::LowercaseStart => self.check_lowercase,
            RuleId::EnglishOnly => self.check_english_only,
            RuleId::SpecialChars => self.check_special_chars,
            RuleId::SensitiveData => self.check_sensitive_data,
        };
        flag && self
            .rules
            .get(rule.name())
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Turns a rule on or off.
    pub fn set_rule_enabled(&mut self, rule: RuleId, enabled: bool) {
        let flag = match rule {
            RuleId::LowercaseStart => &mut self.check_lowercase,
            RuleId::EnglishOnly => &mut self.check_english_only,
            RuleId::SpecialChars => &mut self.check_special_chars,
            RuleId::SensitiveData => &mut self.check_sensitive_data,
        };
        *flag = enabled;
    }

    /// Disables every rule not listed in `keep`.
    pub fn restrict_to(&mut self, keep: &[RuleId]) {
        for rule in RuleId::ALL {
            if !keep.contains(&rule) {
                self.set_rule_enabled(rule, false);
            }
        }
    }

    /// Returns the keywords the sensitive-data rule should look for.
    #[must_use]
    pub fn sensitive_keywords(&self) -> Vec<&str> {
        if self.sensitive_keywords.is_empty() {
            DEFAULT_SENSITIVE_KEYWORDS.to_vec()
        } else {
            self.sensitive_keywords.iter().map(String::as_str).collect()
        }
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Severity threshold that fails a run.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Warning)
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,

    /// Number of worker threads for file analysis. `None` or `1` analyzes
    /// files sequentially.
    #[serde(default)]
    pub parallelism: Option<usize>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: vec!["**/target/**".to_string(), "**/vendor/**".to_string()],
            respect_gitignore: true,
            parallelism: None,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

fn default_keywords() -> Vec<String> {
    DEFAULT_SENSITIVE_KEYWORDS
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_allowed_punctuation() -> String {
    DEFAULT_ALLOWED_PUNCTUATION.to_string()
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
