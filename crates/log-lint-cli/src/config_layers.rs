//! Config lookup for the CLI.
//!
//! Project discovery lives in `log-lint-core` ([`Config::find_project_file`]);
//! this module puts the `--config` flag in front of it and the global config
//! directory behind it:
//!
//! 1. `--config <path>`
//! 2. project files (`log-lint.toml`, `.log-lint.toml`, `.loglinter.json`)
//! 3. `$LOG_LINT_CONFIG_DIR/config.toml`, else `~/.log-lint/config.toml`
//! 4. defaults

use log_lint_core::Config;
use std::path::{Path, PathBuf};

const CONFIG_DIR_ENV: &str = "LOG_LINT_CONFIG_DIR";
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// The layer that supplied the config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layer {
    /// `--config` flag. Not checked for existence.
    Flag(PathBuf),
    /// Project config file.
    Project(PathBuf),
    /// Global config file.
    Global(PathBuf),
    /// Nothing found.
    Defaults,
}

/// A loaded config and the layer it came from.
#[derive(Debug)]
pub struct LayeredConfig {
    /// The loaded config.
    pub config: Config,
    /// Where it came from.
    pub layer: Layer,
}

/// Loads the config for a run over `project_dir`.
#[must_use]
pub fn load(project_dir: &Path, flag: Option<&Path>) -> LayeredConfig {
    load_layers(project_dir, flag, global_config_file())
}

/// Takes the global file as a parameter so tests never touch the env.
fn load_layers(
    project_dir: &Path,
    flag: Option<&Path>,
    global: Option<PathBuf>,
) -> LayeredConfig {
    let layer = if let Some(path) = flag {
        Layer::Flag(path.to_path_buf())
    } else if let Some(path) = Config::find_project_file(project_dir) {
        Layer::Project(path)
    } else if let Some(path) = global.filter(|path| path.is_file()) {
        Layer::Global(path)
    } else {
        Layer::Defaults
    };

    let config = match &layer {
        Layer::Flag(path) | Layer::Project(path) | Layer::Global(path) => {
            tracing::debug!("Config layer: {layer:?}");
            Config::load_or_default(path)
        }
        Layer::Defaults => Config::default(),
    };

    LayeredConfig { config, layer }
}

fn global_config_file() -> Option<PathBuf> {
    std::env::var_os(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".log-lint")))
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
}
