//! Configuration management module
//!
//! Handles loading, validation, and management of application configuration.
//!
//! Precedence, lowest first: built-in defaults, the config file, `TM_*`
//! environment variables, command line flags.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use crate::session::{PredefinedEntry, SmartDirectoryRoot};

/// Environment variable enabling debug output
pub const ENV_DEBUG: &str = "TM_DEBUG";
/// Environment variable pointing at the tmux binary
pub const ENV_TMUX_PATH: &str = "TM_TMUX_PATH";
/// Environment variable pointing at the config file
pub const ENV_CONFIG_PATH: &str = "TM_CONFIG_PATH";

/// Immutable runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Resolved path to the tmux binary
    pub tmux_path: PathBuf,

    /// Sessions with a fixed directory and optional aliases
    pub sessions: Vec<PredefinedEntry>,

    /// Roots whose subdirectories become sessions of the same name
    pub smart_directories: Vec<SmartDirectoryRoot>,
}

/// Contents of the config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub smart_directories: Vec<SmartDirectoryRoot>,
    pub sessions: Vec<PredefinedEntry>,
}

/// Values taken from `TM_*` environment variables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvOverrides {
    pub debug: Option<bool>,
    pub tmux_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
}

impl EnvOverrides {
    /// Read overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read overrides through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            // TM_DEBUG - anything truthy turns debugging on
            debug: non_empty(ENV_DEBUG).map(|value| parse_flag(&value)),
            // TM_TMUX_PATH - explicit tmux binary
            tmux_path: non_empty(ENV_TMUX_PATH).map(PathBuf::from),
            // TM_CONFIG_PATH - alternative config file
            config_path: non_empty(ENV_CONFIG_PATH).map(PathBuf::from),
        }
    }

    pub fn debug_enabled(&self) -> bool {
        self.debug.unwrap_or(false)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl FileConfig {
    /// Parse config file contents, choosing the format by file extension
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else {
            // YAML null documents (comments only) mean "nothing configured"
            let parsed: Option<Self> = serde_yaml::from_str(content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            Ok(parsed.unwrap_or_default())
        }
    }

    /// Load a config file.
    ///
    /// A missing file is created empty when `create_missing` is set (the
    /// default location) and is an error otherwise.
    pub fn load(path: &Path, create_missing: bool) -> Result<Self> {
        if !path.exists() {
            if !create_missing {
                anyhow::bail!("Config file does not exist: {}", path.display());
            }

            Self::create_empty(path)?;
            tracing::info!("Created empty config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content, path)
    }

    fn create_empty(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        std::fs::write(path, "")
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

/// Default config file location, `~/.config/tm/config.yaml`
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(".config").join("tm").join("config.yaml"))
}

/// Locate the tmux binary: an explicit path must exist, otherwise search `PATH`
pub fn resolve_tmux_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("tmux path does not exist: {}", path.display());
            }
            Ok(path.to_path_buf())
        }
        None => which::which("tmux").context("tmux not found in PATH"),
    }
}

impl Config {
    /// Load configuration from the environment and config file
    ///
    /// `cli_config` comes from the command line and wins over `TM_CONFIG_PATH`.
    /// Debug output is handled through the log level, not stored here.
    pub fn load(cli_config: Option<&Path>, overrides: &EnvOverrides) -> Result<Self> {
        let explicit = cli_config
            .map(Path::to_path_buf)
            .or_else(|| overrides.config_path.clone());

        let file = match explicit {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                FileConfig::load(&path, false)?
            }
            None => {
                let path = default_config_path()?;
                tracing::debug!("Loading configuration from {}", path.display());
                FileConfig::load(&path, true)?
            }
        };
        let tmux_path = resolve_tmux_path(overrides.tmux_path.as_deref())?;

        let config = Self::from_parts(file, tmux_path);
        config.validate()?;
        Ok(config)
    }

    /// Assemble a configuration from already loaded pieces
    pub fn from_parts(file: FileConfig, tmux_path: PathBuf) -> Self {
        Self {
            tmux_path,
            sessions: file.sessions,
            smart_directories: file.smart_directories,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for entry in &self.sessions {
            if entry.name.trim().is_empty() {
                anyhow::bail!(
                    "Predefined session with directory {} has an empty name",
                    entry.directory.display()
                );
            }

            if entry.aliases.iter().any(|alias| alias.trim().is_empty()) {
                anyhow::bail!("Predefined session {} has an empty alias", entry.name);
            }
        }

        for smart in &self.smart_directories {
            if smart.root.as_os_str().is_empty() {
                anyhow::bail!("Smart directory entries must not be empty");
            }
        }

        Ok(())
    }
}
