use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// File name looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "cutrelease.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".cutrelease.toml";

/// Represents the complete configuration for cut-release.
///
/// Every section is optional; missing keys fall back to the defaults used by
/// an npm project living in a git repository with an `origin` remote.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub git: GitConfig,

    #[serde(default)]
    pub exec: ExecConfig,

    #[serde(default)]
    pub update: UpdateConfig,
}

fn default_client() -> String {
    "npm".to_string()
}

fn default_tag() -> String {
    "latest".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_max_output_bytes() -> usize {
    1024 * 1024
}

fn default_true() -> bool {
    true
}

fn default_update_package() -> String {
    env!("CARGO_PKG_NAME").to_string()
}

fn default_timeout_secs() -> u64 {
    3
}

/// Package registry settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Registry client program used for bumping, querying and publishing
    #[serde(default = "default_client")]
    pub client: String,

    /// Distribution tag used when none is chosen explicitly
    #[serde(default = "default_tag")]
    pub default_tag: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            client: default_client(),
            default_tag: default_tag(),
        }
    }
}

/// Version control settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GitConfig {
    #[serde(default = "default_remote")]
    pub remote: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        GitConfig {
            remote: default_remote(),
        }
    }
}

/// Limits applied to every external command.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExecConfig {
    /// Combined stdout or stderr larger than this is treated as a failure
    #[serde(default = "default_max_output_bytes")]
    pub max_output_bytes: usize,
}

impl Default for ExecConfig {
    fn default() -> Self {
        ExecConfig {
            max_output_bytes: default_max_output_bytes(),
        }
    }
}

/// Self-update check settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UpdateConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Name this tool is published under
    #[serde(default = "default_update_package")]
    pub package: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        UpdateConfig {
            enabled: true,
            package: default_update_package(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `cutrelease.toml` in the project directory
/// 3. `.cutrelease.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>, project_dir: &Path) -> Result<Config> {
    let local = project_dir.join(LOCAL_CONFIG_FILE);

    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if local.exists() {
        fs::read_to_string(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}

/// Parses a TOML document into a [`Config`].
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    Ok(config)
}
