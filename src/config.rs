//! Service configuration
//!
//! Read from a TOML file (`TURTLE_SOUP_CONFIG`, default `config.toml`),
//! then overridden by `TURTLE_SOUP_*` environment variables. A missing file
//! means defaults.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_PATH_VAR: &str = "TURTLE_SOUP_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid value {value:?} for {name}")]
    InvalidEnv { name: &'static str, value: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub plugin: PluginConfig,
    pub llm: LlmConfig,
    pub server: ServerConfig,
}

/// Game command settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    pub enabled: bool,
    pub command_prefix: String,
    /// Whether `<prefix> <unrecognized text>` starts a new game
    pub unknown_action_starts_game: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command_prefix: "/hgt".to_string(),
            unknown_action_starts_game: true,
        }
    }
}

/// Collaborator endpoint settings
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.siliconflow.cn/v1/chat/completions".to_string(),
            api_key: String::new(),
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 500,
            timeout_secs: 30,
        }
    }
}

impl LlmConfig {
    /// URL and key are both required for any command to run
    pub fn is_complete(&self) -> bool {
        !self.api_url.trim().is_empty() && !self.api_key.trim().is_empty()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// Keep the key out of logs
impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &if self.api_key.is_empty() { "" } else { "<redacted>" })
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Config {
    /// File named by `TURTLE_SOUP_CONFIG` plus environment overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::load(Path::new(&path))?;
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Load a TOML file; a missing file yields defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `TURTLE_SOUP_*` overrides from `lookup`
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(v) = lookup("TURTLE_SOUP_API_URL") {
            self.llm.api_url = v;
        }
        if let Some(v) = lookup("TURTLE_SOUP_API_KEY") {
            self.llm.api_key = v;
        }
        if let Some(v) = lookup("TURTLE_SOUP_MODEL") {
            self.llm.model = v;
        }
        if let Some(v) = lookup("TURTLE_SOUP_PREFIX") {
            self.plugin.command_prefix = v;
        }
        if let Some(v) = lookup("TURTLE_SOUP_TEMPERATURE") {
            self.llm.temperature = parse_env("TURTLE_SOUP_TEMPERATURE", v)?;
        }
        if let Some(v) = lookup("TURTLE_SOUP_ENABLED") {
            self.plugin.enabled = parse_env("TURTLE_SOUP_ENABLED", v)?;
        }
        if let Some(v) = lookup("TURTLE_SOUP_PORT") {
            self.server.port = parse_env("TURTLE_SOUP_PORT", v)?;
        }
        Ok(())
    }
}

fn parse_env<T: FromStr>(name: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { name, value })
}
