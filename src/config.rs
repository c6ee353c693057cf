//! Process configuration.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (REPURPOSE_MODEL, REPURPOSE_BIND), including
//!    values loaded from a `.env` file in the current directory
//! 2. Config file (.repurpose/config.yaml)
//! 3. Defaults
//!
//! Config file discovery:
//! - Searches current directory and parents for .repurpose/config.yaml
//! - Falls back to <user config dir>/repurpose/config.yaml
//!
//! The two API keys (OPENAI_API_KEY, TAVILY_API_KEY) come from the
//! environment only. Missing keys are a startup error.

use std::fmt;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::adapters::{openai, tavily};
use crate::core::DerivativeMode;

pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const TAVILY_API_KEY_VAR: &str = "TAVILY_API_KEY";
pub const MODEL_VAR: &str = "REPURPOSE_MODEL";
pub const BIND_VAR: &str = "REPURPOSE_BIND";

pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Startup-time configuration failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not set (add it to the environment or a .env file)")]
    MissingSecret { var: &'static str },

    #[error("failed to read config file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelConfig {
    /// Chat model name
    pub name: Option<String>,
    /// OpenAI-compatible API base URL
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    /// Tavily API base URL
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineConfig {
    pub derivatives: Option<DerivativeMode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    /// Address for the web form
    pub bind: Option<String>,
}

/// API credentials. Never printed.
#[derive(Clone)]
pub struct Secrets {
    pub openai_api_key: String,
    pub tavily_api_key: String,
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("openai_api_key", &"<redacted>")
            .field("tavily_api_key", &"<redacted>")
            .finish()
    }
}

/// Fully resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub model: String,
    pub model_base_url: String,
    pub search_base_url: String,
    pub derivatives: DerivativeMode,
    pub bind: SocketAddr,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    pub secrets: Secrets,
}

/// Load `.env` from the current directory (or a parent) into the process
/// environment.
///
/// Call before logging is initialised so `RUST_LOG` can come from the file.
/// Returns the loaded path, or `None` when there is no file. Variables
/// already set in the environment are not overridden.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    missing_is_none(dotenvy::dotenv())
}

/// Load a specific env file into the process environment
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>, dotenvy::Error> {
    missing_is_none(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn missing_is_none(result: dotenvy::Result<PathBuf>) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Read an optional setting, treating a blank value as unset
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Search `start` and its parents for .repurpose/config.yaml
fn find_config_file_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let config_path = current.join(".repurpose").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

fn find_config_file() -> Option<PathBuf> {
    if let Some(found) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_file_from(&cwd))
    {
        return Some(found);
    }

    dirs::config_dir()
        .map(|dir| dir.join("repurpose").join("config.yaml"))
        .filter(|path| path.exists())
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&content).map_err(|source| ConfigError::ParseFile {
        path: path.to_path_buf(),
        source,
    })
}

fn require_secret<F>(env: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    env(var)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::MissingSecret { var })
}

/// Combine the config file, environment lookups, and defaults
fn resolve<F>(
    config_file: Option<PathBuf>,
    file: ConfigFile,
    env: F,
) -> Result<ResolvedConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let secrets = Secrets {
        openai_api_key: require_secret(&env, OPENAI_API_KEY_VAR)?,
        tavily_api_key: require_secret(&env, TAVILY_API_KEY_VAR)?,
    };

    let model = non_blank(env(MODEL_VAR))
        .or(non_blank(file.model.name))
        .unwrap_or_else(|| openai::DEFAULT_MODEL.to_string());

    let bind_str = non_blank(env(BIND_VAR))
        .or(non_blank(file.server.bind))
        .unwrap_or_else(|| DEFAULT_BIND.to_string());
    let bind = bind_str
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidValue {
            key: "server.bind",
            reason: format!("'{}': {}", bind_str, e),
        })?;

    Ok(ResolvedConfig {
        model,
        model_base_url: non_blank(file.model.base_url)
            .unwrap_or_else(|| openai::DEFAULT_BASE_URL.to_string()),
        search_base_url: non_blank(file.search.base_url)
            .unwrap_or_else(|| tavily::DEFAULT_BASE_URL.to_string()),
        derivatives: file.pipeline.derivatives.unwrap_or_default(),
        bind,
        config_file,
        secrets,
    })
}

/// Load configuration from all sources.
///
/// Call once at startup, after [`load_dotenv`]; pass the result to whatever
/// needs it.
pub fn load() -> Result<ResolvedConfig, ConfigError> {
    let config_file = find_config_file();
    let file = match config_file {
        Some(ref path) => {
            debug!(path = %path.display(), "Using config file");
            load_config_file(path)?
        }
        None => ConfigFile::default(),
    };

    resolve(config_file, file, |key| std::env::var(key).ok())
}
