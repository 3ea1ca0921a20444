//! Top-level eta configuration with layered resolution.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{
    CacheConfig, ObservabilityConfig, PollerConfig, PredictionConfig, ServerConfig,
    SourceConfig, SourceKind, StorageConfig,
};
use crate::errors::ConfigError;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "eta.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ETA_*`, plus `PORT`)
/// 3. Config file (`--config` path, else `eta.toml` in `root`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EtaConfig {
    pub source: SourceConfig,
    pub storage: StorageConfig,
    pub poller: PollerConfig,
    pub prediction: PredictionConfig,
    pub cache: CacheConfig,
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Explicit config file; must exist when given.
    pub config_path: Option<PathBuf>,
    pub source_kind: Option<SourceKind>,
    pub source_url: Option<String>,
    pub history_path: Option<PathBuf>,
    pub port: Option<u16>,
    pub poll_interval_secs: Option<u64>,
    pub disable_poller: bool,
    pub strict: bool,
}

impl EtaConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let explicit = cli_overrides.and_then(|c| c.config_path.clone());

        // Layer 3: config file
        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None => {
                let default_path = root.join(CONFIG_FILENAME);
                if default_path.exists() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &EtaConfig) -> Result<(), ConfigError> {
        fn fail(field: &str, message: &str) -> Result<(), ConfigError> {
            Err(ConfigError::ValidationFailed {
                field: field.to_string(),
                message: message.to_string(),
            })
        }

        if config.source.active_url().trim().is_empty() {
            return fail("source.url", "must not be empty");
        }
        if config.source.timeout_secs == 0 {
            return fail("source.timeout_secs", "must be greater than 0");
        }
        if config.storage.history_path.as_os_str().is_empty() {
            return fail("storage.history_path", "must not be empty");
        }
        if config.poller.interval_secs == 0 {
            return fail("poller.interval_secs", "must be greater than 0");
        }
        if config.prediction.window < crate::constants::MIN_REGRESSION_POINTS {
            return fail("prediction.window", "must be at least 2");
        }
        if !config.prediction.target_value.is_finite() {
            return fail("prediction.target_value", "must be a finite number");
        }
        if config.cache.ttl_secs == 0 {
            return fail("cache.ttl_secs", "must be greater than 0");
        }
        Ok(())
    }

    fn apply_env_overrides(config: &mut EtaConfig) -> Result<(), ConfigError> {
        // Kind first so ETA_SOURCE_URL lands on the selected source.
        if let Some(kind) = env_parse::<SourceKind>("ETA_SOURCE_KIND")? {
            config.source.kind = kind;
        }
        if let Ok(val) = std::env::var("ETA_SOURCE_URL") {
            config.source.set_active_url(val);
        }
        if let Some(v) = env_parse::<u64>("ETA_SOURCE_TIMEOUT_SECS")? {
            config.source.timeout_secs = v;
        }
        if let Ok(val) = std::env::var("ETA_HISTORY_PATH") {
            config.storage.history_path = PathBuf::from(val);
        }
        if let Some(v) = env_parse::<bool>("ETA_STORAGE_STRICT")? {
            config.storage.strict = v;
        }
        if let Some(v) = env_parse::<u64>("ETA_POLL_INTERVAL_SECS")? {
            config.poller.interval_secs = v;
        }
        if let Some(v) = env_parse::<bool>("ETA_POLLER_ENABLED")? {
            config.poller.enabled = v;
        }
        if let Some(v) = env_parse::<bool>("ETA_POLLER_RESUME_CURSOR")? {
            config.poller.resume_cursor = v;
        }
        if let Some(v) = env_parse::<usize>("ETA_PREDICTION_WINDOW")? {
            config.prediction.window = v;
        }
        if let Some(v) = env_parse::<f64>("ETA_PREDICTION_TARGET")? {
            config.prediction.target_value = v;
        }
        if let Some(v) = env_parse::<u64>("ETA_CACHE_TTL_SECS")? {
            config.cache.ttl_secs = v;
        }
        if let Ok(val) = std::env::var("ETA_HOST") {
            config.server.host = val;
        }
        if let Some(v) = env_parse::<u16>("PORT")? {
            config.server.port = v;
        }
        if let Ok(val) = std::env::var("ETA_LOG_LEVEL") {
            config.observability.log_level = val;
        }
        Ok(())
    }

    fn apply_cli_overrides(config: &mut EtaConfig, cli: &CliOverrides) {
        if let Some(kind) = cli.source_kind {
            config.source.kind = kind;
        }
        if let Some(ref url) = cli.source_url {
            config.source.set_active_url(url.clone());
        }
        if let Some(ref path) = cli.history_path {
            config.storage.history_path = path.clone();
        }
        if let Some(port) = cli.port {
            config.server.port = port;
        }
        if let Some(secs) = cli.poll_interval_secs {
            config.poller.interval_secs = secs;
        }
        if cli.disable_poller {
            config.poller.enabled = false;
        }
        if cli.strict {
            config.storage.strict = true;
        }
    }
}

/// Parse an environment variable, treating "unset" as `None` and a value
/// that fails to parse as an error.
fn env_parse<T: FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                field: key.to_string(),
                message: format!("cannot parse {val:?}"),
            }),
        Err(_) => Ok(None),
    }
}
