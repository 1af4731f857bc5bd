use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    /// Riot API key sent with every request. Never logged.
    #[serde(default)]
    pub api_key: String,
    /// Platform host (summoner, league, mastery). Should include the scheme.
    #[serde(default = "default_platform_domain")]
    pub platform_domain: String,
    /// Regional host (account, match). Should include the scheme.
    #[serde(default = "default_regional_domain")]
    pub regional_domain: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_seconds: u64,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    /// Total attempts per request, the first one included.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,
    /// Recent match ids requested per player lookup.
    #[serde(default = "default_match_count")]
    pub match_count: u32,
    /// How many of the recent matches get expanded into full detail.
    #[serde(default = "default_match_detail_limit")]
    pub match_detail_limit: usize,
    #[serde(default = "default_match_concurrency")]
    pub match_concurrency: usize,
    #[serde(default = "default_pipeline_timeout")]
    pub pipeline_timeout_seconds: u64,
}

fn default_platform_domain() -> String {
    constants::routing::DEFAULT_PLATFORM_DOMAIN.to_string()
}

fn default_regional_domain() -> String {
    constants::routing::DEFAULT_REGIONAL_DOMAIN.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_cache_ttl() -> u64 {
    constants::cache::TTL_SECONDS
}

fn default_cache_capacity() -> usize {
    constants::cache::CAPACITY
}

fn default_max_attempts() -> u32 {
    constants::retry::MAX_ATTEMPTS
}

fn default_backoff_base_ms() -> u64 {
    constants::retry::BASE_DELAY_MS
}

fn default_match_count() -> u32 {
    constants::pipeline::MATCH_COUNT
}

fn default_match_detail_limit() -> usize {
    constants::pipeline::MATCH_DETAIL_LIMIT
}

fn default_match_concurrency() -> usize {
    constants::pipeline::MATCH_CONCURRENCY
}

fn default_pipeline_timeout() -> u64 {
    constants::pipeline::TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            platform_domain: default_platform_domain(),
            regional_domain: default_regional_domain(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            cache_ttl_seconds: default_cache_ttl(),
            cache_capacity: default_cache_capacity(),
            max_attempts: default_max_attempts(),
            backoff_base_ms: default_backoff_base_ms(),
            match_count: default_match_count(),
            match_detail_limit: default_match_detail_limit(),
            match_concurrency: default_match_concurrency(),
            pipeline_timeout_seconds: default_pipeline_timeout(),
        }
    }
}

// The key must not leak through `{:?}` in logs or panics.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &mask_api_key(&self.api_key))
            .field("platform_domain", &self.platform_domain)
            .field("regional_domain", &self.regional_domain)
            .field("log_file_path", &self.log_file_path)
            .field("http_timeout_seconds", &self.http_timeout_seconds)
            .field("cache_ttl_seconds", &self.cache_ttl_seconds)
            .field("cache_capacity", &self.cache_capacity)
            .field("max_attempts", &self.max_attempts)
            .field("backoff_base_ms", &self.backoff_base_ms)
            .field("match_count", &self.match_count)
            .field("match_detail_limit", &self.match_detail_limit)
            .field("match_concurrency", &self.match_concurrency)
            .field("pipeline_timeout_seconds", &self.pipeline_timeout_seconds)
            .finish()
    }
}

/// Renders an API key safe for display: only the last four characters of a
/// longer key survive, a key of four characters or fewer is hidden entirely.
pub fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return "<not set>".to_string();
    }
    if key.chars().count() <= 4 {
        return "****".to_string();
    }
    let visible: String = key
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("****{visible}")
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `RIOT_API_KEY` - Override API key
    /// - `RIFTSTATS_PLATFORM_DOMAIN` - Override platform host
    /// - `RIFTSTATS_REGIONAL_DOMAIN` - Override regional host
    /// - `RIFTSTATS_LOG_FILE` - Override log file path
    /// - `RIFTSTATS_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded and validated configuration
    /// * `Err(AppError)` - Unreadable file, or validation failed (e.g. no API key)
    pub async fn load() -> Result<Self, AppError> {
        Self::load_with_overrides(&get_config_path()).await
    }

    /// Same as [`Config::load`] but reads the file at `path`.
    /// A missing file is not an error; defaults plus environment are used.
    pub async fn load_with_overrides(path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(path).exists() {
            Self::load_from_path(path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.api_key = api_key.trim().to_string();
        }

        if let Ok(domain) = std::env::var(env_vars::PLATFORM_DOMAIN) {
            self.platform_domain = domain;
        }

        if let Ok(domain) = std::env::var(env_vars::REGIONAL_DOMAIN) {
            self.regional_domain = domain;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Freshness window of the response cache
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Base delay of the retry backoff
    pub fn backoff_base(&self) -> Duration {
        Duration::from_millis(self.backoff_base_ms)
    }

    /// Ceiling on a whole player lookup
    pub fn pipeline_timeout(&self) -> Duration {
        Duration::from_secs(self.pipeline_timeout_seconds)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// The API key is masked. A missing config file is reported, not treated
    /// as an error.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let mut config = Config::load_from_path(&config_path).await?;
            config.apply_env_overrides();
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Key:");
            println!("{}", mask_api_key(&config.api_key));
            println!("────────────────────────────────────");
            println!("Platform / Regional Host:");
            println!("{}", config.platform_domain);
            println!("{}", config.regional_domain);
            println!("────────────────────────────────────");
            println!("HTTP Timeout / Cache TTL:");
            println!(
                "{} seconds / {} seconds",
                config.http_timeout_seconds, config.cache_ttl_seconds
            );
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/riftstats.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and strips trailing
    /// slashes from the hosts so URL building stays uniform.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let mut normalized = self.clone();
        normalized.platform_domain = self.platform_domain.trim_end_matches('/').to_string();
        normalized.regional_domain = self.regional_domain.trim_end_matches('/').to_string();

        let content = toml::to_string_pretty(&normalized)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path without environment
    /// overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
