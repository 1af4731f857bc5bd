use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API key cannot be empty; lookups are never served from canned data
/// - Both hosts must be `http://` or `https://` URLs
/// - Attempt count, limits and timeouts must be non-zero
/// - If log file path is provided, it cannot be empty and its parent must be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if config.api_key.trim().is_empty() {
        return Err(AppError::config_error(
            "Riot API key is not configured (set RIOT_API_KEY or run with --set-api-key)",
        ));
    }

    validate_domain("platform_domain", &config.platform_domain)?;
    validate_domain("regional_domain", &config.regional_domain)?;

    if config.max_attempts == 0 {
        return Err(AppError::config_error("max_attempts must be at least 1"));
    }
    if config.match_detail_limit == 0 || config.match_concurrency == 0 {
        return Err(AppError::config_error(
            "match_detail_limit and match_concurrency must be at least 1",
        ));
    }
    if config.http_timeout_seconds == 0 || config.pipeline_timeout_seconds == 0 {
        return Err(AppError::config_error("timeouts must be at least 1 second"));
    }
    if config.cache_capacity == 0 {
        return Err(AppError::config_error("cache_capacity must be at least 1"));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_domain(field: &str, domain: &str) -> Result<(), AppError> {
    if domain.is_empty() {
        return Err(AppError::config_error(format!("{field} cannot be empty")));
    }
    if !domain.starts_with("http://") && !domain.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{field} must start with http:// or https:// (got '{domain}')"
        )));
    }
    Ok(())
}
