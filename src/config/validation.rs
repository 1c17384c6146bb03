use crate::config::types::{Config, HttpConfig, OutputConfig, RetryConfig, ScraperConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scraper_config(&config.scraper)?;
    validate_retry_config(&config.retry)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates scrape target configuration
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    // The link pattern anchors on the base URL path, so a bare host is not enough
    if url.path() == "/" || url.path().is_empty() {
        return Err(ConfigError::Validation(format!(
            "base-url must include a path segment, got '{}'",
            config.base_url
        )));
    }

    if config.base_url.ends_with('/') {
        return Err(ConfigError::Validation(
            "base-url must not end with a trailing slash".to_string(),
        ));
    }

    if config.risk_levels.is_empty() {
        return Err(ConfigError::Validation(
            "risk-levels cannot be empty".to_string(),
        ));
    }

    if config.max_pages_per_level < 1 {
        return Err(ConfigError::Validation(format!(
            "max-pages-per-level must be >= 1, got {}",
            config.max_pages_per_level
        )));
    }

    Ok(())
}

/// Validates retry configuration
fn validate_retry_config(config: &RetryConfig) -> Result<(), ConfigError> {
    if config.max_attempts < 1 {
        return Err(ConfigError::Validation(format!(
            "max-attempts must be >= 1, got {}",
            config.max_attempts
        )));
    }

    if config.min_backoff_ms == 0 {
        return Err(ConfigError::Validation(
            "min-backoff-ms must be > 0".to_string(),
        ));
    }

    if config.max_backoff_ms < config.min_backoff_ms {
        return Err(ConfigError::Validation(format!(
            "max-backoff-ms ({}) must be >= min-backoff-ms ({})",
            config.max_backoff_ms, config.min_backoff_ms
        )));
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.accept.is_empty() {
        return Err(ConfigError::Validation(
            "accept cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.datasets_dir.is_empty() {
        return Err(ConfigError::Validation(
            "datasets-dir cannot be empty".to_string(),
        ));
    }

    if config.skipped_path.is_empty() {
        return Err(ConfigError::Validation(
            "skipped-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
