use serde::Deserialize;

/// Main configuration structure for fortiscrape
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scraper: ScraperConfig,
    pub retry: RetryConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scraper: ScraperConfig::default(),
            retry: RetryConfig::default(),
            http: HttpConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Scrape target configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Base URL of the encyclopedia listing
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Risk levels to scrape, processed sequentially in this order
    #[serde(rename = "risk-levels")]
    pub risk_levels: Vec<u32>,

    /// Pages fetched per risk level, always the dense range [1, N]
    #[serde(rename = "max-pages-per-level")]
    pub max_pages_per_level: u32,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.fortiguard.com/encyclopedia".to_string(),
            risk_levels: vec![1, 2, 3, 4, 5],
            max_pages_per_level: 10,
        }
    }
}

/// Retry behavior for transient fetch failures
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts per page, including the first
    #[serde(rename = "max-attempts")]
    pub max_attempts: u32,

    /// Delay before the first retry (milliseconds)
    #[serde(rename = "min-backoff-ms")]
    pub min_backoff_ms: u64,

    /// Upper bound on any single retry delay (milliseconds)
    #[serde(rename = "max-backoff-ms")]
    pub max_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            min_backoff_ms: 1_000,
            max_backoff_ms: 10_000,
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Accept header sent with every request
    pub accept: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
                .to_string(),
            accept: "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
                .to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the per-level CSV files are written into
    #[serde(rename = "datasets-dir")]
    pub datasets_dir: String,

    /// Path of the JSON skip log, written once at end of run
    #[serde(rename = "skipped-path")]
    pub skipped_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            datasets_dir: "./datasets".to_string(),
            skipped_path: "./datasets/skipped.json".to_string(),
        }
    }
}
