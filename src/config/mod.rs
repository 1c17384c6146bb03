//! Configuration module for fortiscrape
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every section is optional; the defaults reproduce the scraper's
//! standard constants (FortiGuard base URL, risk levels 1-5, 10 pages per
//! level, 3 attempts with 1s-10s backoff, 30s timeout).
//!
//! # Example
//!
//! ```no_run
//! use fortiscrape::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Scraping {} risk levels", config.scraper.risk_levels.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, OutputConfig, RetryConfig, ScraperConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
