//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper, including:
//! - Building the HTTP client with the configured headers and timeout
//! - Deterministic listing-page URL construction
//! - GET requests with bounded retry and exponential backoff
//!
//! The fetcher performs network I/O only. On exhausted retries it returns a
//! [`FetchFailure`] describing the page; recording that failure in the skip
//! log is the caller's responsibility, which keeps this module free of
//! shared state and independently testable.

use crate::config::HttpConfig;
use crate::scraper::retry::RetryPolicy;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;
use std::time::Duration;

/// A page fetch that failed on every allowed attempt
#[derive(Debug, Clone)]
pub struct FetchFailure {
    /// Risk level the page belongs to
    pub level: u32,
    /// Page number within the level
    pub page: u32,
    /// Attempts made before giving up
    pub attempts: u32,
    /// Description of the last error
    pub error: String,
}

/// Builds an HTTP client with the configured user agent, Accept header and
/// request timeout
///
/// # Arguments
///
/// * `config` - The HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    if let Ok(accept) = HeaderValue::from_str(&config.accept) {
        headers.insert(ACCEPT, accept);
    }

    Client::builder()
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Builds the listing URL for one (level, page) pair
pub fn page_url(base_url: &str, level: u32, page: u32) -> String {
    format!("{}?type=ips&risk={}&page={}", base_url, level, page)
}

/// Fetches one listing page, retrying transient failures with backoff
///
/// Transport errors and non-2xx statuses are both treated as transient and
/// retried until the policy's attempt cap, with the delay between attempts
/// growing per [`RetryPolicy::backoff_delay`]. Each retry is independent of
/// prior ones; no state is carried beyond the attempt counter.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `base_url` - Base URL of the encyclopedia listing
/// * `policy` - Retry policy governing attempts and delays
/// * `level` - Risk level to request
/// * `page` - Page number to request
///
/// # Returns
///
/// * `Ok(String)` - Raw page body from the first successful attempt
/// * `Err(FetchFailure)` - Every allowed attempt failed
pub async fn fetch_page(
    client: &Client,
    base_url: &str,
    policy: &RetryPolicy,
    level: u32,
    page: u32,
) -> Result<String, FetchFailure> {
    let url = page_url(base_url, level, page);
    let mut attempt = 1;

    loop {
        match try_fetch(client, &url).await {
            Ok(body) => return Ok(body),
            Err(error) => {
                if !policy.should_retry(attempt) {
                    tracing::error!(
                        "Giving up on {} after {} attempts: {}",
                        url,
                        attempt,
                        error
                    );
                    return Err(FetchFailure {
                        level,
                        page,
                        attempts: attempt,
                        error,
                    });
                }

                let delay = policy.backoff_delay(attempt);
                tracing::warn!(
                    "Error fetching {} (attempt {}): {}; retrying in {:?}",
                    url,
                    attempt,
                    error,
                    delay
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}

/// Issues a single GET and returns the body, treating non-2xx as an error
async fn try_fetch(client: &Client, url: &str) -> Result<String, String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let response = response.error_for_status().map_err(|e| e.to_string())?;

    response.text().await.map_err(|e| e.to_string())
}
