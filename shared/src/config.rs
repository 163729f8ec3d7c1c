//! Configuration management for Lambda functions.

use std::env;

/// Shared-cache lifetime used when `CACHE_MAX_AGE` is unset (2 days).
const DEFAULT_CACHE_MAX_AGE: u64 = 172_800;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream time-service
    pub api_url: String,
    /// Shared secret sent as the `x-parola` header
    pub api_pass: String,
    /// `s-maxage` value for successful responses, in seconds
    pub cache_max_age: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            api_url: env::var("API_URL")?,
            api_pass: env::var("API_PASS")?,
            cache_max_age: env::var("CACHE_MAX_AGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_MAX_AGE),
        })
    }
}
