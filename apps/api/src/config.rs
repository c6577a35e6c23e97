use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::recommendation::engine::DEFAULT_RECOMMENDATION_LIMIT;

/// Application configuration loaded from environment variables.
/// Every variable is optional; see `Default` for fallbacks.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Redis connection URL for saved searches. None ⇒ in-memory store.
    pub redis_url: Option<String>,
    /// JSON array of postings. None ⇒ built-in sample postings.
    pub postings_path: Option<PathBuf>,
    pub recommendation_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            redis_url: None,
            postings_path: None,
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let recommendation_limit = match optional_env("RECOMMENDATION_LIMIT") {
            Some(raw) => raw
                .parse::<usize>()
                .context("RECOMMENDATION_LIMIT must be a positive integer")?,
            None => defaults.recommendation_limit,
        };
        if recommendation_limit == 0 {
            bail!("RECOMMENDATION_LIMIT must be greater than zero");
        }

        Ok(Config {
            port: match optional_env("PORT") {
                Some(raw) => raw
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            redis_url: optional_env("REDIS_URL"),
            postings_path: optional_env("POSTINGS_PATH").map(PathBuf::from),
            recommendation_limit,
        })
    }
}

/// Reads an env var, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
