use std::path::PathBuf;

use anyhow::{Context, Result};

/// Service configuration loaded from environment variables.
/// Every variable is optional; see `Default` for the fallbacks.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file replacing the built-in role, skill and keyword tables.
    pub reference_data_path: Option<PathBuf>,
    /// Postings longer than this (in characters) are rejected.
    pub max_posting_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            reference_data_path: None,
            max_posting_chars: 50_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            port: match optional_env("PORT") {
                Some(v) => v
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            reference_data_path: optional_env("REFERENCE_DATA_PATH").map(PathBuf::from),
            max_posting_chars: match optional_env("MAX_POSTING_CHARS") {
                Some(v) => v
                    .parse::<usize>()
                    .context("MAX_POSTING_CHARS must be a positive integer")?,
                None => defaults.max_posting_chars,
            },
        };

        anyhow::ensure!(
            config.max_posting_chars > 0,
            "MAX_POSTING_CHARS must be greater than zero"
        );
        Ok(config)
    }
}

/// Reads `key`, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
