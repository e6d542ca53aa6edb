use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::monitoring::matcher::MatchMode;
use crate::similarity::fetch::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::similarity::DEFAULT_THRESHOLD;

/// Central configuration loaded from environment variables.
///
/// Every value has a default, so an empty environment works. The .env file
/// is loaded automatically at startup via dotenvy. Command-line flags take
/// precedence over anything set here.
pub struct Config {
    /// Similarity threshold (0-100) for a `Matched` verdict
    pub similarity_threshold: f64,
    /// Timeout for each candidate article fetch
    pub fetch_timeout: Duration,
    pub user_agent: String,
    pub match_mode: MatchMode,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let similarity_threshold = match env::var("COVERAGE_SIMILARITY_THRESHOLD") {
            Ok(raw) => raw.trim().parse::<f64>().with_context(|| {
                format!("COVERAGE_SIMILARITY_THRESHOLD is not a number: {raw}")
            })?,
            Err(_) => DEFAULT_THRESHOLD,
        };

        let fetch_timeout = match env::var("COVERAGE_FETCH_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(raw.trim().parse::<u64>().with_context(|| {
                format!("COVERAGE_FETCH_TIMEOUT_SECS is not a whole number: {raw}")
            })?),
            Err(_) => DEFAULT_TIMEOUT,
        };

        let match_mode = match env::var("COVERAGE_MATCH_MODE").as_deref() {
            Ok("exact") => MatchMode::Exact,
            // "containment" or unset both default to containment
            _ => MatchMode::Containment,
        };

        Ok(Self {
            similarity_threshold,
            fetch_timeout,
            user_agent: env::var("COVERAGE_USER_AGENT")
                .unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string()),
            match_mode,
        })
    }

    /// Check that the similarity threshold is on the 0-100 scale.
    ///
    /// Not part of `load()`: a `--threshold` flag may still replace the
    /// configured value, and runs without scoring never use it.
    pub fn require_valid_threshold(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.similarity_threshold) {
            anyhow::bail!(
                "Similarity threshold must be between 0 and 100, got {}.\n\
                 Fix COVERAGE_SIMILARITY_THRESHOLD in your .env file or pass --threshold.",
                self.similarity_threshold
            );
        }
        Ok(())
    }
}
