use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::session::store::DEFAULT_SESSION_IDLE_TTL;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Transport attempts per LLM call. 1 means a failed call is surfaced immediately.
    pub llm_max_attempts: u32,
    /// Sessions idle longer than this are evicted.
    pub session_idle_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let llm_max_attempts = std::env::var("LLM_MAX_ATTEMPTS")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u32>()
            .context("LLM_MAX_ATTEMPTS must be a positive integer")?;
        if llm_max_attempts == 0 {
            bail!("LLM_MAX_ATTEMPTS must be at least 1");
        }

        let session_idle_ttl_secs = std::env::var("SESSION_IDLE_TTL_SECS")
            .map(|v| v.parse::<u64>())
            .unwrap_or(Ok(DEFAULT_SESSION_IDLE_TTL.as_secs()))
            .context("SESSION_IDLE_TTL_SECS must be a number of seconds")?;
        if session_idle_ttl_secs == 0 {
            bail!("SESSION_IDLE_TTL_SECS must be at least 1");
        }

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            llm_max_attempts,
            session_idle_ttl: Duration::from_secs(session_idle_ttl_secs),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
