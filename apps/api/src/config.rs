use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default: the service needs no external collaborators.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Countdown length for a mock-interview session.
    pub interview_duration_secs: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            interview_duration_secs: std::env::var("INTERVIEW_DURATION_SECS")
                .unwrap_or_else(|_| {
                    crate::interview::questions::INTERVIEW_DURATION_SECS.to_string()
                })
                .parse::<u32>()
                .context("INTERVIEW_DURATION_SECS must be a number of seconds")?,
        })
    }
}
