//! Process configuration.
//!
//! The engine itself is configured in code (graph, store, router); the only
//! environment-driven settings belong to the chat deployment — the bot
//! token a concrete transport needs and the long-poll timeout. `.env`
//! files are honored for local development.

use miette::Diagnostic;
use std::time::Duration;
use thiserror::Error;

/// Startup configuration failures. These abort the process before any
/// session exists.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("bot token is not set (expected env var SURVEYGRAPH_BOT_TOKEN)")]
    #[diagnostic(
        code(surveygraph::config::missing_token),
        help("export SURVEYGRAPH_BOT_TOKEN or put it in a .env file")
    )]
    MissingToken,

    #[error("invalid poll timeout '{value}' (expected seconds as an integer)")]
    #[diagnostic(code(surveygraph::config::invalid_poll_timeout))]
    InvalidPollTimeout { value: String },
}

/// Settings a chat deployment reads from the environment.
#[derive(Clone, Debug)]
pub struct BotConfig {
    /// Token the concrete chat transport authenticates with.
    pub token: String,
    /// Long-poll timeout for transports that poll for updates.
    pub poll_timeout: Duration,
}

impl BotConfig {
    pub const TOKEN_VAR: &'static str = "SURVEYGRAPH_BOT_TOKEN";
    pub const POLL_TIMEOUT_VAR: &'static str = "SURVEYGRAPH_POLL_TIMEOUT_SECS";
    pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(60);

    /// Load configuration from the environment (and `.env`, if present).
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingToken`] when the token variable is unset or
    /// empty; [`ConfigError::InvalidPollTimeout`] when the timeout variable
    /// is present but not an integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let token = std::env::var(Self::TOKEN_VAR)
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let poll_timeout = match std::env::var(Self::POLL_TIMEOUT_VAR) {
            Err(_) => Self::DEFAULT_POLL_TIMEOUT,
            Ok(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidPollTimeout { value: raw.clone() })?;
                Duration::from_secs(secs)
            }
        };

        Ok(Self {
            token,
            poll_timeout,
        })
    }
}
