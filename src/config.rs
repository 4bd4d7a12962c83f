use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::warn;

/// Which market data source to construct at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedMode {
    Fixture,
    Live,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port.
    pub port: u16,
    pub feed_mode: FeedMode,
    /// Market data gateway host (localhost for a desktop terminal).
    pub feed_host: String,
    pub feed_port: u16,
    pub feed_timeout_ms: u64,
    /// Accepted but unused by the deterministic responder; retained for a
    /// future language-model backend.
    pub ai_model: String,
    pub ai_api_key: String,
}

impl Config {
    pub fn load() -> Self {
        let feed_mode = match env::var("GPUINTEL_FEED").as_deref() {
            Ok("live") => FeedMode::Live,
            Ok("fixture") | Err(_) => FeedMode::Fixture,
            Ok(other) => {
                warn!("Unknown GPUINTEL_FEED value {other:?}, falling back to fixture data");
                FeedMode::Fixture
            }
        };

        Self {
            port: try_load("GPUINTEL_PORT", "9000"),
            feed_mode,
            feed_host: env::var("GPUINTEL_FEED_HOST").unwrap_or_else(|_| "localhost".into()),
            feed_port: try_load("GPUINTEL_FEED_PORT", "8194"),
            feed_timeout_ms: try_load("GPUINTEL_FEED_TIMEOUT_MS", "30000"),
            ai_model: env::var("GPUINTEL_AI_MODEL").unwrap_or_else(|_| "gpt-4".into()),
            ai_api_key: env::var("GPUINTEL_AI_API_KEY").unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 9000,
            feed_mode: FeedMode::Fixture,
            feed_host: "localhost".into(),
            feed_port: 8194,
            feed_timeout_ms: 30000,
            ai_model: "gpt-4".into(),
            ai_api_key: String::new(),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Invalid {key} value {raw:?} ({e}), using default {default}");
            default.parse().map_err(|e| format!("{e}")).expect("default must parse")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 9000);
        assert_eq!(config.feed_mode, FeedMode::Fixture);
        assert_eq!(config.feed_host, "localhost");
        assert_eq!(config.feed_port, 8194);
        assert_eq!(config.feed_timeout_ms, 30000);
    }
}
