use std::env;
use std::path::PathBuf;

use crate::error::AppError;

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Command script to run; stdin when unset
    pub script_path: Option<PathBuf>,
    /// Echo each command before its output
    pub echo: bool,
    /// Log filter used when RUST_LOG is not set
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment, or a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let echo = match lookup("FEED_ECHO") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                AppError::Config(format!("FEED_ECHO must be a boolean, got '{}'", raw))
            })?,
            None => false,
        };

        Ok(Self {
            script_path: lookup("FEED_SCRIPT")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            echo,
            log_filter: lookup("FEED_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
