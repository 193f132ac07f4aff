//! Error types for the feed crate
//!
//! The feed service itself is total; these errors come from the command
//! driver around it:
//! - `ParseError`: a command line could not be understood
//! - `AppError`: driver failures (bad input, I/O, configuration)

use thiserror::Error;

/// Parse error for command parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing argument for: {0}")]
    MissingArgument(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),
}

/// Application layer errors - used by the driver
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
