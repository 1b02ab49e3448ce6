//! Error types for chatcast.

use thiserror::Error;

/// Core error type for all chatcast operations.
///
/// Building and rendering messages never fails. Errors only come from the
/// opt-in validators, timestamp parsing, config loading, and the output sink.
#[derive(Error, Debug)]
pub enum ChatcastError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid timestamp: {input} — expected YYYY-MM-DD HH:MM[:SS]")]
    InvalidTimestamp { input: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChatcastError>;
