//! Error types

use thiserror::Error;

/// Errors that can occur in the fallible corners of the crate
///
/// Logging itself never fails from the caller's point of view; these
/// come from name inference (always recovered), line parsing and
/// configuration handling.
#[derive(Error, Debug)]
pub enum LogError {
    /// A default logger name could not be derived from the call site
    #[error("Name inference failed: {0}")]
    NameInference(String),

    /// A formatted line did not match the log line layout
    #[error("Malformed log line: {0}")]
    Parse(String),

    /// Invalid forwarding configuration
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LogError {
    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type LogResult<T> = Result<T, LogError>;
