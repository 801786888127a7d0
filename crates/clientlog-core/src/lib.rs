//! clientlog Core
//!
//! Small leveled logger for development builds.
//! Each call produces one line of the form
//!
//! ```text
//! [2024-01-01T00:00:00.000Z] [INFO] [auth] User logged in successfully
//! ```
//!
//! and writes it to the console channel of its level (`log`, `warn` or
//! `error`), where a console-forwarding plugin can pick it up and post it
//! to a backend endpoint.
//!
//! ## Usage
//!
//! ```rust
//! use clientlog_core::{get_logger, info, Logger};
//!
//! // Named logger per component
//! let auth = Logger::new(Some("auth"));
//! auth.info("User logged in successfully");
//!
//! // Shared default logger, named after the first calling file
//! get_logger(None).warning("Browser localStorage not available");
//! info("App started");
//! ```

pub mod error;
pub mod logging;
pub mod config;

pub use error::{LogError, LogResult};

pub use logging::{
    Logger, LogLevel, Channel, LogEntry,
    Clock, SystemClock, FixedClock, SharedClock,
    LogSink, BoxedSink, SharedSink, ConsoleSink, FileSink, MemorySink, NoOpSink,
    get_logger, info, warning, error,
    infer_name, resolve_name, UNKNOWN_NAME,
};

pub use config::{ForwardConfig, ForwardMetadata};
