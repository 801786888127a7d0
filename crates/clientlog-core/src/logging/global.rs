//! Process-wide default logger
//!
//! The default logger is created on the first unnamed [`get_logger`]
//! call and lives for the rest of the process. Its name is inferred from
//! that first call site.

use std::panic::Location;
use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::logger::Logger;

static DEFAULT_LOGGER: OnceCell<Arc<Logger>> = OnceCell::new();

/// Get or create a logger instance
///
/// A non-empty `name` always yields a fresh logger and leaves the default
/// untouched. Without a name the shared default logger is returned.
#[track_caller]
pub fn get_logger(name: Option<&str>) -> Arc<Logger> {
    match name {
        Some(name) if !name.is_empty() => Arc::new(Logger::new(Some(name))),
        _ => {
            let caller = Location::caller();
            DEFAULT_LOGGER
                .get_or_init(|| Arc::new(Logger::at_location(None, caller)))
                .clone()
        }
    }
}

/// Log info message using default logger
#[track_caller]
pub fn info(message: &str) {
    get_logger(None).info(message);
}

/// Log warning message using default logger
#[track_caller]
pub fn warning(message: &str) {
    get_logger(None).warning(message);
}

/// Log error message using default logger
#[track_caller]
pub fn error(message: &str) {
    get_logger(None).error(message);
}
