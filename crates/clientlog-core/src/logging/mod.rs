//! Leveled console logging

pub mod level;
pub mod entry;
pub mod clock;
pub mod sinks;
mod logger;
mod global;

pub use level::{LogLevel, Channel};
pub use entry::LogEntry;
pub use clock::{Clock, SystemClock, FixedClock};
pub use sinks::{LogSink, BoxedSink, SharedSink, ConsoleSink, FileSink, MemorySink, NoOpSink};
pub use logger::{Logger, SharedClock, UNKNOWN_NAME, infer_name, resolve_name};
pub use global::{get_logger, info, warning, error};
