//! Output destinations for log entries

mod traits;
mod console;
mod file;
mod memory;
mod noop;

pub use traits::{LogSink, BoxedSink, SharedSink};
pub use console::ConsoleSink;
pub use file::FileSink;
pub use memory::MemorySink;
pub use noop::NoOpSink;
