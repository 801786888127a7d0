//! Forwarding plugin configuration
//!
//! The logger never reads this. It describes the flat option set a
//! console-forwarding plugin consumes, so tooling can load, validate and
//! hand it over:
//! - `ForwardConfig`: the options themselves
//! - YAML on disk (`~/.config/clientlog/forward.yaml`), JSON for the plugin

mod forward;

pub use forward::{ForwardConfig, ForwardMetadata, DEFAULT_ENDPOINT, FORWARDABLE_LEVELS};
