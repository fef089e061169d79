//! GStreamer installation verifier
//!
//! A smoke-test harness that initializes the GStreamer runtime and the
//! Editing Services extension, probes a configured list of plugin elements,
//! and reports one status line per step.

pub mod config;
pub mod error;
pub mod probe;
pub mod report;

// Re-export commonly used types
pub use config::{ConfigError, ProbeEntry, VerifyConfig};
pub use error::{VerifyError, VerifyResult};
pub use probe::{run_verify, ProbeOutcome, VerifyReport};
pub use report::{render_lines, ConsoleReporter, JsonReporter, Reporter};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
