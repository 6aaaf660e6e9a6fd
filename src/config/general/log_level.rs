use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Logging level for the application.
///
/// Controls the verbosity of log output when `RUST_LOG` is not set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only failures the overlay cannot recover from.
    Error,

    /// Absorbed failures: dropped fetches, failed writes, rejected controls.
    Warn,

    /// Lifecycle messages and warnings (default level).
    #[default]
    Info,

    /// Per-cycle polling and placement decisions.
    Debug,

    /// Everything, including interpolation ticks.
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
