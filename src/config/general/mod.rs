mod log_level;

pub use log_level::LogLevel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// General settings that affect the whole process.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct GeneralConfig {
    /// Logging level used when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_level: LogLevel,
}
