//! Logger settings that hosts embed in their own configuration

use serde::{Deserialize, Serialize};

use crate::logging::{Severity, UNKNOWN_FILE};

/// Settings for a [`ConsoleLogger`](crate::logging::ConsoleLogger)
///
/// Every field is optional when deserializing; missing fields take the
/// same defaults as `ConsoleLogger::default()`.
///
/// ```
/// use q1console_core::config::LoggerConfig;
///
/// let config = LoggerConfig {
///     file: "src/main.rs".to_string(),
///     colorize: false,
///     ..Default::default()
/// };
/// assert!(config.show_time);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerConfig {
    /// Source path or label; stripped to its basename
    pub file: String,
    /// Optional namespace shown in front of the file label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,
    pub show_time: bool,
    pub show_type: bool,
    pub colorize: bool,
    /// Lowest severity printed; build-dependent default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_severity: Option<Severity>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            file: UNKNOWN_FILE.to_string(),
            space: None,
            show_time: true,
            show_type: true,
            colorize: true,
            min_severity: None,
        }
    }
}

impl LoggerConfig {
    /// Effective threshold, falling back to [`Severity::default_threshold`]
    pub fn min_severity(&self) -> Severity {
        self.min_severity.unwrap_or_else(Severity::default_threshold)
    }
}
