//! Severity levels and their tag rendering

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::terminal::Color;

/// Severity of a log line
///
/// Ordered from least to most severe so it can be used as a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
}

impl Severity {
    /// Map a raw severity code to a level
    ///
    /// Codes follow the console wire order: `0 = info`, `1 = debug`,
    /// `2 = warn`, `3 = error`. Unknown codes render as [`Severity::Error`].
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => Severity::Info,
            1 => Severity::Debug,
            2 => Severity::Warn,
            _ => Severity::Error,
        }
    }

    /// Fixed-width tag printed in front of the file label
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Info => " INFO",
            Severity::Debug => "DEBUG",
            Severity::Warn => " WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Foreground color of the tag
    pub fn color(self) -> Color {
        match self {
            Severity::Info => Color::Green,
            Severity::Debug => Color::Cyan,
            Severity::Warn => Color::Yellow,
            Severity::Error => Color::Red,
        }
    }

    /// Lowest severity that is printed when nothing else is configured
    ///
    /// Debug builds print everything; release builds start at `Info`.
    pub fn default_threshold() -> Self {
        if cfg!(debug_assertions) {
            Severity::Debug
        } else {
            Severity::Info
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().trim_start())
    }
}

/// Error returned when a severity name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown severity: {0}")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}
