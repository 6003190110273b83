//! q1Console Core
//!
//! A small console logger: each line carries an optional gray timestamp,
//! an optional colored severity tag and a file label.
//!
//! ```rust,no_run
//! use q1console_core::{ConsoleLogger, Logger};
//!
//! let mut logger = ConsoleLogger::new(file!());
//! logger.disable_time();
//!
//! logger.info("server started");
//! logger.warn("config file missing, using defaults");
//! ```
//!
//! ## Color backends
//!
//! Colors go through a [`terminal::Palette`]. The backend is detected once
//! per process: the native console API on Windows, ANSI escapes elsewhere.
//! Tests and hosts can swap in their own palette and output [`terminal::Sink`].

pub mod logging;
pub mod terminal;
pub mod config;

// Re-export commonly used types
pub use logging::{Logger, ConsoleLogger, Severity, ParseSeverityError};

pub use config::LoggerConfig;

pub use terminal::{Palette, AnsiPalette, ConsolePalette, Color, Sink, CaptureBuffer};
