//! Logging abstractions and the console logger

mod traits;
mod severity;
mod console;

pub use traits::Logger;
pub use severity::{Severity, ParseSeverityError};
pub use console::{ConsoleLogger, basename, UNKNOWN_FILE, MAX_SPACE_CHARS};
