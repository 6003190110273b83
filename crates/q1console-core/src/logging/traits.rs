//! Logger trait definition

use super::severity::Severity;

/// Severity-specific print operations
///
/// `ConsoleLogger` is the implementation shipped with this crate; hosts can
/// hand it around as `Arc<dyn Logger>` or plug in their own.
///
/// Every operation is fire-and-forget; implementations never report
/// write failures to the caller.
pub trait Logger: Send + Sync {
    /// Log a debug message
    fn debug(&self, message: &str);

    /// Log an info message
    fn info(&self, message: &str);

    /// Log a warning message
    fn warn(&self, message: &str);

    /// Log an error message
    fn error(&self, message: &str);

    /// Log at a severity chosen at runtime
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => self.debug(message),
            Severity::Info => self.info(message),
            Severity::Warn => self.warn(message),
            Severity::Error => self.error(message),
        }
    }
}

/// Log a formatted message at the given [`Severity`]
///
/// ```rust,no_run
/// use q1console_core::{log_fmt, ConsoleLogger, Logger, Severity};
///
/// let logger = ConsoleLogger::new(file!());
/// log_fmt!(logger, Severity::Warn, "{} retries left", 2);
/// ```
#[macro_export]
macro_rules! log_fmt {
    ($logger:expr, $severity:expr, $($arg:tt)*) => {
        $logger.log($severity, &format!($($arg)*))
    };
}
