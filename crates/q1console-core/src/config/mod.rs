//! Logger configuration
//!
//! The crate never reads files or environment variables on its own;
//! hosts deserialize [`LoggerConfig`] from whatever source they use.

mod settings;

pub use settings::LoggerConfig;
