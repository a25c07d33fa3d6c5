// Logging configuration and subscriber setup
//
// `LoggerConfig` is read once at startup and handed to `init`, which installs
// the process-wide tracing subscriber.

pub mod config;
pub mod init;

pub use config::LoggerConfig;
pub use init::{init, init_with_filter, LogEncoding, LoggingError};
