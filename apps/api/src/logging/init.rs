use std::fs::OpenOptions;
use std::str::FromStr;
use std::sync::Mutex;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, fmt::writer::BoxMakeWriter, EnvFilter};

use crate::logging::LoggerConfig;

/// Errors raised while installing the tracing subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    #[error("Invalid log encoding: {0} (expected json or console)")]
    InvalidEncoding(String),

    #[error("Failed to open log file {path}: {source}")]
    OpenFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEncoding {
    Json,
    Console,
}

impl FromStr for LogEncoding {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(LogEncoding::Json),
            "console" | "text" => Ok(LogEncoding::Console),
            _ => Err(LoggingError::InvalidEncoding(s.to_string())),
        }
    }
}

/// Parses a configured level name
///
/// `fatal` and `panic` have no tracing counterpart and are treated as `error`.
pub fn parse_level(raw: &str) -> Result<Level, LoggingError> {
    match raw.to_ascii_lowercase().as_str() {
        "fatal" | "panic" => Ok(Level::ERROR),
        other => {
            Level::from_str(other).map_err(|_| LoggingError::InvalidLevel(raw.to_string()))
        }
    }
}

/// Installs the global tracing subscriber described by `config`
///
/// `RUST_LOG`, when set, refines the configured level.
pub fn init(config: &LoggerConfig) -> Result<(), LoggingError> {
    let level = parse_level(&config.level)?;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    init_with_filter(config, filter)
}

/// Installs the global subscriber with an explicit filter
///
/// Output format and destination still come from `config`; its `level` is
/// only reported, `filter` alone decides what is emitted.
pub fn init_with_filter(config: &LoggerConfig, filter: EnvFilter) -> Result<(), LoggingError> {
    let encoding: LogEncoding = config.encoding.parse()?;
    let (writer, ansi) = make_writer(&config.file_path)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi);

    let installed = match encoding {
        LogEncoding::Json => builder.json().try_init(),
        LogEncoding::Console => builder.try_init(),
    };
    installed.map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::info!(
        logger = %config.logger,
        level = %config.level,
        encoding = ?encoding,
        "Logging initialized"
    );

    Ok(())
}

fn make_writer(file_path: &str) -> Result<(BoxMakeWriter, bool), LoggingError> {
    if file_path.is_empty() {
        return Ok((BoxMakeWriter::new(std::io::stdout), true));
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_path)
        .map_err(|source| LoggingError::OpenFile {
            path: file_path.to_string(),
            source,
        })?;

    Ok((BoxMakeWriter::new(Mutex::new(file)), false))
}
