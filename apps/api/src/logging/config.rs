/// Logger settings sourced from the environment
///
/// # Fields
/// * `file_path` - `LOGGER_FILE_PATH`, log file to append to (empty = stdout)
/// * `encoding` - `LOGGER_ENCODING`, `json` or `console`
/// * `level` - `LOGGER_LEVEL`, minimum level to emit
/// * `logger` - `LOGGER_LOGGER`, name recorded on request spans
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerConfig {
    pub file_path: String,
    pub encoding: String,
    pub level: String,
    pub logger: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            file_path: String::new(),
            encoding: "console".to_string(),
            level: "info".to_string(),
            logger: "api".to_string(),
        }
    }
}

impl LoggerConfig {
    pub const FILE_PATH_VAR: &'static str = "LOGGER_FILE_PATH";
    pub const ENCODING_VAR: &'static str = "LOGGER_ENCODING";
    pub const LEVEL_VAR: &'static str = "LOGGER_LEVEL";
    pub const LOGGER_VAR: &'static str = "LOGGER_LOGGER";

    /// Reads the logger settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the settings from an arbitrary variable lookup
    ///
    /// Variables the lookup doesn't know keep their default value.
    ///
    /// # Example
    /// ```
    /// use resthelper_api::logging::LoggerConfig;
    ///
    /// let config = LoggerConfig::from_lookup(|key| match key {
    ///     "LOGGER_LEVEL" => Some("debug".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.level, "debug");
    /// assert_eq!(config.encoding, "console");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            file_path: lookup(Self::FILE_PATH_VAR).unwrap_or(defaults.file_path),
            encoding: lookup(Self::ENCODING_VAR).unwrap_or(defaults.encoding),
            level: lookup(Self::LEVEL_VAR).unwrap_or(defaults.level),
            logger: lookup(Self::LOGGER_VAR).unwrap_or(defaults.logger),
        }
    }
}
