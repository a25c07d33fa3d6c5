// Application configuration loaded from the environment (and `.env`)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

use crate::logging::LoggerConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid SERVER_HOST: {0}")]
    InvalidHost(String),

    #[error("Invalid SERVER_PORT: {0}")]
    InvalidPort(String),
}

/// Settings the binary needs at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub logger: LoggerConfig,
}

impl AppConfig {
    /// Loads `.env` (if present) and reads the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("SERVER_HOST") {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3000,
        };

        Ok(Self {
            host,
            port,
            logger: LoggerConfig::from_lookup(&lookup),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_all_interfaces_on_3000() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.addr(), SocketAddr::from(([0, 0, 0, 0], 3000)));
        assert_eq!(config.logger, LoggerConfig::default());
    }

    #[test]
    fn reads_server_and_logger_settings() {
        let config = AppConfig::from_lookup(|key| match key {
            "SERVER_HOST" => Some("127.0.0.1".to_string()),
            "SERVER_PORT" => Some("8080".to_string()),
            "LOGGER_ENCODING" => Some("json".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(config.addr(), SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.logger.encoding, "json");
    }

    #[test]
    fn rejects_bad_port() {
        let err = AppConfig::from_lookup(|key| {
            (key == "SERVER_PORT").then(|| "eighty".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(port) if port == "eighty"));
    }
}
