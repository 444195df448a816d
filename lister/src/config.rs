//! # Config
//!
//! Define and implement config options for module

use anyhow::Result;
use config::{ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;

/// struct holding configuration options
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// host of the agenda server
    pub agenda_host_grpc: String,
    /// port of the agenda server
    pub agenda_port_grpc: u16,
    /// path to log configuration YAML file
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        log::warn!("(Config Default) Creating Config object with default values.");
        Self::new()
    }
}

impl Config {
    /// Default values for Config
    pub fn new() -> Self {
        Config {
            agenda_host_grpc: "localhost".to_owned(),
            agenda_port_grpc: 5026,
            log_config: String::from("log4rs.yaml"),
        }
    }

    /// Create a new `Config` object using environment variables
    pub fn try_from_env() -> Result<Self, ConfigError> {
        // read .env file if present
        dotenv().ok();
        let default_config = Config::default();

        config::Config::builder()
            .set_default("agenda_host_grpc", default_config.agenda_host_grpc)?
            .set_default("agenda_port_grpc", default_config.agenda_port_grpc)?
            .set_default("log_config", default_config.log_config)?
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_default() {
        let config = Config::default();

        assert_eq!(config.agenda_host_grpc, String::from("localhost"));
        assert_eq!(config.agenda_port_grpc, 5026);
        assert_eq!(config.log_config, String::from("log4rs.yaml"));
    }

    #[test]
    fn test_config_from_env() {
        std::env::set_var("AGENDA_HOST_GRPC", "test_host_grpc");
        std::env::set_var("AGENDA_PORT_GRPC", "12345");
        std::env::set_var("LOG_CONFIG", "config_file.yaml");

        let config = Config::try_from_env();
        assert!(config.is_ok());
        let config = config.unwrap();

        assert_eq!(config.agenda_host_grpc, String::from("test_host_grpc"));
        assert_eq!(config.agenda_port_grpc, 12345);
        assert_eq!(config.log_config, String::from("config_file.yaml"));
    }
}
