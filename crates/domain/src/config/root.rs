use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::response::ResponseConfig;
use super::server::ServerConfig;
use crate::target::SinkholeTarget;

/// Main configuration structure for Sinkhole DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Server configuration (port, bind address, packet budget)
    #[serde(default)]
    pub server: ServerConfig,

    /// Synthesized-response configuration (address, TTL)
    #[serde(default)]
    pub response: ResponseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. sinkhole-dns.toml in current directory
    /// 3. /etc/sinkhole-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("sinkhole-dns.toml").exists() {
            Self::from_file("sinkhole-dns.toml")?
        } else if std::path::Path::new("/etc/sinkhole-dns/config.toml").exists() {
            Self::from_file("/etc/sinkhole-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(max) = overrides.max_packets {
            self.server.max_packets = Some(max);
        }
        if let Some(address) = overrides.address {
            self.response.address = address;
        }
        if let Some(ttl) = overrides.ttl {
            self.response.ttl = ttl;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        self.sinkhole_target()?;
        Ok(())
    }

    /// The validated address/TTL pair handed to the message engine.
    pub fn sinkhole_target(&self) -> Result<SinkholeTarget, ConfigError> {
        let address = self.response.address.parse::<Ipv4Addr>().map_err(|_| {
            ConfigError::Validation(format!(
                "Response address '{}' is not a dotted-quad IPv4 address",
                self.response.address
            ))
        })?;
        Ok(SinkholeTarget::new(address, self.response.ttl))
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub bind_address: Option<String>,
    pub address: Option<String>,
    pub ttl: Option<u32>,
    pub max_packets: Option<u64>,
    pub log_level: Option<String>,
}
