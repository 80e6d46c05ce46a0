//! Configuration loading and representation.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Process configuration for the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl AppConfig {
    /// Read `CIVICSTATS_HOST` and `PORT` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Some(raw) = lookup("CIVICSTATS_HOST") {
            cfg.host = raw.parse().map_err(|_| ConfigError::Invalid {
                var: "CIVICSTATS_HOST",
                value: raw.clone(),
            })?;
        }

        if let Some(raw) = lookup("PORT") {
            cfg.port = raw.parse().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: raw.clone(),
            })?;
        }

        Ok(cfg)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
