use std::{env, net::SocketAddr};

use thiserror::Error;

/// The listening port is the only external setting. The server always
/// binds all interfaces so the mobile client can reach it over the LAN.
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_port: u16,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("PORT must be a valid u16")]
    InvalidPort,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_port_value(env::var("PORT").ok())
    }

    fn from_port_value(port: Option<String>) -> Result<Self, ConfigError> {
        let bind_port = port
            .map(|value| value.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort))
            .transpose()?
            .unwrap_or(DEFAULT_PORT);

        Ok(Self { bind_port })
    }

    pub fn bind_socket(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.bind_port))
    }
}
