//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CATALOG_PATH: &str = "public/items.json";

/// Errors raised while reading server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid TCP port.
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub catalog_path: PathBuf,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CATALOG_PATH`: catalog JSON file, default `public/items.json`
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let catalog_path = std::env::var("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG_PATH));
        Ok(Self { port, catalog_path })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}
