//! Server configuration from environment variables.

use anyhow::{Context, Result};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 4217;
const EVENTS_FILE: &str = "events.json";

/// Runtime configuration for calgrid-server.
pub struct ServerConfig {
    pub port: u16,
    pub data_file: PathBuf,
}

impl ServerConfig {
    /// Resolve configuration from `CALGRID_PORT` and `CALGRID_DATA_DIR`,
    /// falling back to the default port and the platform data directory.
    pub fn from_env() -> Result<Self> {
        let port = parse_port(std::env::var("CALGRID_PORT").ok())?;
        let data_file = match std::env::var("CALGRID_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir).join(EVENTS_FILE),
            Err(_) => default_data_dir()?.join(EVENTS_FILE),
        };
        Ok(ServerConfig { port, data_file })
    }
}

fn parse_port(value: Option<String>) -> Result<u16> {
    match value {
        Some(v) => v
            .parse()
            .with_context(|| format!("Invalid CALGRID_PORT value '{}'", v)),
        None => Ok(DEFAULT_PORT),
    }
}

fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join("calgrid"))
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
}
