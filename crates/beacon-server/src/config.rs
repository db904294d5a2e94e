//! Server configuration.
//!
//! Two pieces live here: [`ServerConfig`], the bind settings loaded from a TOML
//! file and the CLI, and [`ServiceConfig`], the version metadata snapshotted
//! from the environment at startup and reported by the routes.

use crate::error::{BeaconError, Result};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

pub const VERSION_VAR: &str = "APP_VERSION";
pub const GIT_SHA_VAR: &str = "GIT_SHA";

pub const DEFAULT_VERSION: &str = "dev";
pub const DEFAULT_GIT_SHA: &str = "local";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Load config from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default location (config/default.toml) or fall back to defaults.
    pub fn load() -> Result<Self> {
        Self::load_or_default(&PathBuf::from("config/default.toml"))
    }

    /// Load `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load_from(path);
        }

        Ok(ServerConfig::default())
    }

    /// Apply `--host`/`--port` from the command line. `None` keeps the file value.
    pub fn apply_overrides(&mut self, host: Option<String>, port: Option<u16>) {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
    }

    /// Build the listen address. The host must be an IPv4 or IPv6 literal.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| BeaconError::InvalidAddress(format!("{}: {}", self.host, e)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Version metadata reported by the routes. Read once at startup and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub version: String,
    pub git_sha: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            git_sha: DEFAULT_GIT_SHA.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn new(version: impl Into<String>, git_sha: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            git_sha: git_sha.into(),
        }
    }

    /// Snapshot `APP_VERSION` and `GIT_SHA` from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Only missing values take the
    /// defaults; a variable set to "" is reported as "".
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str, default: &str| {
            lookup(name).unwrap_or_else(|| default.to_string())
        };

        Self {
            version: read(VERSION_VAR, DEFAULT_VERSION),
            git_sha: read(GIT_SHA_VAR, DEFAULT_GIT_SHA),
        }
    }
}
