//! Error types for the Beacon server.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BeaconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),
}

pub type Result<T> = std::result::Result<T, BeaconError>;
