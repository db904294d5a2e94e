//! Shared application state.

use crate::config::ServiceConfig;

/// Shared application state. Built once at startup and only read by handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub service: ServiceConfig,
}

impl AppState {
    pub fn new(service: ServiceConfig) -> Self {
        Self { service }
    }
}
