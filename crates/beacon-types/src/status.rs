//! Response payloads for the status routes.

use serde::{Deserialize, Serialize};

/// Message reported by the root route.
pub const ROOT_MESSAGE: &str = "Azure DevOps Project 1 is running";

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootStatus {
    pub status: String,
    pub message: String,
    /// Deployed version (`APP_VERSION`).
    pub version: String,
    /// Commit the build came from (`GIT_SHA`).
    pub git_sha: String,
}

impl RootStatus {
    pub fn new(version: impl Into<String>, git_sha: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: ROOT_MESSAGE.to_string(),
            version: version.into(),
            git_sha: git_sha.into(),
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub health: String,
    pub version: String,
}

impl HealthStatus {
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            health: "healthy".to_string(),
            version: version.into(),
        }
    }
}
