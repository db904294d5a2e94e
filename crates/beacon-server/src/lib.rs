//! Beacon server library - HTTP status service reporting version metadata.
//!
//! Routes, configuration, and state live here; main.rs only wires the CLI to
//! them, which keeps the router reachable from integration tests.

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod server;
pub mod state;
