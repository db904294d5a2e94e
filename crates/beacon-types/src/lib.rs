//! Shared types for the Beacon status service.

mod status;

pub use status::*;
