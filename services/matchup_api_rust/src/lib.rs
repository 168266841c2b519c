//! Matchup API Service Library
//!
//! Exposes the router, handlers and configuration so integration tests can
//! drive the service in-process.

pub mod api;
pub mod config;

pub use api::{build_router, ApiError, AppState};
pub use config::Config;
