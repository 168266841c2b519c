//! Matchup Core - team catalog and matchup recommendation engine.
//!
//! This module provides:
//! - Team rating records and the default 28-team roster
//! - Case-insensitive team catalog with normalized-key lookup
//! - Best-available and close-matchup recommendations for an opponent
//! - JSON wire models for the recommendation API

mod error;
mod types;

pub mod matchup;
pub mod models;
pub mod roster;
pub mod team_catalog;

pub use error::{CatalogError, MatchupError};
pub use matchup::{
    recommend, BEST_AVAILABLE_LIMIT, CLOSE_MATCHUPS_LIMIT, CLOSE_MATCHUP_DELTA,
};
pub use models::{BestAvailableEntry, CloseMatchupEntry, Recommendation, RecommendationRequest};
pub use team_catalog::TeamCatalog;
pub use types::*;
