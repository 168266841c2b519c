//! Error types for catalog construction and matchup evaluation.

use thiserror::Error;

/// Errors raised while building or loading a [`crate::TeamCatalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Team catalog must contain at least one team")]
    Empty,

    #[error("Team at position {index} has a blank name")]
    EmptyName { index: usize },

    #[error("Duplicate team name {name:?} (names are compared case-insensitively)")]
    DuplicateName { name: String },

    #[error("Rating out of range for {team}: {attribute} = {value} (max {max})")]
    RatingOutOfRange {
        team: String,
        attribute: &'static str,
        value: u8,
        max: u8,
    },

    #[error("Failed to read team catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse team catalog {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while validating a recommendation request or resolving its opponent.
#[derive(Debug, Error)]
pub enum MatchupError {
    #[error("Opponent team \"{name}\" not found{}", did_you_mean(.suggestion))]
    OpponentNotFound {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Missing or invalid 'opponent' field")]
    InvalidOpponent,

    #[error("Invalid 'bannedTeams' field - must be an array of strings")]
    InvalidBannedList,

    #[error("Error processing request")]
    MalformedJson(#[source] serde_json::Error),

    #[error("Error processing request")]
    NullBody,
}

impl MatchupError {
    /// True when the request was well-formed but named an unknown opponent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, MatchupError::OpponentNotFound { .. })
    }
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean \"{}\"?)", name),
        None => String::new(),
    }
}
