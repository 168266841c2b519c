//! Wire models for the recommendation API.
//!
//! Request parsing is done over a raw `serde_json::Value` so that each
//! malformed field maps to its own error instead of a generic decode failure.

use crate::error::MatchupError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Request
// ============================================================================

/// A validated recommendation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRequest {
    pub opponent: String,
    /// Names to exclude, echoed back verbatim in the response.
    pub banned_teams: Vec<String>,
}

impl RecommendationRequest {
    pub fn new(opponent: impl Into<String>, banned_teams: Vec<String>) -> Self {
        Self {
            opponent: opponent.into(),
            banned_teams,
        }
    }

    /// Parse a raw JSON body.
    pub fn from_slice(body: &[u8]) -> Result<Self, MatchupError> {
        let value: Value = serde_json::from_slice(body).map_err(MatchupError::MalformedJson)?;
        Self::from_value(&value)
    }

    /// Validate a decoded JSON body.
    ///
    /// - `opponent` must be a non-empty string
    /// - `bannedTeams` may be absent, null or falsy (treated as empty),
    ///   otherwise it must be an array of strings
    pub fn from_value(value: &Value) -> Result<Self, MatchupError> {
        if value.is_null() {
            return Err(MatchupError::NullBody);
        }

        let opponent = match value.get("opponent") {
            Some(Value::String(name)) if !name.is_empty() => name.clone(),
            _ => return Err(MatchupError::InvalidOpponent),
        };

        let banned_teams = match value.get("bannedTeams") {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Vec::new(),
            Some(Value::String(s)) if s.is_empty() => Vec::new(),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| {
                    item.as_str()
                        .map(str::to_string)
                        .ok_or(MatchupError::InvalidBannedList)
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => return Err(MatchupError::InvalidBannedList),
        };

        Ok(Self {
            opponent,
            banned_teams,
        })
    }
}

// ============================================================================
// Response
// ============================================================================

/// A score-ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestAvailableEntry {
    pub team: String,
    pub score: i32,
}

/// A candidate rated just above the opponent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloseMatchupEntry {
    pub team: String,
    pub overall: f64,
}

/// Both ranked lists for one opponent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Canonical catalog name of the opponent
    pub opponent: String,
    pub banned_teams: Vec<String>,
    pub best_available: Vec<BestAvailableEntry>,
    pub close_matchups: Vec<CloseMatchupEntry>,
}
