//! Team catalog for opponent and candidate lookups.
//!
//! This module provides:
//! - Case-insensitive lookup through a lowercase-name index
//! - Validation of ratings and name uniqueness at construction
//! - JSON loading for roster overrides
//! - Closest-name suggestions for misspelled opponents

use crate::error::CatalogError;
use crate::roster;
use crate::types::{Team, MAX_RATING};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.85;

/// Immutable, ordered collection of teams.
///
/// Catalog order is preserved and is the tie-break for equal ranking scores.
#[derive(Debug, Clone)]
pub struct TeamCatalog {
    teams: Vec<Team>,
    /// lowercase name -> position in `teams`
    index: FxHashMap<String, usize>,
}

/// Lookup key used for every case-insensitive comparison.
pub(crate) fn normalize_name(name: &str) -> String {
    name.to_lowercase()
}

impl TeamCatalog {
    /// Build a catalog, rejecting empty rosters, blank or duplicate names
    /// and ratings above [`MAX_RATING`].
    pub fn new(teams: Vec<Team>) -> Result<Self, CatalogError> {
        if teams.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = FxHashMap::default();
        for (position, team) in teams.iter().enumerate() {
            if team.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { index: position });
            }
            if let Some((attribute, value)) =
                team.ratings().into_iter().find(|(_, v)| *v > MAX_RATING)
            {
                return Err(CatalogError::RatingOutOfRange {
                    team: team.name.clone(),
                    attribute,
                    value,
                    max: MAX_RATING,
                });
            }
            if index.insert(normalize_name(&team.name), position).is_some() {
                return Err(CatalogError::DuplicateName {
                    name: team.name.clone(),
                });
            }
        }

        Ok(Self { teams, index })
    }

    /// Catalog over the built-in roster.
    pub fn default_roster() -> Self {
        // Roster validity is covered by tests, so index without re-checking.
        let teams = roster::default_teams();
        let index = teams
            .iter()
            .enumerate()
            .map(|(position, team)| (normalize_name(&team.name), position))
            .collect();
        Self { teams, index }
    }

    /// Load from a JSON file holding an array of team records.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        // JSON format: [ { "name": ..., "offense": ..., "defense": ..., "run": ..., "pass": ... }, ... ]
        let teams: Vec<Team> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        Self::new(teams)
    }

    /// Case-insensitive exact match on team name.
    pub fn lookup(&self, name: &str) -> Option<&Team> {
        self.index
            .get(&normalize_name(name))
            .map(|&position| &self.teams[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&normalize_name(name))
    }

    /// All teams in catalog order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Canonical team names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.teams.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Closest catalog name to an unknown input, if any is similar enough.
    ///
    /// Ties keep the earliest team in catalog order.
    pub fn suggest(&self, name: &str) -> Option<&str> {
        let query = normalize_name(name.trim());
        if query.is_empty() {
            return None;
        }

        let mut best: Option<(&str, f64)> = None;
        for team in &self.teams {
            let similarity = strsim::jaro_winkler(&query, &normalize_name(&team.name));
            if similarity < SUGGESTION_THRESHOLD {
                continue;
            }
            if best.map_or(true, |(_, top)| similarity > top) {
                best = Some((team.name.as_str(), similarity));
            }
        }
        best.map(|(name, _)| name)
    }
}

impl Default for TeamCatalog {
    fn default() -> Self {
        Self::default_roster()
    }
}

// ============================================================================
// Tests
// ============================================================================
