//! Default team roster.
//!
//! This module provides:
//! - Static ratings for the 28 simulation teams
//! - Conversion of roster entries into owned [`Team`] records

use crate::types::Team;

/// A single roster row with a static name.
#[derive(Debug, Clone, Copy)]
pub struct RosterEntry {
    pub name: &'static str,
    pub offense: u8,
    pub defense: u8,
    pub run: u8,
    pub pass: u8,
}

impl From<&RosterEntry> for Team {
    fn from(entry: &RosterEntry) -> Self {
        Team::new(entry.name, entry.offense, entry.defense, entry.run, entry.pass)
    }
}

/// Built-in roster, in catalog order. Order only matters as a ranking tie-break.
pub static DEFAULT_ROSTER: &[RosterEntry] = &[
    RosterEntry {
        name: "49ers",
        offense: 95,
        defense: 90,
        run: 85,
        pass: 95,
    },
    RosterEntry {
        name: "Giants",
        offense: 90,
        defense: 95,
        run: 80,
        pass: 85,
    },
    RosterEntry {
        name: "Oilers",
        offense: 100,
        defense: 70,
        run: 80,
        pass: 100,
    },
    RosterEntry {
        name: "Bills",
        offense: 85,
        defense: 80,
        run: 80,
        pass: 90,
    },
    RosterEntry {
        name: "Eagles",
        offense: 90,
        defense: 90,
        run: 85,
        pass: 90,
    },
    RosterEntry {
        name: "Raiders",
        offense: 90,
        defense: 90,
        run: 100,
        pass: 70,
    },
    RosterEntry {
        name: "Chiefs",
        offense: 85,
        defense: 85,
        run: 95,
        pass: 80,
    },
    RosterEntry {
        name: "Dolphins",
        offense: 90,
        defense: 80,
        run: 70,
        pass: 95,
    },
    RosterEntry {
        name: "Vikings",
        offense: 80,
        defense: 85,
        run: 85,
        pass: 80,
    },
    RosterEntry {
        name: "Bears",
        offense: 75,
        defense: 100,
        run: 90,
        pass: 70,
    },
    RosterEntry {
        name: "Bengals",
        offense: 80,
        defense: 70,
        run: 85,
        pass: 80,
    },
    RosterEntry {
        name: "Washington",
        offense: 80,
        defense: 80,
        run: 80,
        pass: 80,
    },
    RosterEntry {
        name: "Steelers",
        offense: 75,
        defense: 90,
        run: 80,
        pass: 70,
    },
    RosterEntry {
        name: "Rams",
        offense: 90,
        defense: 70,
        run: 80,
        pass: 90,
    },
    RosterEntry {
        name: "Lions",
        offense: 80,
        defense: 75,
        run: 100,
        pass: 70,
    },
    RosterEntry {
        name: "Broncos",
        offense: 80,
        defense: 80,
        run: 75,
        pass: 80,
    },
    RosterEntry {
        name: "Saints",
        offense: 80,
        defense: 80,
        run: 80,
        pass: 80,
    },
    RosterEntry {
        name: "Cowboys",
        offense: 80,
        defense: 75,
        run: 80,
        pass: 80,
    },
    RosterEntry {
        name: "Chargers",
        offense: 80,
        defense: 80,
        run: 80,
        pass: 80,
    },
    RosterEntry {
        name: "Buccaneers",
        offense: 75,
        defense: 80,
        run: 70,
        pass: 75,
    },
    RosterEntry {
        name: "Falcons",
        offense: 75,
        defense: 70,
        run: 80,
        pass: 70,
    },
    RosterEntry {
        name: "Packers",
        offense: 70,
        defense: 65,
        run: 65,
        pass: 70,
    },
    RosterEntry {
        name: "Cardinals",
        offense: 70,
        defense: 70,
        run: 70,
        pass: 70,
    },
    RosterEntry {
        name: "Jets",
        offense: 70,
        defense: 70,
        run: 70,
        pass: 70,
    },
    RosterEntry {
        name: "Browns",
        offense: 65,
        defense: 65,
        run: 65,
        pass: 65,
    },
    RosterEntry {
        name: "Seahawks",
        offense: 70,
        defense: 70,
        run: 70,
        pass: 70,
    },
    RosterEntry {
        name: "Colts",
        offense: 60,
        defense: 60,
        run: 60,
        pass: 60,
    },
    RosterEntry {
        name: "Patriots",
        offense: 60,
        defense: 65,
        run: 60,
        pass: 60,
    },
];

/// Owned copies of every roster team, in catalog order.
pub fn default_teams() -> Vec<Team> {
    DEFAULT_ROSTER.iter().map(Team::from).collect()
}

/// Get list of all roster team names.
pub fn get_all_team_names() -> Vec<&'static str> {
    DEFAULT_ROSTER.iter().map(|e| e.name).collect()
}

// ============================================================================
// Tests
// ============================================================================
