//! Native Rust value types for team ratings.

use serde::{Deserialize, Serialize};

/// Highest value any rating attribute may take.
pub const MAX_RATING: u8 = 100;

/// A team and its four rating attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    /// Overall offensive rating (0-100)
    pub offense: u8,
    /// Overall defensive rating (0-100)
    pub defense: u8,
    /// Run game rating (0-100)
    pub run: u8,
    /// Passing game rating (0-100)
    pub pass: u8,
}

impl Team {
    pub fn new(name: impl Into<String>, offense: u8, defense: u8, run: u8, pass: u8) -> Self {
        Self {
            name: name.into(),
            offense,
            defense,
            run,
            pass,
        }
    }

    /// Overall rating: mean of offense and defense.
    ///
    /// Not stored; may carry a .5 fraction (e.g. 70/65 -> 67.5).
    pub fn overall(&self) -> f64 {
        (f64::from(self.offense) + f64::from(self.defense)) / 2.0
    }

    /// All rating attributes with their field names, in declaration order.
    pub fn ratings(&self) -> [(&'static str, u8); 4] {
        [
            ("offense", self.offense),
            ("defense", self.defense),
            ("run", self.run),
            ("pass", self.pass),
        ]
    }
}
