//! Position taxonomy for the player system.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of position variants; sizes the constant weight tables.
pub const POSITION_COUNT: usize = 4;

/// Playing position. Selects the weight vector used by both the summary
/// derivation and the CA calculator. Immutable once assigned to a player;
/// position changes are a roster-management decision outside this core.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DF")]
    Defender,
    #[serde(rename = "MF")]
    Midfielder,
    #[serde(rename = "FW")]
    Forward,
}

impl Position {
    pub const ALL: [Position; POSITION_COUNT] = [
        Position::Goalkeeper,
        Position::Defender,
        Position::Midfielder,
        Position::Forward,
    ];

    /// Index into the position-keyed constant weight tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Position::Goalkeeper => 0,
            Position::Defender => 1,
            Position::Midfielder => 2,
            Position::Forward => 3,
        }
    }

    pub fn is_goalkeeper(self) -> bool {
        matches!(self, Position::Goalkeeper)
    }

    /// Display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Position::Goalkeeper => "Goalkeeper",
            Position::Defender => "Defender",
            Position::Midfielder => "Midfielder",
            Position::Forward => "Forward",
        }
    }

    /// Abbreviation used on the wire and in flat import records.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DF",
            Position::Midfielder => "MF",
            Position::Forward => "FW",
        }
    }
}

impl FromStr for Position {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "GK" | "Goalkeeper" => Ok(Position::Goalkeeper),
            "DF" | "Defender" => Ok(Position::Defender),
            "MF" | "Midfielder" => Ok(Position::Midfielder),
            "FW" | "Forward" => Ok(Position::Forward),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}
