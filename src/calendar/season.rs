use std::fmt;

use serde::{
    Serialize,
    Deserialize
};

/// Liturgical seasons. A date belongs to exactly one of them; the variants
/// carry no ordering even though the church year cycles through them.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Season {
    Ordinary = 0,
    Advent = 1,
    Christmas = 2,
    Epiphany = 3,
    Lent = 4,
    Easter = 5
}

pub const UNKNOWN_SEASON_NAME: &str = "Unknown";

impl Season {
    pub const ALL: [Season; 6] = [
        Season::Ordinary,
        Season::Advent,
        Season::Christmas,
        Season::Epiphany,
        Season::Lent,
        Season::Easter
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Season::Ordinary => "Ordinary Time",
            Season::Advent => "Advent",
            Season::Christmas => "Christmas",
            Season::Epiphany => "Epiphany",
            Season::Lent => "Lent",
            Season::Easter => "Easter"
        }
    }

    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Season> {
        Season::ALL.get(code as usize).copied()
    }

    /// Joins the weekday and the season name in generated day names.
    pub fn preposition(&self) -> &'static str {
        match self {
            Season::Christmas | Season::Easter => " of ",
            Season::Epiphany => " after the ",
            _ => " in "
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Display name for a numeric season code. Display-only callers must never
/// fail here, so an unrecognised code yields "Unknown".
pub fn season_name(code: u8) -> &'static str {
    Season::from_code(code).map_or(UNKNOWN_SEASON_NAME, |season| season.name())
}
