use std::fmt;

use serde::Serialize;

const SUNDAY_LETTERS: [char; 3] = ['A', 'B', 'C'];

/// Position of a year in a lectionary's Sunday and weekday reading cycles,
/// both zero-based: `(0, 0)` is Sunday year A, weekday year 1.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct CycleYear {
    sunday: u32,
    weekday: u32
}

impl CycleYear {
    pub fn new(sunday: u32, weekday: u32) -> CycleYear {
        CycleYear { sunday, weekday }
    }

    pub fn sunday(&self) -> u32 {
        self.sunday
    }

    pub fn weekday(&self) -> u32 {
        self.weekday
    }

    /// 'A', 'B' or 'C'; Sunday cycles are three years long.
    pub fn sunday_letter(&self) -> char {
        SUNDAY_LETTERS[self.sunday as usize % SUNDAY_LETTERS.len()]
    }

    /// 1-based weekday cycle number.
    pub fn weekday_number(&self) -> u32 {
        self.weekday + 1
    }
}

impl fmt::Display for CycleYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.sunday_letter(), self.weekday_number())
    }
}

pub trait Lectionary: Send + Sync {
    fn cyclic_year(&self, year: i32) -> CycleYear;
}
