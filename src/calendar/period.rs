use std::fmt;

use chrono::{
    Days,
    NaiveDate
};

use super::calendarerror::CalendarError;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum TimeUnit {
    Days,
    Weeks
}

impl TimeUnit {
    pub fn to_char(&self) -> char {
        match self {
            TimeUnit::Days => 'D',
            TimeUnit::Weeks => 'W'
        }
    }

    fn days_per_unit(&self) -> i64 {
        match self {
            TimeUnit::Days => 1,
            TimeUnit::Weeks => 7
        }
    }
}

/// A signed whole-day distance between liturgical anchors, e.g. Easter to
/// Pentecost is `Period::weeks(7)`.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Period {
    number: i32,
    unit: TimeUnit
}

impl Period {
    pub const fn new(number: i32, unit: TimeUnit) -> Period {
        Period { number, unit }
    }

    pub const fn days(number: i32) -> Period {
        Period::new(number, TimeUnit::Days)
    }

    pub const fn weeks(number: i32) -> Period {
        Period::new(number, TimeUnit::Weeks)
    }

    pub fn number(&self) -> i32 {
        self.number
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn total_days(&self) -> i64 {
        self.number as i64 * self.unit.days_per_unit()
    }

    /// Moves `date` by this period. Leaving chrono's representable range is
    /// reported instead of panicking.
    pub fn shift(&self, date: NaiveDate) -> Result<NaiveDate, CalendarError> {
        let days = self.total_days();
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            date.checked_add_days(magnitude)
        } else {
            date.checked_sub_days(magnitude)
        };
        shifted.ok_or(CalendarError::DateOverflow { date, days })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.number, self.unit.to_char())
    }
}
