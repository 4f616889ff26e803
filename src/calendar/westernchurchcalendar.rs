use std::sync::OnceLock;

use chrono::NaiveDate;

use crate::text::ordinal::OrdinalFormatter;

use super::calendarerror::CalendarError;
use super::churchcalendar::ChurchCalendar;
use super::computus::western_easter;
use super::period::Period;

const EASTER_TO_PENTECOST: Period = Period::weeks(7);
const PENTECOST_TO_TRINITY: Period = Period::weeks(1);
// forty fasting days plus the six Sundays of Lent
const EASTER_TO_ASH_WEDNESDAY: Period = Period::days(-46);

/// The Western (Gregorian) church calendar.
///
/// Holds no per-year state; the ordinal helper is built on first use and
/// shared by every later call, from any thread.
#[derive(Debug, Default)]
pub struct WesternChurchCalendar {
    ordinals: OnceLock<OrdinalFormatter>
}

impl WesternChurchCalendar {
    pub fn new() -> WesternChurchCalendar {
        WesternChurchCalendar { ordinals: OnceLock::new() }
    }
}

impl ChurchCalendar for WesternChurchCalendar {
    fn easter(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        western_easter(year)
    }

    fn pentecost(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        EASTER_TO_PENTECOST.shift(self.easter(year)?)
    }

    fn trinity_sunday(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        PENTECOST_TO_TRINITY.shift(self.pentecost(year)?)
    }

    fn christmas(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        CalendarError::ymd(year, 12, 25)
    }

    fn epiphany(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        CalendarError::ymd(year, 1, 6)
    }

    fn ash_wednesday(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        EASTER_TO_ASH_WEDNESDAY.shift(self.easter(year)?)
    }

    fn ordinal_formatter(&self) -> &OrdinalFormatter {
        self.ordinals.get_or_init(OrdinalFormatter::new)
    }
}
