use chrono::{
    Datelike,
    NaiveDate
};
use log::trace;
use serde::Serialize;

use crate::text::ordinal::OrdinalFormatter;

use super::calendarerror::CalendarError;
use super::dayname;
use super::period::Period;
use super::season::Season;

/// Advent Sunday counted back from the last Sunday before Christmas.
const ADVENT_SUNDAY_BEFORE_LAST: Period = Period::days(-28);
/// The fourth Sunday before Christmas, counted the same way.
const FOURTH_SUNDAY_BEFORE_LAST: Period = Period::weeks(-3);

/// A date's season together with its zero-based day offset from the first
/// day of that season.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct SeasonDay {
    season: Season,
    offset: i64
}

impl SeasonDay {
    pub fn new(season: Season, offset: i64) -> SeasonDay {
        SeasonDay { season, offset }
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// 1-based week of the season the offset falls in.
    pub fn week_in_season(&self) -> i64 {
        self.offset / 7 + 1
    }
}

/// One church tradition's calendar.
///
/// Implementors supply the anchor dates; season boundaries, offsets and day
/// names are derived from those anchors alone. Anchor years outside what the
/// date arithmetic supports fail with the underlying [`CalendarError`].
pub trait ChurchCalendar: Send + Sync {
    fn easter(&self, year: i32) -> Result<NaiveDate, CalendarError>;

    fn pentecost(&self, year: i32) -> Result<NaiveDate, CalendarError>;

    fn trinity_sunday(&self, year: i32) -> Result<NaiveDate, CalendarError>;

    fn christmas(&self, year: i32) -> Result<NaiveDate, CalendarError>;

    fn epiphany(&self, year: i32) -> Result<NaiveDate, CalendarError>;

    fn ash_wednesday(&self, year: i32) -> Result<NaiveDate, CalendarError>;

    /// Word forms for week numbers in generated day names.
    fn ordinal_formatter(&self) -> &OrdinalFormatter;

    /// The last Sunday strictly before Christmas Day.
    fn sunday_before_christmas(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        let christmas = self.christmas(year)?;
        let back = christmas.weekday().number_from_monday() as i32;
        Period::days(-back).shift(christmas)
    }

    /// Start of Advent: four weeks before the last Sunday before Christmas.
    /// Advent spans 29 to 35 days, a week more than the traditional four
    /// Sundays; see [`ChurchCalendar::fourth_sunday_before_christmas`].
    fn advent_sunday(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        ADVENT_SUNDAY_BEFORE_LAST.shift(self.sunday_before_christmas(year)?)
    }

    /// The traditional first Sunday of Advent, exactly four Sundays before
    /// Christmas Day. Season classification does not use it.
    fn fourth_sunday_before_christmas(&self, year: i32) -> Result<NaiveDate, CalendarError> {
        FOURTH_SUNDAY_BEFORE_LAST.shift(self.sunday_before_christmas(year)?)
    }

    fn is_advent(&self, date: NaiveDate) -> Result<bool, CalendarError> {
        let year = date.year();
        Ok(self.advent_sunday(year)? <= date && date < self.christmas(year)?)
    }

    /// Christmastide crosses the new year, so this is a union of the tail of
    /// the year from Christmas Day and its head before Epiphany.
    fn is_christmas(&self, date: NaiveDate) -> Result<bool, CalendarError> {
        let year = date.year();
        Ok(date >= self.christmas(year)? || date < self.epiphany(year)?)
    }

    /// Epiphany season runs up to the start of Lent.
    fn is_epiphany(&self, date: NaiveDate) -> Result<bool, CalendarError> {
        let year = date.year();
        Ok(self.epiphany(year)? <= date && date < self.ash_wednesday(year)?)
    }

    fn is_lent(&self, date: NaiveDate) -> Result<bool, CalendarError> {
        let year = date.year();
        Ok(self.ash_wednesday(year)? <= date && date < self.easter(year)?)
    }

    fn is_easter(&self, date: NaiveDate) -> Result<bool, CalendarError> {
        let year = date.year();
        Ok(self.easter(year)? <= date && date < self.pentecost(year)?)
    }

    fn is_ordinary(&self, date: NaiveDate) -> Result<bool, CalendarError> {
        Ok(!(self.is_advent(date)?
            || self.is_christmas(date)?
            || self.is_epiphany(date)?
            || self.is_lent(date)?
            || self.is_easter(date)?))
    }

    fn season(&self, date: NaiveDate) -> Result<Season, CalendarError> {
        let season = if self.is_advent(date)? {
            Season::Advent
        } else if self.is_christmas(date)? {
            Season::Christmas
        } else if self.is_epiphany(date)? {
            Season::Epiphany
        } else if self.is_lent(date)? {
            Season::Lent
        } else if self.is_easter(date)? {
            Season::Easter
        } else {
            Season::Ordinary
        };
        trace!("{} falls in {}", date, season);
        Ok(season)
    }

    /// Ordinary Time is counted from Pentecost, which only reads naturally
    /// for the first weeks after Trinity; see [`ChurchCalendar::days_until_advent`]
    /// for the count back from the end of the year.
    fn season_days(&self, date: NaiveDate) -> Result<SeasonDay, CalendarError> {
        let year = date.year();
        let season = self.season(date)?;
        let start = match season {
            Season::Advent => self.advent_sunday(year)?,
            Season::Christmas => {
                if date.month() == 1 {
                    self.christmas(year - 1)?
                } else {
                    self.christmas(year)?
                }
            },
            Season::Epiphany => self.epiphany(year)?,
            Season::Lent => self.ash_wednesday(year)?,
            Season::Easter => self.easter(year)?,
            Season::Ordinary => self.pentecost(year)?
        };
        Ok(SeasonDay::new(season, (date - start).num_days()))
    }

    /// Days left until Advent Sunday for a date in Ordinary Time, `None` for
    /// any other season.
    fn days_until_advent(&self, date: NaiveDate) -> Result<Option<i64>, CalendarError> {
        if self.season(date)? != Season::Ordinary {
            return Ok(None);
        }
        let advent_sunday = self.advent_sunday(date.year())?;
        Ok(Some((advent_sunday - date).num_days()))
    }

    fn liturgical_week(&self, date: NaiveDate) -> Result<String, CalendarError> {
        dayname::liturgical_week(self, date)
    }
}
