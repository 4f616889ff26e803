use chrono::{
    Datelike,
    NaiveDate
};
use log::debug;

use super::calendarerror::CalendarError;
use super::churchcalendar::ChurchCalendar;
use super::period::Period;
use super::season::Season;

pub const CHRISTMAS_EVE: &str = "Christmas Eve";

/// Named days keyed by season and zero-based offset from the season's start.
pub const SPECIAL_DAYS: &[(Season, i64, &str)] = &[
    (Season::Advent, 0, "Advent Sunday"),

    (Season::Christmas, 0, "Christmas Day"),
    (Season::Christmas, 1, "Saint Stephen"),
    (Season::Christmas, 2, "Saint John the Evangelist"),
    (Season::Christmas, 3, "The Holy Innocents"),
    (Season::Christmas, 7, "The Naming and Circumcision of Jesus"),

    (Season::Epiphany, 0, "The Epiphany"),

    (Season::Lent, 0, "Ash Wednesday"),
    (Season::Lent, 25, "Mothering Sunday"),
    (Season::Lent, 32, "Passion Sunday"),
    (Season::Lent, 39, "Palm Sunday"),
    (Season::Lent, 43, "Maundy Thursday"),
    (Season::Lent, 44, "Good Friday"),
    (Season::Lent, 45, "Holy Saturday"),

    (Season::Easter, 0, "Easter Sunday"),
    (Season::Easter, 1, "Easter Monday"),
    (Season::Easter, 35, "Rogation Sunday"),
    (Season::Easter, 39, "Ascension Day"),
    (Season::Easter, 42, "Sunday after Ascension Day"),

    (Season::Ordinary, 0, "Pentecost"),
    (Season::Ordinary, 7, "Trinity Sunday"),
    (Season::Ordinary, 11, "Corpus Christi")
];

/// Pre-Lent names keyed by the number of days left until Ash Wednesday.
pub const PRE_LENT_DAYS: &[(i64, &str)] = &[
    (1, "Shrove Tuesday"),
    (3, "Quinquagesima"),
    (10, "Sexagesima"),
    (17, "Septuagesima")
];

pub fn special_day(season: Season, offset: i64) -> Option<&'static str> {
    SPECIAL_DAYS
        .iter()
        .find(|(s, o, _)| *s == season && *o == offset)
        .map(|(_, _, name)| *name)
}

pub fn pre_lent_day(days_to_ash_wednesday: i64) -> Option<&'static str> {
    PRE_LENT_DAYS
        .iter()
        .find(|(days, _)| *days == days_to_ash_wednesday)
        .map(|(_, name)| *name)
}

/// Liturgical name of `date`.
///
/// Rules, first match wins:
/// 1. the eve of Christmas Day;
/// 2. in Epiphany season, the pre-Lent Sundays and Shrove Tuesday, counted
///    back from Ash Wednesday;
/// 3. the [`SPECIAL_DAYS`] table;
/// 4. "<Ordinal> <Weekday> <preposition> <Season>", e.g. "Third Sunday in Lent".
pub fn liturgical_week<C>(calendar: &C, date: NaiveDate) -> Result<String, CalendarError>
where
    C: ChurchCalendar + ?Sized
{
    let year = date.year();

    if Period::days(1).shift(date)? == calendar.christmas(year)? {
        debug!("{}: christmas eve", date);
        return Ok(CHRISTMAS_EVE.to_owned());
    }

    let season_day = calendar.season_days(date)?;
    let season = season_day.season();

    if season == Season::Epiphany {
        let days_to_lent = (calendar.ash_wednesday(year)? - date).num_days();
        if let Some(name) = pre_lent_day(days_to_lent) {
            debug!("{}: {} days before Ash Wednesday -> {}", date, days_to_lent, name);
            return Ok(name.to_owned());
        }
    }

    if let Some(name) = special_day(season, season_day.offset()) {
        debug!("{}: special day ({}, {}) -> {}", date, season, season_day.offset(), name);
        return Ok(name.to_owned());
    }

    let week = season_day.week_in_season() as u64;
    let name = format!(
        "{} {}{}{}",
        calendar.ordinal_formatter().ordinal(week),
        date.format("%A"),
        season.preposition(),
        season.name()
    );
    debug!("{}: generic ({}, week {}) -> {}", date, season, week, name);
    Ok(name)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn special_day_keys_are_unique() {
        let mut keys = HashSet::new();
        for (season, offset, name) in SPECIAL_DAYS {
            assert!(keys.insert((*season, *offset)), "duplicate key for {}", name);
        }
    }

    #[test]
    fn special_day_offsets_lie_inside_fixed_length_seasons() {
        for (season, offset, name) in SPECIAL_DAYS {
            let bound = match season {
                Season::Advent => 29,
                Season::Christmas => 12,
                Season::Lent => 46,
                Season::Easter => 49,
                _ => i64::MAX
            };
            assert!(*offset >= 0 && *offset < bound, "{} out of season", name);
        }
    }

    #[test]
    fn lookups() {
        assert_eq!(special_day(Season::Lent, 44), Some("Good Friday"));
        assert_eq!(special_day(Season::Easter, 0), Some("Easter Sunday"));
        assert_eq!(special_day(Season::Easter, 44), None);
        assert_eq!(pre_lent_day(1), Some("Shrove Tuesday"));
        assert_eq!(pre_lent_day(17), Some("Septuagesima"));
        assert_eq!(pre_lent_day(2), None);
    }
}
