//! Anchor dates, season boundaries and season offsets of the Western calendar.

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;

use churchcal::calendar::churchcalendar::{ChurchCalendar, SeasonDay};
use churchcal::calendar::season::Season;
use churchcal::calendar::westernchurchcalendar::WesternChurchCalendar;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..=2200, 1u32..=366).prop_filter_map("day outside year", |(y, o)| NaiveDate::from_yo_opt(y, o))
}

/// Every predicate that holds for `d`.
fn matching_seasons(cal: &WesternChurchCalendar, d: NaiveDate) -> Vec<Season> {
    let mut seasons = Vec::new();
    if cal.is_advent(d).unwrap() {
        seasons.push(Season::Advent);
    }
    if cal.is_christmas(d).unwrap() {
        seasons.push(Season::Christmas);
    }
    if cal.is_epiphany(d).unwrap() {
        seasons.push(Season::Epiphany);
    }
    if cal.is_lent(d).unwrap() {
        seasons.push(Season::Lent);
    }
    if cal.is_easter(d).unwrap() {
        seasons.push(Season::Easter);
    }
    if cal.is_ordinary(d).unwrap() {
        seasons.push(Season::Ordinary);
    }
    seasons
}

#[test]
fn anchor_dates_2023() {
    let cal = WesternChurchCalendar::new();
    assert_eq!(cal.christmas(2023).unwrap(), date(2023, 12, 25));
    assert_eq!(cal.ash_wednesday(2023).unwrap(), date(2023, 2, 22));
    assert_eq!(cal.pentecost(2023).unwrap(), date(2023, 5, 28));
    assert_eq!(cal.trinity_sunday(2023).unwrap(), date(2023, 6, 4));
    assert_eq!(cal.advent_sunday(2023).unwrap(), date(2023, 11, 26));
    assert_eq!(cal.fourth_sunday_before_christmas(2023).unwrap(), date(2023, 12, 3));
}

#[test]
fn christmastide_spans_the_new_year() {
    let cal = WesternChurchCalendar::new();
    let mut d = date(2023, 12, 25);
    let mut expected_offset = 0;
    while d < date(2024, 1, 6) {
        assert!(cal.is_christmas(d).unwrap(), "{}", d);
        assert_eq!(matching_seasons(&cal, d), vec![Season::Christmas], "{}", d);
        assert_eq!(cal.season_days(d).unwrap(), SeasonDay::new(Season::Christmas, expected_offset));
        d = d.succ_opt().unwrap();
        expected_offset += 1;
    }
    assert_eq!(cal.season_days(date(2024, 1, 1)).unwrap().offset(), 7);
    assert_eq!(cal.season_days(date(2024, 1, 6)).unwrap(), SeasonDay::new(Season::Epiphany, 0));
    assert_eq!(cal.season(date(2023, 12, 24)).unwrap(), Season::Advent);
}

#[test]
fn season_seams_2023() {
    let cal = WesternChurchCalendar::new();
    assert_eq!(cal.season_days(date(2023, 2, 21)).unwrap(), SeasonDay::new(Season::Epiphany, 46));
    assert_eq!(cal.season_days(date(2023, 2, 22)).unwrap(), SeasonDay::new(Season::Lent, 0));
    assert_eq!(cal.season_days(date(2023, 4, 8)).unwrap(), SeasonDay::new(Season::Lent, 45));
    assert_eq!(cal.season_days(date(2023, 4, 9)).unwrap(), SeasonDay::new(Season::Easter, 0));
    assert_eq!(cal.season_days(date(2023, 5, 27)).unwrap(), SeasonDay::new(Season::Easter, 48));
    assert_eq!(cal.season_days(date(2023, 5, 28)).unwrap(), SeasonDay::new(Season::Ordinary, 0));
    assert_eq!(cal.season_days(date(2023, 11, 25)).unwrap().season(), Season::Ordinary);
    assert_eq!(cal.season_days(date(2023, 11, 26)).unwrap(), SeasonDay::new(Season::Advent, 0));
    assert_eq!(cal.season_days(date(2023, 12, 24)).unwrap(), SeasonDay::new(Season::Advent, 28));
}

#[test]
fn ordinary_time_counts_from_pentecost() {
    let cal = WesternChurchCalendar::new();
    let late_autumn = date(2023, 11, 19);
    assert_eq!(cal.season_days(late_autumn).unwrap(), SeasonDay::new(Season::Ordinary, 175));
    assert_eq!(cal.days_until_advent(late_autumn).unwrap(), Some(7));
    assert_eq!(cal.days_until_advent(date(2023, 4, 9)).unwrap(), None);
}

/// Advent runs from four weeks before the last Sunday before Christmas, so
/// it is longer than four weeks: 29 days when Christmas is a Monday, up to 35
/// when Christmas is a Sunday.
#[test]
fn advent_is_longer_than_four_weeks() {
    let cal = WesternChurchCalendar::new();
    // Christmas 2023 is a Monday
    assert_eq!(cal.season_days(date(2023, 12, 24)).unwrap().offset(), 28);
    // Christmas 2022 is a Sunday
    assert_eq!(cal.season_days(date(2022, 12, 24)).unwrap(), SeasonDay::new(Season::Advent, 34));
    assert_eq!(cal.season(date(2022, 11, 19)).unwrap(), Season::Ordinary);
    assert_eq!(cal.season(date(2022, 11, 20)).unwrap(), Season::Advent);
}

#[test]
fn shared_between_threads() {
    let cal = std::sync::Arc::new(WesternChurchCalendar::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let cal = cal.clone();
            std::thread::spawn(move || cal.liturgical_week(date(2023, 4, 23)).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "Third Sunday of Easter");
    }
}

proptest! {
    #[test]
    fn anchors_are_ordered(year in 1900i32..=2200) {
        let cal = WesternChurchCalendar::new();
        let ash = cal.ash_wednesday(year).unwrap();
        let easter = cal.easter(year).unwrap();
        let pentecost = cal.pentecost(year).unwrap();
        let trinity = cal.trinity_sunday(year).unwrap();
        prop_assert!(ash < easter && easter < pentecost && pentecost < trinity);
        prop_assert!(cal.advent_sunday(year).unwrap() < cal.christmas(year).unwrap());
    }

    #[test]
    fn movable_feasts_fall_on_their_weekdays(year in 1900i32..=2200) {
        let cal = WesternChurchCalendar::new();
        prop_assert_eq!(cal.easter(year).unwrap().weekday(), Weekday::Sun);
        prop_assert_eq!(cal.pentecost(year).unwrap().weekday(), Weekday::Sun);
        prop_assert_eq!(cal.trinity_sunday(year).unwrap().weekday(), Weekday::Sun);
        prop_assert_eq!(cal.advent_sunday(year).unwrap().weekday(), Weekday::Sun);
        prop_assert_eq!(cal.ash_wednesday(year).unwrap().weekday(), Weekday::Wed);
    }

    #[test]
    fn exactly_one_season(d in any_date()) {
        let cal = WesternChurchCalendar::new();
        let seasons = matching_seasons(&cal, d);
        prop_assert_eq!(seasons.len(), 1, "{} matched {:?}", d, seasons);
        prop_assert_eq!(seasons[0], cal.season(d).unwrap());
    }

    #[test]
    fn offsets_stay_inside_season(d in any_date()) {
        let cal = WesternChurchCalendar::new();
        let season_day = cal.season_days(d).unwrap();
        prop_assert!(season_day.offset() >= 0);
        let bound = match season_day.season() {
            Season::Advent => Some(35),
            Season::Christmas => Some(12),
            Season::Lent => Some(46),
            Season::Easter => Some(49),
            Season::Epiphany | Season::Ordinary => None
        };
        if let Some(bound) = bound {
            prop_assert!(season_day.offset() < bound, "{} -> {:?}", d, season_day);
        }
    }
}
