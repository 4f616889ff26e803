use chrono::NaiveDate;
use log::trace;

use super::calendarerror::CalendarError;

pub const FIRST_COMPUTUS_YEAR: i32 = 1583;
pub const LAST_COMPUTUS_YEAR: i32 = 4099;

/// Gregorian Easter Sunday for `year`.
///
/// Closed-form computus over the Metonic cycle (`g`), the century corrections
/// and the weekday of the paschal full moon. The result always lies in
/// 22 March ..= 25 April.
pub fn western_easter(year: i32) -> Result<NaiveDate, CalendarError> {
    if !(FIRST_COMPUTUS_YEAR..=LAST_COMPUTUS_YEAR).contains(&year) {
        return Err(CalendarError::EasterOutOfRange(year));
    }

    let g = year % 19;
    let c = year / 100;
    let c_div_4 = c / 4;
    let h = (c - c_div_4 - (8 * c + 13) / 25 + 19 * g + 15) % 30;
    let h_div_28 = h / 28;
    let i = h - h_div_28 * (1 - h_div_28 * (29 / (h + 1)) * ((21 - g) / 11));
    let j = (year + year / 4 + i + 2 - c + c_div_4) % 7;
    // days from 21 March to the Sunday, may be as low as -6
    let p = i - j;

    let day = (1 + (p + 27 + (p + 6) / 40) % 31) as u32;
    let month = (3 + (p + 26) / 30) as u32;

    trace!("computus {}: g={} h={} i={} j={} -> {}-{}", year, g, h, i, j, month, day);
    CalendarError::ymd(year, month, day)
}
