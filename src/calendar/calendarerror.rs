use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CalendarError {
    #[error("Easter cannot be computed for year {0} (supported range 1583..=4099)")]
    EasterOutOfRange(i32),
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidDate {
        year: i32,
        month: u32,
        day: u32
    },
    #[error("shifting {date} by {days} days leaves the supported date range")]
    DateOverflow {
        date: NaiveDate,
        days: i64
    }
}

impl CalendarError {
    pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CalendarError::InvalidDate { year, month, day })
    }
}
