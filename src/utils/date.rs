use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn parse_date_strict(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Shift a date by a signed number of days, saturating at `NaiveDate::MIN`/`MAX`.
pub fn shift_days(d: NaiveDate, offset: i64) -> NaiveDate {
    let step = Days::new(offset.unsigned_abs());
    if offset >= 0 {
        d.checked_add_days(step).unwrap_or(NaiveDate::MAX)
    } else {
        d.checked_sub_days(step).unwrap_or(NaiveDate::MIN)
    }
}

/// Day-of-week index with Sunday = 0 … Saturday = 6.
pub fn weekday_index(d: NaiveDate) -> u32 {
    d.weekday().num_days_from_sunday()
}

/// Monday of the week containing `d`.
pub fn monday_of(d: NaiveDate) -> NaiveDate {
    shift_days(d, -(d.weekday().num_days_from_monday() as i64))
}

/// Chart label, e.g. `Jun 5`.
pub fn short_label(d: NaiveDate) -> String {
    d.format("%b %-d").to_string()
}

pub fn weekday_short(d: NaiveDate) -> String {
    d.format("%a").to_string()
}
