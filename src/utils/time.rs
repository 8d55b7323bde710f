//! Time utilities: parsing HH:MM, wrapped duration computations, clock rendering and serde codecs.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

static HHMM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("valid HH:MM regex"));

/// Parse a zero-padded `HH:MM` string. Anything else (e.g. `9:00`, `09:00:00`) is rejected.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    if !HHMM_RE.is_match(t) {
        return None;
    }
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_time_strict(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Minutes elapsed since midnight.
pub fn minutes_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Minutes from `start` to `end`; an `end` earlier in the day wraps past midnight.
pub fn wrapped_minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    let mins = minutes_of_day(end) - minutes_of_day(start);
    if mins < 0 { mins + MINUTES_PER_DAY } else { mins }
}

/// Render a fractional minutes-from-midnight value as `HH:MM`, hour wrapped modulo 24.
pub fn format_clock_minutes(mins: f64) -> String {
    let total = mins.round() as i64;
    let h = total.div_euclid(60).rem_euclid(24);
    let m = total.rem_euclid(60);
    format!("{:02}:{:02}", h, m)
}

/// Serde codec for a required `HH:MM` field.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_time(*t))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid HH:MM time '{raw}'")))
    }
}

/// Serde codec for a nullable `HH:MM` field.
pub mod hhmm_opt {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(t: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match t {
            Some(t) => s.serialize_str(&super::format_time(*t)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        match Option::<String>::deserialize(d)? {
            None => Ok(None),
            Some(raw) if raw.is_empty() => Ok(None),
            Some(raw) => super::parse_time(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid HH:MM time '{raw}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        parse_time(s).unwrap()
    }

    #[test]
    fn parse_time_requires_zero_padding() {
        assert!(parse_time("09:05").is_some());
        assert!(parse_time("9:05").is_none());
        assert!(parse_time("09:05:00").is_none());
        assert!(parse_time("25:00").is_none());
        assert!(parse_time("ab:cd").is_none());
    }

    #[test]
    fn wrapped_minutes_handles_midnight() {
        assert_eq!(wrapped_minutes_between(t("09:00"), t("17:00")), 480);
        assert_eq!(wrapped_minutes_between(t("23:00"), t("01:00")), 120);
        assert_eq!(wrapped_minutes_between(t("12:00"), t("12:00")), 0);
    }

    #[test]
    fn clock_minutes_wrap_and_round() {
        assert_eq!(format_clock_minutes(1050.0), "17:30");
        assert_eq!(format_clock_minutes(1439.6), "00:00");
        assert_eq!(format_clock_minutes(1500.0), "01:00");
        assert_eq!(format_clock_minutes(539.4), "08:59");
    }
}
