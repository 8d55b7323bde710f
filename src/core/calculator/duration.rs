//! Per-entry aggregates: presence minutes, break minutes and the day's bounds.

use crate::models::{TimeEntry, WorkSession};
use crate::utils::time::wrapped_minutes_between;
use chrono::NaiveTime;

/// Presence minutes across all closed sessions of the entry.
/// Open sessions (no clock-out) do not count. Breaks are not subtracted.
pub fn work_minutes(entry: &TimeEntry) -> i64 {
    let total: i64 = entry
        .sessions
        .iter()
        .filter_map(WorkSession::span)
        .map(|(start, end)| wrapped_minutes_between(start, end))
        .sum();
    total.max(0)
}

/// Sum of all complete breaks (start and end both recorded).
pub fn total_break_minutes(sessions: &[WorkSession]) -> i64 {
    sessions
        .iter()
        .filter_map(WorkSession::break_span)
        .map(|(start, end)| wrapped_minutes_between(start, end))
        .sum()
}

pub fn earliest_clock_in(entry: &TimeEntry) -> Option<NaiveTime> {
    entry.sessions.iter().map(|s| s.clock_in).min()
}

pub fn latest_clock_out(entry: &TimeEntry) -> Option<NaiveTime> {
    entry.sessions.iter().filter_map(|s| s.clock_out).max()
}
