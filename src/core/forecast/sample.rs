//! Training-sample selection shared by the day cards and the time series.

use crate::core::calculator::{earliest_clock_in, latest_clock_out, total_break_minutes, work_minutes};
use crate::models::TimeEntry;
use crate::utils::date::weekday_index;
use crate::utils::time::minutes_of_day;
use chrono::NaiveDate;
use tracing::debug;

/// Worked entries (type work, at least one session), oldest first.
pub(crate) fn worked_corpus(entries: &[TimeEntry]) -> Vec<&TimeEntry> {
    let mut corpus: Vec<&TimeEntry> = entries.iter().filter(|e| e.is_worked()).collect();
    corpus.sort_by_key(|e| e.date);
    corpus
}

/// Entries sharing `target`'s weekday when there are at least `min_same_weekday`
/// of them, otherwise the whole corpus. Order is preserved.
pub(crate) fn select_sample<'a>(
    corpus: &[&'a TimeEntry],
    target: NaiveDate,
    min_same_weekday: usize,
) -> Vec<&'a TimeEntry> {
    let weekday = weekday_index(target);
    let same_day: Vec<&TimeEntry> = corpus
        .iter()
        .copied()
        .filter(|e| weekday_index(e.date) == weekday)
        .collect();

    if same_day.len() >= min_same_weekday {
        debug!(date = %target, weekday, samples = same_day.len(), "using same-weekday sample");
        same_day
    } else {
        debug!(
            date = %target,
            weekday,
            same_weekday = same_day.len(),
            samples = corpus.len(),
            "too few same-weekday entries, falling back to full history"
        );
        corpus.to_vec()
    }
}

/// Per-entry metric columns, in sample order.
#[derive(Debug, Default)]
pub(crate) struct SampleMetrics {
    pub work_minutes: Vec<f64>,
    pub break_minutes: Vec<f64>,
    /// Earliest clock-in per entry that has one.
    pub clock_in_minutes: Vec<f64>,
    /// Latest clock-out per entry that has one.
    pub departure_minutes: Vec<f64>,
}

impl SampleMetrics {
    pub fn collect(entries: &[&TimeEntry]) -> Self {
        let mut m = SampleMetrics::default();
        for e in entries {
            m.work_minutes.push(work_minutes(e) as f64);
            m.break_minutes.push(total_break_minutes(&e.sessions) as f64);
            if let Some(t) = earliest_clock_in(e) {
                m.clock_in_minutes.push(minutes_of_day(t) as f64);
            }
            if let Some(t) = latest_clock_out(e) {
                m.departure_minutes.push(minutes_of_day(t) as f64);
            }
        }
        m
    }

    pub fn office_hours(&self) -> Vec<f64> {
        self.work_minutes.iter().map(|m| m / 60.0).collect()
    }
}
