//! Week-level analytics over the raw time log.

use crate::core::calculator::{total_break_minutes, work_minutes};
use crate::models::{DaySummary, EntryType, MonthSummary, TimeEntry, WeekSummary, WeeklyTotal};
use crate::utils::date::{monday_of, shift_days, short_label, weekday_short};
use crate::utils::formatting::round_to;
use chrono::NaiveDate;

/// The seven dates (Monday first) of the week `week_offset` weeks from the current one.
pub fn week_dates(today: NaiveDate, week_offset: i64) -> [NaiveDate; 7] {
    let monday = shift_days(monday_of(today), week_offset.saturating_mul(7));
    std::array::from_fn(|i| shift_days(monday, i as i64))
}

pub fn week_summary(entries: &[TimeEntry], today: NaiveDate, week_offset: i64) -> WeekSummary {
    let days: Vec<DaySummary> = week_dates(today, week_offset)
        .into_iter()
        .map(|date| {
            let entry = entries
                .iter()
                .find(|e| e.kind == EntryType::Work && e.date == date);
            let total_minutes = entry.map(work_minutes).unwrap_or(0);
            let break_minutes = entry.map(|e| total_break_minutes(&e.sessions)).unwrap_or(0);
            DaySummary {
                date,
                day_label: weekday_short(date),
                total_minutes,
                break_minutes,
                net_minutes: (total_minutes - break_minutes).max(0),
                sessions: entry.map(|e| e.sessions.len()).unwrap_or(0),
            }
        })
        .collect();

    let worked: Vec<&DaySummary> = days.iter().filter(|d| d.total_minutes > 0).collect();
    let total_minutes: i64 = days.iter().map(|d| d.total_minutes).sum();
    let total_hours = total_minutes as f64 / 60.0;

    // First of equally long days wins.
    let longest_day = worked
        .iter()
        .copied()
        .reduce(|max, d| if d.total_minutes > max.total_minutes { d } else { max })
        .cloned();

    WeekSummary {
        total_hours,
        avg_hours_per_day: if worked.is_empty() {
            0.0
        } else {
            total_hours / worked.len() as f64
        },
        total_break_minutes: days.iter().map(|d| d.break_minutes).sum(),
        longest_day,
        days_worked: worked.len(),
        days,
    }
}

/// Totals of the last `weeks` weeks ending with the current one, oldest first.
pub fn weekly_totals(entries: &[TimeEntry], today: NaiveDate, weeks: u32) -> Vec<WeeklyTotal> {
    totals_ending_at(entries, today, 0, weeks)
}

/// Four-week block ending `month_offset * 4` weeks from the current week.
/// The label is the month of the Thursday in the block's third week.
pub fn month_summary(entries: &[TimeEntry], today: NaiveDate, month_offset: i64) -> MonthSummary {
    let last_week = month_offset.saturating_mul(4);
    let mid = week_dates(today, last_week.saturating_sub(2))[3];
    MonthSummary {
        week_summaries: totals_ending_at(entries, today, last_week, 4),
        month_label: mid.format("%B %Y").to_string(),
    }
}

fn totals_ending_at(entries: &[TimeEntry], today: NaiveDate, last_week: i64, weeks: u32) -> Vec<WeeklyTotal> {
    (0..weeks as i64)
        .rev()
        .map(|back| {
            let offset = last_week.saturating_sub(back);
            let dates = week_dates(today, offset);
            let summary = week_summary(entries, today, offset);
            WeeklyTotal {
                label: format!("{} - {}", short_label(dates[0]), short_label(dates[6])),
                total_hours: round_to(summary.total_hours, 1),
            }
        })
        .collect()
}
