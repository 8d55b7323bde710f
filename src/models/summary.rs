use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: NaiveDate,
    pub day_label: String,
    pub total_minutes: i64,
    pub break_minutes: i64,
    pub net_minutes: i64,
    pub sessions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekSummary {
    pub days: Vec<DaySummary>,
    pub total_hours: f64,
    pub avg_hours_per_day: f64,
    pub total_break_minutes: i64,
    pub longest_day: Option<DaySummary>,
    pub days_worked: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTotal {
    pub label: String,
    pub total_hours: f64,
}

/// Four consecutive weekly totals, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSummary {
    pub week_summaries: Vec<WeeklyTotal>,
    /// e.g. `June 2025`
    pub month_label: String,
}
