use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayLabel {
    Yesterday,
    Today,
    Tomorrow,
}

impl DayLabel {
    pub const ALL: [DayLabel; 3] = [DayLabel::Yesterday, DayLabel::Today, DayLabel::Tomorrow];

    /// Offset in days from today.
    pub fn offset(&self) -> i64 {
        match self {
            DayLabel::Yesterday => -1,
            DayLabel::Today => 0,
            DayLabel::Tomorrow => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayLabel::Yesterday => "Yesterday",
            DayLabel::Today => "Today",
            DayLabel::Tomorrow => "Tomorrow",
        }
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Near-term card for one relative day. Exactly one side (actual or predicted) is populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPrediction {
    pub label: DayLabel,
    pub date: NaiveDate,
    pub predicted_work_hours: Option<f64>,
    pub predicted_break_minutes: Option<i64>,
    pub predicted_departure: Option<String>,
    pub actual_work_hours: Option<f64>,
    pub actual_break_minutes: Option<i64>,
    pub actual_departure: Option<String>,
    pub is_actual: bool,
}

impl DayPrediction {
    pub fn actual(
        label: DayLabel,
        date: NaiveDate,
        work_hours: f64,
        break_minutes: i64,
        departure: Option<String>,
    ) -> Self {
        Self {
            label,
            date,
            predicted_work_hours: None,
            predicted_break_minutes: None,
            predicted_departure: None,
            actual_work_hours: Some(work_hours),
            actual_break_minutes: Some(break_minutes),
            actual_departure: departure,
            is_actual: true,
        }
    }

    pub fn predicted(
        label: DayLabel,
        date: NaiveDate,
        work_hours: f64,
        break_minutes: i64,
        departure: String,
    ) -> Self {
        Self {
            label,
            date,
            predicted_work_hours: Some(work_hours),
            predicted_break_minutes: Some(break_minutes),
            predicted_departure: Some(departure),
            actual_work_hours: None,
            actual_break_minutes: None,
            actual_departure: None,
            is_actual: false,
        }
    }

    /// Whichever side is populated.
    pub fn work_hours(&self) -> Option<f64> {
        self.actual_work_hours.or(self.predicted_work_hours)
    }

    pub fn break_minutes(&self) -> Option<i64> {
        self.actual_break_minutes.or(self.predicted_break_minutes)
    }

    pub fn departure(&self) -> Option<&str> {
        self.actual_departure
            .as_deref()
            .or(self.predicted_departure.as_deref())
    }
}
