// src/export/model.rs

use crate::core::calculator::{earliest_clock_in, latest_clock_out, total_break_minutes, work_minutes};
use crate::models::{DayPrediction, EntryType, ForecastPoint, TimeEntry};
use crate::utils::time::format_time;
use crate::utils::mins2readable;
use serde::Serialize;

/// Flat row for the time log export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryExport {
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub start: String,
    pub end: String,
    pub break_minutes: i64,
    pub office_time: String,
    pub sessions: usize,
    pub notes: String,
}

impl From<&TimeEntry> for EntryExport {
    fn from(e: &TimeEntry) -> Self {
        Self {
            date: e.date_str(),
            kind: e.kind.to_string(),
            start: earliest_clock_in(e).map(format_time).unwrap_or_default(),
            end: latest_clock_out(e).map(format_time).unwrap_or_default(),
            break_minutes: total_break_minutes(&e.sessions),
            office_time: if e.kind == EntryType::Work {
                mins2readable(work_minutes(e), false, false)
            } else {
                String::new()
            },
            sessions: e.sessions.len(),
            notes: e.notes.clone(),
        }
    }
}

/// Flat row for the near-term prediction export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PredictionExport {
    pub label: String,
    pub date: String,
    pub is_actual: bool,
    pub work_hours: Option<f64>,
    pub break_minutes: Option<i64>,
    pub departure: Option<String>,
}

impl From<&DayPrediction> for PredictionExport {
    fn from(p: &DayPrediction) -> Self {
        Self {
            label: p.label.to_string(),
            date: p.date.format("%Y-%m-%d").to_string(),
            is_actual: p.is_actual,
            work_hours: p.work_hours(),
            break_minutes: p.break_minutes(),
            departure: p.departure().map(str::to_string),
        }
    }
}

/// Flat row for the chart series export. The band is pre-computed as lower/upper bounds.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ForecastExport {
    pub date: String,
    pub label: String,
    pub is_forecast: bool,
    pub office_hours: Option<f64>,
    pub office_low: Option<f64>,
    pub office_high: Option<f64>,
    pub break_minutes: Option<i64>,
    pub break_low: Option<i64>,
    pub break_high: Option<i64>,
    pub departure_minutes: Option<i64>,
    pub departure_low: Option<i64>,
    pub departure_high: Option<i64>,
}

impl From<&ForecastPoint> for ForecastExport {
    fn from(p: &ForecastPoint) -> Self {
        let office = p.office_band();
        let brk = p.break_band();
        let dep = p.departure_band();
        Self {
            date: p.date.format("%Y-%m-%d").to_string(),
            label: p.label.clone(),
            is_forecast: p.is_forecast,
            office_hours: p.total_office_hours,
            office_low: office.map(|b| b.0),
            office_high: office.map(|b| b.1),
            break_minutes: p.break_minutes,
            break_low: brk.map(|b| b.0),
            break_high: brk.map(|b| b.1),
            departure_minutes: p.departure_minutes,
            departure_low: dep.map(|b| b.0),
            departure_high: dep.map(|b| b.1),
        }
    }
}
