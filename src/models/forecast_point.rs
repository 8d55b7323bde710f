use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of the chart series: an observed day, a gap, or a forecast with its band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub label: String,
    pub total_office_hours: Option<f64>,
    pub break_minutes: Option<i64>,
    pub departure_minutes: Option<i64>, // minutes from midnight
    pub is_forecast: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance_office: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance_break: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance_departure: Option<i64>,
}

impl ForecastPoint {
    /// A past day with no worked entry.
    pub fn gap(date: NaiveDate, label: String) -> Self {
        Self {
            date,
            label,
            total_office_hours: None,
            break_minutes: None,
            departure_minutes: None,
            is_forecast: false,
            variance_office: None,
            variance_break: None,
            variance_departure: None,
        }
    }

    pub fn is_gap(&self) -> bool {
        !self.is_forecast
            && self.total_office_hours.is_none()
            && self.break_minutes.is_none()
            && self.departure_minutes.is_none()
    }

    /// `(lower, upper)` office-hours band, lower bound clamped at zero.
    pub fn office_band(&self) -> Option<(f64, f64)> {
        let value = self.total_office_hours?;
        let spread = self.variance_office?;
        Some(((value - spread).max(0.0), value + spread))
    }

    pub fn break_band(&self) -> Option<(i64, i64)> {
        let value = self.break_minutes?;
        let spread = self.variance_break?;
        Some(((value - spread).max(0), value + spread))
    }

    pub fn departure_band(&self) -> Option<(i64, i64)> {
        let value = self.departure_minutes?;
        let spread = self.variance_departure?;
        Some(((value - spread).max(0), value + spread))
    }
}
