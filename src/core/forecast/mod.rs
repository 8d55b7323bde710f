//! Forecast engine: near-term day cards and the chart time series.
//!
//! Everything here is a pure function of the supplied entries and the injected
//! "today". Nothing is cached between calls.

mod params;
mod predictions;
mod sample;
mod series;

pub use params::ForecastParams;

use crate::models::{DayPrediction, ForecastPoint, TimeEntry};
use chrono::NaiveDate;

/// Forecast days generated after today when the caller does not ask otherwise.
pub const DEFAULT_FUTURE_DAYS: u32 = 7;

/// Upper bound for both the history window and the forecast horizon, in days.
pub const MAX_HORIZON_DAYS: u32 = 3650;

/// Forecast engine bound to a set of tuning parameters.
#[derive(Debug, Clone, Default)]
pub struct ForecastEngine {
    params: ForecastParams,
}

impl ForecastEngine {
    pub fn new(params: ForecastParams) -> Self {
        Self { params }
    }

    /// Yesterday, today and tomorrow, in that order.
    pub fn predictions(&self, entries: &[TimeEntry], today: NaiveDate) -> [DayPrediction; 3] {
        predictions::predict_days(entries, today, &self.params)
    }

    /// `history_days` observed points followed by `future_days + 1` forecast points.
    /// Both windows are capped at [`MAX_HORIZON_DAYS`].
    pub fn time_series(
        &self,
        entries: &[TimeEntry],
        today: NaiveDate,
        future_days: u32,
    ) -> Vec<ForecastPoint> {
        series::forecast_series(entries, today, future_days, &self.params)
    }
}

/// Near-term predictions with the default parameters.
pub fn get_predictions(entries: &[TimeEntry], today: NaiveDate) -> [DayPrediction; 3] {
    ForecastEngine::default().predictions(entries, today)
}

/// Forecast time series with the default parameters.
pub fn get_forecast_time_series(
    entries: &[TimeEntry],
    today: NaiveDate,
    future_days: u32,
) -> Vec<ForecastPoint> {
    ForecastEngine::default().time_series(entries, today, future_days)
}
