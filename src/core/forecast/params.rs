use crate::utils::time::format_clock_minutes;

/// Tuning knobs of the forecaster.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastParams {
    /// EWMA smoothing factor, in (0, 1].
    pub alpha: f64,
    /// Same-weekday entries needed before the sample narrows to that weekday.
    pub min_weekday_samples: usize,
    /// Past days shown before today in the time series.
    pub history_days: u32,
    /// Relative widening of the variance band per day of horizon.
    pub horizon_growth: f64,
    pub default_work_minutes: f64,
    pub default_break_minutes: f64,
    /// Minutes from midnight.
    pub default_departure_minutes: i64,
    /// Minutes from midnight.
    pub default_clock_in_minutes: i64,
}

impl Default for ForecastParams {
    fn default() -> Self {
        Self {
            alpha: 0.35,
            min_weekday_samples: 3,
            history_days: 30,
            horizon_growth: 0.15,
            default_work_minutes: 480.0,
            default_break_minutes: 45.0,
            default_departure_minutes: 17 * 60 + 30,
            default_clock_in_minutes: 9 * 60,
        }
    }
}

impl ForecastParams {
    pub fn default_departure(&self) -> String {
        format_clock_minutes(self.default_departure_minutes as f64)
    }

    /// Band multiplier for a point `offset` days after today.
    pub fn scale_factor(&self, offset: u32) -> f64 {
        1.0 + offset as f64 * self.horizon_growth
    }
}
