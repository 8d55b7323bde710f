pub mod calculator;
pub mod forecast;
pub mod summary;

pub use forecast::{ForecastEngine, ForecastParams, get_forecast_time_series, get_predictions};
