pub mod entry;
pub mod forecast_point;
pub mod prediction;
pub mod session;
pub mod summary;

pub use entry::{EntryType, TimeEntry};
pub use forecast_point::ForecastPoint;
pub use prediction::{DayLabel, DayPrediction};
pub use session::WorkSession;
pub use summary::{DaySummary, MonthSummary, WeekSummary, WeeklyTotal};
