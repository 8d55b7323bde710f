pub mod duration;
pub mod smoothing;

pub use duration::{earliest_clock_in, latest_clock_out, total_break_minutes, work_minutes};
pub use smoothing::{ewma, variance};
