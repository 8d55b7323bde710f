use crate::utils::time::{hhmm, hhmm_opt};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One clock-in/clock-out interval within a day, with at most one break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSession {
    pub id: String,
    #[serde(with = "hhmm")]
    pub clock_in: NaiveTime,
    #[serde(default, with = "hhmm_opt")]
    pub clock_out: Option<NaiveTime>,
    #[serde(default, with = "hhmm_opt")]
    pub break_start: Option<NaiveTime>,
    #[serde(default, with = "hhmm_opt")]
    pub break_end: Option<NaiveTime>,
}

impl WorkSession {
    pub fn new(id: impl Into<String>, clock_in: NaiveTime) -> Self {
        Self {
            id: id.into(),
            clock_in,
            clock_out: None,
            break_start: None,
            break_end: None,
        }
    }

    pub fn with_clock_out(mut self, clock_out: NaiveTime) -> Self {
        self.clock_out = Some(clock_out);
        self
    }

    pub fn with_break(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.break_start = Some(start);
        self.break_end = Some(end);
        self
    }

    /// Still clocked in.
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }

    /// `(clock_in, clock_out)` when both ends are known.
    pub fn span(&self) -> Option<(NaiveTime, NaiveTime)> {
        self.clock_out.map(|out| (self.clock_in, out))
    }

    /// `(break_start, break_end)` when both ends are known.
    pub fn break_span(&self) -> Option<(NaiveTime, NaiveTime)> {
        self.break_start.zip(self.break_end)
    }
}
