use super::session::WorkSession;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Work,
    Leave,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Work => "work",
            EntryType::Leave => "leave",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A day in the time log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(rename = "type")]
    pub kind: EntryType,
    #[serde(default)]
    pub sessions: Vec<WorkSession>,
    #[serde(default)]
    pub notes: String,
}

impl TimeEntry {
    pub fn work(id: impl Into<String>, date: NaiveDate, sessions: Vec<WorkSession>) -> Self {
        Self {
            id: id.into(),
            date,
            kind: EntryType::Work,
            sessions,
            notes: String::new(),
        }
    }

    pub fn leave(id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            date,
            kind: EntryType::Leave,
            sessions: Vec::new(),
            notes: String::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// A work entry with at least one session: the only kind the forecaster learns from.
    pub fn is_worked(&self) -> bool {
        self.kind == EntryType::Work && !self.sessions.is_empty()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
