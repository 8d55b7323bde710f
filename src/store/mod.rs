//! Read-only access to the time log produced by the tracker front-end.
//!
//! The log is a JSON array of entries (camelCase keys, `YYYY-MM-DD` dates,
//! `HH:MM` times). Malformed dates or times fail the whole load.

use crate::errors::{AppError, AppResult};
use crate::models::{EntryType, TimeEntry};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub fn parse_entries(json: &str) -> AppResult<Vec<TimeEntry>> {
    let entries: Vec<TimeEntry> = serde_json::from_str(json)?;
    validate_entries(&entries)?;
    Ok(entries)
}

pub fn load_entries(path: &Path) -> AppResult<Vec<TimeEntry>> {
    if !path.exists() {
        return Err(AppError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("entries file not found: {} (run `rtimecast init`)", path.display()),
        )));
    }

    let content = fs::read_to_string(path)?;
    let entries = parse_entries(&content)?;
    info!(count = entries.len(), path = %path.display(), "loaded time entries");
    Ok(entries)
}

/// Structural checks the engine relies on.
pub fn validate_entries(entries: &[TimeEntry]) -> AppResult<()> {
    let mut ids = HashSet::new();

    for entry in entries {
        if !ids.insert(entry.id.as_str()) {
            return Err(AppError::InvalidEntry(format!(
                "duplicate entry id '{}'",
                entry.id
            )));
        }

        for s in &entry.sessions {
            if s.break_end.is_some() && s.break_start.is_none() {
                return Err(AppError::InvalidEntry(format!(
                    "session '{}' on {} has a break end without a break start",
                    s.id,
                    entry.date_str()
                )));
            }
        }

        if entry.kind == EntryType::Leave && !entry.sessions.is_empty() {
            warn!(
                id = %entry.id,
                date = %entry.date,
                sessions = entry.sessions.len(),
                "leave entry carries sessions; they are ignored"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": "a1",
            "date": "2025-06-16",
            "type": "work",
            "sessions": [
                {"id": "s1", "clockIn": "09:00", "clockOut": "17:00", "breakStart": "12:00", "breakEnd": "12:30"},
                {"id": "s2", "clockIn": "18:00", "clockOut": null, "breakStart": null, "breakEnd": null}
            ],
            "notes": "release day"
        },
        {"id": "a2", "date": "2025-06-17", "type": "leave", "sessions": [], "notes": ""}
    ]"#;

    #[test]
    fn parses_front_end_format() {
        let entries = parse_entries(SAMPLE).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].sessions.len(), 2);
        assert!(entries[0].sessions[1].is_open());
        assert_eq!(entries[0].notes, "release day");
        assert_eq!(entries[1].kind, EntryType::Leave);
    }

    #[test]
    fn rejects_malformed_time() {
        let json = r#"[{"id":"x","date":"2025-06-16","type":"work",
            "sessions":[{"id":"s","clockIn":"9am","clockOut":null}]}]"#;
        assert!(matches!(parse_entries(json), Err(AppError::Json(_))));
    }

    #[test]
    fn rejects_malformed_date() {
        let json = r#"[{"id":"x","date":"16/06/2025","type":"work","sessions":[]}]"#;
        assert!(parse_entries(json).is_err());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id":"x","date":"2025-06-16","type":"work","sessions":[]},
            {"id":"x","date":"2025-06-17","type":"work","sessions":[]}
        ]"#;
        assert!(matches!(parse_entries(json), Err(AppError::InvalidEntry(_))));
    }

    #[test]
    fn rejects_orphan_break_end() {
        let json = r#"[{"id":"x","date":"2025-06-16","type":"work",
            "sessions":[{"id":"s","clockIn":"09:00","clockOut":"17:00","breakEnd":"12:30"}]}]"#;
        assert!(matches!(parse_entries(json), Err(AppError::InvalidEntry(_))));
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"[{"id":"x","date":"2025-06-16","type":"work",
            "sessions":[{"id":"s","clockIn":"09:00"}]}]"#;
        let entries = parse_entries(json).unwrap();
        assert!(entries[0].notes.is_empty());
        assert!(entries[0].sessions[0].clock_out.is_none());
    }
}
