//! Table rendering utilities for CLI outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));

/// Display width of `s`, ignoring ANSI escape sequences.
pub fn visible_width(s: &str) -> usize {
    ANSI_RE.replace_all(s, "").width()
}

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad(&col.header, col.width));
        }
        out.push('\n');
        for col in &self.columns {
            out.push_str(&pad(&"-".repeat(col.width), col.width));
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad(cell, col.width));
            }
            out.push('\n');
        }

        out
    }
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(cell));
    format!("{}{} ", cell, " ".repeat(fill))
}
