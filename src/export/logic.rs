// src/export/logic.rs

use crate::core::forecast::ForecastEngine;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{EntryExport, ForecastExport, PredictionExport};
use crate::export::{ExportFormat, ExportTarget};
use crate::models::TimeEntry;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::Path;

/// High-level export driver.
pub struct ExportLogic;

impl ExportLogic {
    /// Export entries, predictions or the forecast series.
    ///
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `future_days`: forecast horizon, used only for `ExportTarget::Forecast`
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        engine: &ForecastEngine,
        entries: &[TimeEntry],
        today: NaiveDate,
        target: ExportTarget,
        format: ExportFormat,
        file: &str,
        future_days: u32,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force)?;

        match target {
            ExportTarget::Entries => {
                let mut sorted: Vec<&TimeEntry> = entries.iter().collect();
                sorted.sort_by_key(|e| e.date);
                let rows: Vec<EntryExport> = sorted.into_iter().map(EntryExport::from).collect();
                if rows.is_empty() {
                    warning("No entries found. Nothing to export.");
                    return Ok(());
                }
                write_rows(&rows, format, &path)
            }
            ExportTarget::Predictions => {
                let rows: Vec<PredictionExport> = engine
                    .predictions(entries, today)
                    .iter()
                    .map(PredictionExport::from)
                    .collect();
                write_rows(&rows, format, &path)
            }
            ExportTarget::Forecast => {
                let rows: Vec<ForecastExport> = engine
                    .time_series(entries, today, future_days)
                    .iter()
                    .map(ForecastExport::from)
                    .collect();
                write_rows(&rows, format, &path)
            }
        }
    }
}

fn write_rows<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}
