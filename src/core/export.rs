use crate::core::store::{read_sessions, totals_of};
use crate::errors::{AppError, AppResult};
use crate::export::{
    ExportFormat, SessionExport, TotalExport, ensure_writable, export_csv, export_json,
};
use crate::ui::messages::warning;
use chrono::FixedOffset;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export a saved session file.
    ///
    /// - `format`: csv | json
    /// - `summary`: one row per activity instead of one row per session
    /// - `force`: overwrite `out` without asking
    pub fn export(
        input: &Path,
        out: &Path,
        format: ExportFormat,
        summary: bool,
        force: bool,
        offset: &FixedOffset,
    ) -> AppResult<usize> {
        if input == out {
            return Err(AppError::Export(
                "Output file must differ from the session file".to_string(),
            ));
        }

        let sessions = read_sessions(input)?;
        if sessions.is_empty() {
            warning("No sessions in file. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(out, force)?;

        if let Some(parent) = out.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        if summary {
            let totals = totals_of(&sessions);
            let grand: f64 = totals.iter().map(|t| t.seconds).sum();
            let rows: Vec<TotalExport> = totals
                .iter()
                .map(|t| TotalExport::from_total(t, grand))
                .collect();
            write_rows(format, &rows, out)?;
            Ok(rows.len())
        } else {
            let rows: Vec<SessionExport> = sessions
                .iter()
                .map(|s| SessionExport::from_session(s, offset))
                .collect();
            write_rows(format, &rows, out)?;
            Ok(rows.len())
        }
    }
}

fn write_rows<T: serde::Serialize>(format: ExportFormat, rows: &[T], out: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(rows, out),
        ExportFormat::Json => export_json(rows, out),
    }
}
