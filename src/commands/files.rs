use std::path::PathBuf;

use crate::{
    export::{default_export_file_name, export_month, ExportSummary},
    log_error,
    persistence::{self, RosterLoad},
    AppState,
};

use super::roster::sync_selection;

const ENABLE_LOGS: bool = true;

pub fn save_roster(state: &AppState) -> Result<PathBuf, String> {
    let path = state.roster_path();
    persistence::save_roster(&state.db, &path).map_err(|e| {
        log_error!("Saving roster failed: {e:#}");
        format!("{e:#}")
    })?;
    Ok(path)
}

/// Replaces employees, roles and hours with the saved roster. Picked tools
/// that no longer exist are dropped.
pub fn load_roster(state: &mut AppState) -> Result<RosterLoad, String> {
    let path = state.roster_path();
    let mode = state.settings.settings().roster_import;
    let load = persistence::load_roster(&mut state.db, &path, mode).map_err(|e| {
        log_error!("Loading roster failed: {e:#}");
        format!("{e:#}")
    })?;
    sync_selection(state);
    Ok(load)
}

pub fn save_schedule(state: &AppState) -> Result<PathBuf, String> {
    let path = state.schedule_path();
    persistence::save_schedule(&state.db, &path).map_err(|e| {
        log_error!("Saving schedule failed: {e:#}");
        format!("{e:#}")
    })?;
    Ok(path)
}

/// Replaces every assignment with the saved schedule. Returns departments
/// that were registered because the file referred to them.
pub fn load_schedule(state: &mut AppState) -> Result<Vec<String>, String> {
    let path = state.schedule_path();
    persistence::load_schedule(&mut state.db, &path).map_err(|e| {
        log_error!("Loading schedule failed: {e:#}");
        format!("{e:#}")
    })
}

/// Exports the selected department's current month. Without a path the
/// file goes to the data directory under its default name.
pub fn export_spreadsheet(state: &AppState, path: Option<PathBuf>) -> Result<ExportSummary, String> {
    let department = state.selection.require_department().map_err(|e| e.to_string())?;
    let path = path.unwrap_or_else(|| {
        state
            .data_dir()
            .join(default_export_file_name(department, state.month))
    });
    export_month(&state.db, state.month, department, &path).map_err(|e| {
        log_error!("Export of {department} failed: {e:#}");
        format!("{e:#}")
    })
}
