use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    calendar::{build_month_grid, monthly_hours, EmployeeHours, MonthGrid},
    models::Shift,
    AppState,
};

/// Assigns the armed tools to `date`. `Ok(None)` means the employee already
/// works that day and nothing changed.
pub fn click_day(state: &mut AppState, date: NaiveDate) -> Result<Option<Shift>, String> {
    let tools = state.selection.armed().map_err(|e| e.to_string())?;
    Ok(state
        .db
        .assign(date, &tools.department, &tools.employee, &tools.role, &tools.hours))
}

pub fn remove_shift(state: &mut AppState, shift_id: Uuid) -> Option<Shift> {
    state.db.remove_shift(shift_id)
}

/// Drops every assignment in every department.
pub fn reset_schedule(state: &mut AppState) -> usize {
    state.db.clear_schedule()
}

pub fn month_grid(state: &AppState, today: NaiveDate) -> Result<MonthGrid, String> {
    let department = state.selection.require_department().map_err(|e| e.to_string())?;
    Ok(build_month_grid(&state.db, state.month, department, today))
}

pub fn month_stats(state: &AppState) -> Result<Vec<EmployeeHours>, String> {
    let department = state.selection.require_department().map_err(|e| e.to_string())?;
    Ok(monthly_hours(&state.db, state.month, department))
}

pub fn month_label(state: &AppState) -> String {
    state.month.label()
}

pub fn next_month(state: &mut AppState) -> String {
    state.month = state.month.next();
    state.month.label()
}

pub fn previous_month(state: &mut AppState) -> String {
    state.month = state.month.previous();
    state.month.label()
}
