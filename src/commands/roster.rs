use crate::{
    db::{DepartmentRemoval, Roster},
    error::ScheduleError,
    models::{roster::validate_color, Employee, Role, ShiftTemplate},
    selection::ToolSelection,
    AppState,
};

fn selected_department(state: &AppState) -> Result<String, String> {
    state
        .selection
        .require_department()
        .map(str::to_string)
        .map_err(|e| e.to_string())
}

pub fn list_departments(state: &AppState) -> Vec<String> {
    state.db.departments().to_vec()
}

/// Adds a department and switches to it.
pub fn add_department(state: &mut AppState, name: String) -> Result<String, String> {
    let name = state.db.add_department(&name).map_err(|e| e.to_string())?;
    state.selection.select_department(name.clone());
    Ok(name)
}

/// Switches department; every picked tool is dropped.
pub fn select_department(state: &mut AppState, name: String) -> Result<(), String> {
    state.db.require_department(&name).map_err(|e| e.to_string())?;
    state.selection.select_department(name);
    Ok(())
}

pub fn delete_department(state: &mut AppState, name: String) -> Result<DepartmentRemoval, String> {
    let removal = state.db.remove_department(&name).map_err(|e| e.to_string())?;
    if state.selection.department() == Some(name.as_str()) {
        state.selection.clear();
    }
    Ok(removal)
}

/// Employees, roles and hours of the selected department.
pub fn department_roster(state: &AppState) -> Result<Roster, String> {
    let department = selected_department(state)?;
    Ok(Roster {
        employees: state.db.employees_in(&department).cloned().collect(),
        roles: state.db.roles_in(&department).cloned().collect(),
        templates: state.db.templates_in(&department).cloned().collect(),
    })
}

pub fn add_employee(state: &mut AppState, name: String) -> Result<Employee, String> {
    let department = selected_department(state)?;
    state.db.add_employee(&name, &department).map_err(|e| e.to_string())
}

pub fn delete_employee(state: &mut AppState, name: String) -> Result<Employee, String> {
    let department = selected_department(state)?;
    let employee = state.db.remove_employee(&name, &department).map_err(|e| e.to_string())?;
    state.selection.forget_employee(&employee.name);
    Ok(employee)
}

/// Sets the color the next added role gets.
pub fn pick_role_color(state: &mut AppState, color: String) -> Result<String, String> {
    validate_color(&color).map_err(|e| e.to_string())?;
    state.pending_role_color = color.to_uppercase();
    Ok(state.pending_role_color.clone())
}

/// Adds a role in the pending color.
pub fn add_role(state: &mut AppState, name: String) -> Result<Role, String> {
    let department = selected_department(state)?;
    state
        .db
        .add_role(&name, &state.pending_role_color, &department)
        .map_err(|e| e.to_string())
}

pub fn recolor_role(state: &mut AppState, name: String, color: String) -> Result<Role, String> {
    let department = selected_department(state)?;
    let role = state
        .db
        .recolor_role(&name, &department, &color)
        .map_err(|e| e.to_string())?;
    state.selection.refresh_role(&role);
    Ok(role)
}

pub fn delete_role(state: &mut AppState, name: String) -> Result<Role, String> {
    let department = selected_department(state)?;
    let role = state.db.remove_role(&name, &department).map_err(|e| e.to_string())?;
    state.selection.forget_role(&role.name);
    Ok(role)
}

pub fn add_hours(state: &mut AppState, hours: String) -> Result<ShiftTemplate, String> {
    let department = selected_department(state)?;
    state.db.add_template(&hours, &department).map_err(|e| e.to_string())
}

pub fn delete_hours(state: &mut AppState, hours: String) -> Result<ShiftTemplate, String> {
    let department = selected_department(state)?;
    let template = state
        .db
        .remove_template(&hours, &department)
        .map_err(|e| e.to_string())?;
    state.selection.forget_hours(&template.hours);
    Ok(template)
}

pub fn pick_employee(state: &mut AppState, name: String) -> Result<(), String> {
    let department = selected_department(state)?;
    let employee = state
        .db
        .find_employee(&name, &department)
        .ok_or_else(|| not_found("employee", &name, &department))?;
    state
        .selection
        .pick_employee(employee.name.clone())
        .map_err(|e| e.to_string())
}

pub fn pick_role(state: &mut AppState, name: String) -> Result<(), String> {
    let department = selected_department(state)?;
    let role = state
        .db
        .find_role(&name, &department)
        .cloned()
        .ok_or_else(|| not_found("role", &name, &department))?;
    state.selection.pick_role(role).map_err(|e| e.to_string())
}

pub fn pick_hours(state: &mut AppState, hours: String) -> Result<(), String> {
    let department = selected_department(state)?;
    let template = state
        .db
        .find_template(&hours, &department)
        .ok_or_else(|| not_found("hours", &hours, &department))?;
    state
        .selection
        .pick_hours(template.hours.clone())
        .map_err(|e| e.to_string())
}

fn not_found(kind: &'static str, name: &str, department: &str) -> String {
    ScheduleError::NotFound {
        kind,
        name: name.to_string(),
        department: department.to_string(),
    }
    .to_string()
}

/// Brings the selection in line with the store after a bulk replace: a
/// vanished department clears everything, vanished tools are dropped and a
/// held role picks up its current color.
pub(crate) fn sync_selection(state: &mut AppState) {
    let (department, employee, role, hours) = match &state.selection {
        ToolSelection::NoDepartment => return,
        ToolSelection::Department(tools) => (
            tools.department.clone(),
            tools.employee.clone(),
            tools.role.clone(),
            tools.hours.clone(),
        ),
        ToolSelection::Armed(tools) => (
            tools.department.clone(),
            Some(tools.employee.clone()),
            Some(tools.role.clone()),
            Some(tools.hours.clone()),
        ),
    };

    if !state.db.has_department(&department) {
        state.selection.clear();
        return;
    }
    if let Some(name) = employee {
        if state.db.find_employee(&name, &department).is_none() {
            state.selection.forget_employee(&name);
        }
    }
    if let Some(role) = role {
        match state.db.find_role(&role.name, &department).cloned() {
            Some(current) => state.selection.refresh_role(&current),
            None => state.selection.forget_role(&role.name),
        }
    }
    if let Some(hours) = hours {
        if state.db.find_template(&hours, &department).is_none() {
            state.selection.forget_hours(&hours);
        }
    }
}
