//! Line-oriented roster file (`baza_danych.txt`).
//!
//! ```text
//! ---EMPLOYEES---
//! Anna|Kuchnia
//! ---ROLES---
//! Kucharz|#D32F2F|Kuchnia
//! ---SHIFTS---
//! 09-17|Kuchnia
//! ```
//!
//! Fields are separated by `|` with no escaping, so a `|` inside a name
//! cannot be stored.

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};

use crate::{
    db::{Database, Roster},
    log_info, log_warn,
    models::{Employee, Role, ShiftTemplate},
    settings::RosterImportMode,
};

const ENABLE_LOGS: bool = true;

const EMPLOYEES_MARKER: &str = "---EMPLOYEES---";
const ROLES_MARKER: &str = "---ROLES---";
const TEMPLATES_MARKER: &str = "---SHIFTS---";
const MARKER_PREFIX: &str = "---";
const FIELD_SEPARATOR: char = '|';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Employees,
    Roles,
    Templates,
    Unknown,
}

impl Section {
    fn from_marker(line: &str) -> Self {
        match line {
            EMPLOYEES_MARKER => Section::Employees,
            ROLES_MARKER => Section::Roles,
            TEMPLATES_MARKER => Section::Templates,
            _ => Section::Unknown,
        }
    }
}

/// Counts from a completed load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RosterLoad {
    pub employees: usize,
    pub roles: usize,
    pub templates: usize,
    pub registered_departments: Vec<String>,
}

pub fn render_roster(roster: &Roster) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(EMPLOYEES_MARKER.to_string());
    lines.extend(
        roster
            .employees
            .iter()
            .map(|employee| format!("{}|{}", employee.name, employee.department)),
    );
    lines.push(ROLES_MARKER.to_string());
    lines.extend(
        roster
            .roles
            .iter()
            .map(|role| format!("{}|{}|{}", role.name, role.color, role.department)),
    );
    lines.push(TEMPLATES_MARKER.to_string());
    lines.extend(
        roster
            .templates
            .iter()
            .map(|template| format!("{}|{}", template.hours, template.department)),
    );

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Parses roster text. Each line belongs to the section named by the most
/// recent marker line.
///
/// In `Legacy` mode records missing their department are filed under
/// `fallback_department`, employee and template lines with any other field
/// count keep the whole line as the name, and other malformed lines are
/// skipped. In `Strict` mode any of these fails the parse.
pub fn parse_roster(text: &str, fallback_department: &str, mode: RosterImportMode) -> Result<Roster> {
    let strict = mode == RosterImportMode::Strict;
    let mut roster = Roster::default();
    let mut section = Section::None;

    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;

        if line.starts_with(MARKER_PREFIX) {
            section = Section::from_marker(line.trim_end());
            if strict && section == Section::Unknown {
                bail!("line {line_no}: unknown section marker '{line}'");
            }
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        match (section, fields.as_slice()) {
            (Section::Employees, [name, department]) if has_department(department) => roster.employees.push(Employee {
                name: name.to_string(),
                department: department.to_string(),
            }),
            (Section::Roles, [name, color, department]) if has_department(department) => roster.roles.push(Role {
                name: name.to_string(),
                color: color.to_string(),
                department: department.to_string(),
            }),
            (Section::Templates, [hours, department]) if has_department(department) => roster.templates.push(ShiftTemplate {
                hours: hours.to_string(),
                department: department.to_string(),
            }),
            (Section::None | Section::Unknown, _) => {
                if strict {
                    bail!("line {line_no}: record outside a known section: '{line}'");
                }
                log_warn!("Skipping roster line {line_no} outside a known section");
            }
            _ if strict => {
                bail!("line {line_no}: missing department or wrong number of fields in '{line}'");
            }
            (Section::Employees, fields) => {
                log_warn!("Roster line {line_no}: employee without department, using {fallback_department}");
                roster.employees.push(Employee {
                    name: name_without_blank_department(line, fields),
                    department: fallback_department.to_string(),
                });
            }
            (Section::Roles, [name, color] | [name, color, _]) => {
                log_warn!("Roster line {line_no}: role without department, using {fallback_department}");
                roster.roles.push(Role {
                    name: name.to_string(),
                    color: color.to_string(),
                    department: fallback_department.to_string(),
                });
            }
            (Section::Roles, _) => {
                log_warn!("Skipping malformed role on roster line {line_no}");
            }
            (Section::Templates, fields) => {
                log_warn!("Roster line {line_no}: hours without department, using {fallback_department}");
                roster.templates.push(ShiftTemplate {
                    hours: name_without_blank_department(line, fields),
                    department: fallback_department.to_string(),
                });
            }
        }
    }

    Ok(roster)
}

fn has_department(field: &str) -> bool {
    !field.trim().is_empty()
}

/// `Anna|` keeps `Anna`; any other shape keeps the whole line.
fn name_without_blank_department(line: &str, fields: &[&str]) -> String {
    match fields {
        [name, department] if !has_department(department) => name.to_string(),
        _ => line.to_string(),
    }
}

pub fn save_roster(db: &Database, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, render_roster(&db.roster()))
        .with_context(|| format!("failed to write roster to {}", path.display()))?;
    log_info!("Saved roster to {}", path.display());
    Ok(())
}

/// Replaces the store's employees, roles and hour templates with the file's.
/// Shifts are not touched. Nothing changes if reading or parsing fails.
pub fn load_roster(db: &mut Database, path: &Path, mode: RosterImportMode) -> Result<RosterLoad> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read roster from {}", path.display()))?;
    let fallback = db.first_department().unwrap_or_default().to_string();
    let roster = parse_roster(&text, &fallback, mode)
        .with_context(|| format!("failed to parse roster {}", path.display()))?;

    let mut load = RosterLoad {
        employees: roster.employees.len(),
        roles: roster.roles.len(),
        templates: roster.templates.len(),
        registered_departments: Vec::new(),
    };
    load.registered_departments = db.replace_roster(roster);

    log_info!(
        "Loaded roster from {} ({} employees, {} roles, {} hours)",
        path.display(),
        load.employees,
        load.roles,
        load.templates
    );
    Ok(load)
}
