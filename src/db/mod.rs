//! In-memory data store.
//!
//! `Database` owns every collection the scheduler works with. There is no
//! global state: callers hold a `Database` (usually inside `AppState`) and
//! pass it by reference to each operation. Per-entity operations live in
//! `repositories`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub mod helpers;
pub mod repositories;

use crate::models::{Employee, Role, ScheduleKey, Shift, ShiftTemplate};

pub use repositories::departments::DepartmentRemoval;

/// Shifts per (day, department), in assignment order.
pub type ScheduleIndex = BTreeMap<ScheduleKey, Vec<Shift>>;

pub const DEFAULT_DEPARTMENTS: [&str; 3] = ["Sala", "Kuchnia", "FoodTruck"];

/// The roster part of the store: everything the flat text file holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    pub employees: Vec<Employee>,
    pub roles: Vec<Role>,
    pub templates: Vec<ShiftTemplate>,
}

#[derive(Debug, Clone)]
pub struct Database {
    departments: Vec<String>,
    employees: Vec<Employee>,
    roles: Vec<Role>,
    templates: Vec<ShiftTemplate>,
    schedule: ScheduleIndex,
}

impl Database {
    /// Creates an empty store with the given departments. Blank and repeated
    /// names are dropped; if nothing is left the default departments are used.
    pub fn new<I, S>(departments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in departments {
            let name = name.as_ref().trim();
            if !name.is_empty() && !names.iter().any(|known| known == name) {
                names.push(name.to_string());
            }
        }
        if names.is_empty() {
            names = DEFAULT_DEPARTMENTS.iter().map(|name| name.to_string()).collect();
        }

        Self {
            departments: names,
            employees: Vec::new(),
            roles: Vec::new(),
            templates: Vec::new(),
            schedule: ScheduleIndex::new(),
        }
    }

    pub fn roster(&self) -> Roster {
        Roster {
            employees: self.employees.clone(),
            roles: self.roles.clone(),
            templates: self.templates.clone(),
        }
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new(DEFAULT_DEPARTMENTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_has_three_departments() {
        let db = Database::default();
        assert_eq!(db.departments(), ["Sala", "Kuchnia", "FoodTruck"]);
        assert!(db.schedule().is_empty());
    }

    #[test]
    fn never_starts_without_a_department() {
        let db = Database::new(["", "  "]);
        assert_eq!(db.departments().len(), DEFAULT_DEPARTMENTS.len());
    }

    #[test]
    fn drops_repeated_department_names() {
        let db = Database::new(["Bar", " Bar ", "Kuchnia"]);
        assert_eq!(db.departments(), ["Bar", "Kuchnia"]);
    }
}
