use crate::{
    db::{helpers::clean_name, Database},
    error::ScheduleError,
    log_info,
};

const ENABLE_LOGS: bool = true;

/// What a department removal took with it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepartmentRemoval {
    pub employees: usize,
    pub roles: usize,
    pub templates: usize,
    pub shifts: usize,
}

impl Database {
    pub fn departments(&self) -> &[String] {
        &self.departments
    }

    pub fn has_department(&self, name: &str) -> bool {
        self.departments.iter().any(|known| known == name)
    }

    pub fn first_department(&self) -> Option<&str> {
        self.departments.first().map(String::as_str)
    }

    /// Adds a department. Names compare exactly after trimming.
    pub fn add_department(&mut self, name: &str) -> Result<String, ScheduleError> {
        let name = clean_name(name)?;
        if self.has_department(&name) {
            return Err(ScheduleError::DuplicateDepartment(name));
        }

        self.departments.push(name.clone());
        log_info!("Added department {name}");
        Ok(name)
    }

    /// Removes a department together with its employees, roles, hour
    /// templates and every shift filed under it. The last department cannot
    /// be removed.
    pub fn remove_department(&mut self, name: &str) -> Result<DepartmentRemoval, ScheduleError> {
        self.require_department(name)?;
        if self.departments.len() <= 1 {
            return Err(ScheduleError::LastDepartment);
        }

        self.departments.retain(|known| known != name);

        let mut removal = DepartmentRemoval::default();

        let before = self.employees.len();
        self.employees.retain(|employee| employee.department != name);
        removal.employees = before - self.employees.len();

        let before = self.roles.len();
        self.roles.retain(|role| role.department != name);
        removal.roles = before - self.roles.len();

        let before = self.templates.len();
        self.templates.retain(|template| template.department != name);
        removal.templates = before - self.templates.len();

        self.schedule.retain(|key, shifts| {
            if key.department == name {
                removal.shifts += shifts.len();
                false
            } else {
                true
            }
        });

        log_info!(
            "Removed department {name} ({} employees, {} roles, {} templates, {} shifts)",
            removal.employees,
            removal.roles,
            removal.templates,
            removal.shifts
        );
        Ok(removal)
    }

    pub(crate) fn require_department(&self, name: &str) -> Result<(), ScheduleError> {
        if self.has_department(name) {
            Ok(())
        } else {
            Err(ScheduleError::UnknownDepartment(name.to_string()))
        }
    }

    /// Registers a department referenced by loaded data. Returns `true` when
    /// the name was new.
    pub(crate) fn ensure_department(&mut self, name: &str) -> bool {
        if name.is_empty() || self.has_department(name) {
            return false;
        }
        self.departments.push(name.to_string());
        log_info!("Registered department {name} found in loaded data");
        true
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn rejects_duplicate_and_blank_departments() {
        let mut db = Database::default();
        assert_eq!(
            db.add_department("Sala"),
            Err(ScheduleError::DuplicateDepartment("Sala".into()))
        );
        assert_eq!(db.add_department(" "), Err(ScheduleError::EmptyName));
        assert_eq!(db.add_department(" Bar ").unwrap(), "Bar");
        assert!(db.has_department("Bar"));
    }

    #[test]
    fn last_department_cannot_be_removed() {
        let mut db = Database::new(["Kuchnia"]);
        assert_eq!(db.remove_department("Kuchnia"), Err(ScheduleError::LastDepartment));
        assert_eq!(db.departments(), ["Kuchnia"]);
    }

    #[test]
    fn unknown_department_is_reported() {
        let mut db = Database::default();
        assert_eq!(
            db.remove_department("Bar"),
            Err(ScheduleError::UnknownDepartment("Bar".into()))
        );
    }

    #[test]
    fn removal_cascades_to_everything_in_the_department() {
        let mut db = Database::default();
        db.add_employee("Anna", "Kuchnia").unwrap();
        db.add_employee("Anna", "Sala").unwrap();
        let cook = db.add_role("Kucharz", "#D32F2F", "Kuchnia").unwrap();
        let waiter = db.add_role("Kelner", "#1976D2", "Sala").unwrap();
        db.add_template("09-17", "Kuchnia").unwrap();
        db.assign(day(1), "Kuchnia", "Anna", &cook, "09-17");
        db.assign(day(2), "Kuchnia", "Anna", &cook, "09-17");
        db.assign(day(1), "Sala", "Anna", &waiter, "12-20");

        let removal = db.remove_department("Kuchnia").unwrap();
        assert_eq!(
            removal,
            DepartmentRemoval {
                employees: 1,
                roles: 1,
                templates: 1,
                shifts: 2,
            }
        );

        assert!(!db.has_department("Kuchnia"));
        assert!(db.employees().iter().all(|e| e.department != "Kuchnia"));
        assert!(db.roles().iter().all(|r| r.department != "Kuchnia"));
        assert!(db.templates().iter().all(|t| t.department != "Kuchnia"));
        assert!(db.schedule().keys().all(|key| key.department != "Kuchnia"));
        assert_eq!(db.shifts_on(day(1), "Sala").len(), 1);
    }
}
