use crate::{
    db::{
        helpers::{clean_name, same_name},
        Database,
    },
    error::ScheduleError,
    log_info,
    models::Employee,
};

const ENABLE_LOGS: bool = true;

impl Database {
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn employees_in<'a>(&'a self, department: &'a str) -> impl Iterator<Item = &'a Employee> + 'a {
        self.employees
            .iter()
            .filter(move |employee| employee.department == department)
    }

    pub fn find_employee(&self, name: &str, department: &str) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|employee| employee.department == department && same_name(&employee.name, name))
    }

    /// Adds an employee to a department. Names are unique per department,
    /// ignoring case.
    pub fn add_employee(&mut self, name: &str, department: &str) -> Result<Employee, ScheduleError> {
        let name = clean_name(name)?;
        self.require_department(department)?;
        if self.find_employee(&name, department).is_some() {
            return Err(ScheduleError::DuplicateEmployee {
                name,
                department: department.to_string(),
            });
        }

        let employee = Employee {
            name,
            department: department.to_string(),
        };
        self.employees.push(employee.clone());
        log_info!("Added employee {} to {}", employee.name, employee.department);
        Ok(employee)
    }

    /// Removes an employee from the roster. Shifts already assigned to them stay.
    pub fn remove_employee(&mut self, name: &str, department: &str) -> Result<Employee, ScheduleError> {
        let index = self
            .employees
            .iter()
            .position(|employee| employee.department == department && same_name(&employee.name, name))
            .ok_or_else(|| ScheduleError::NotFound {
                kind: "employee",
                name: name.to_string(),
                department: department.to_string(),
            })?;

        let employee = self.employees.remove(index);
        log_info!("Removed employee {} from {}", employee.name, employee.department);
        Ok(employee)
    }
}
