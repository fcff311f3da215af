use crate::{
    db::{
        helpers::{clean_name, same_name},
        Database,
    },
    error::ScheduleError,
    log_info,
    models::{roster::validate_color, Role},
};

const ENABLE_LOGS: bool = true;

impl Database {
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn roles_in<'a>(&'a self, department: &'a str) -> impl Iterator<Item = &'a Role> + 'a {
        self.roles.iter().filter(move |role| role.department == department)
    }

    pub fn find_role(&self, name: &str, department: &str) -> Option<&Role> {
        self.roles
            .iter()
            .find(|role| role.department == department && same_name(&role.name, name))
    }

    pub fn add_role(&mut self, name: &str, color: &str, department: &str) -> Result<Role, ScheduleError> {
        let name = clean_name(name)?;
        validate_color(color)?;
        self.require_department(department)?;
        if self.find_role(&name, department).is_some() {
            return Err(ScheduleError::DuplicateRole {
                name,
                department: department.to_string(),
            });
        }

        let role = Role {
            name,
            color: color.to_uppercase(),
            department: department.to_string(),
        };
        self.roles.push(role.clone());
        log_info!("Added role {} ({}) to {}", role.name, role.color, role.department);
        Ok(role)
    }

    /// Changes a role's color. Shifts created earlier keep the color they
    /// were assigned with.
    pub fn recolor_role(&mut self, name: &str, department: &str, color: &str) -> Result<Role, ScheduleError> {
        validate_color(color)?;
        let role = self
            .roles
            .iter_mut()
            .find(|role| role.department == department && same_name(&role.name, name))
            .ok_or_else(|| ScheduleError::NotFound {
                kind: "role",
                name: name.to_string(),
                department: department.to_string(),
            })?;

        role.color = color.to_uppercase();
        log_info!("Recolored role {} in {} to {}", role.name, role.department, role.color);
        Ok(role.clone())
    }

    pub fn remove_role(&mut self, name: &str, department: &str) -> Result<Role, ScheduleError> {
        let index = self
            .roles
            .iter()
            .position(|role| role.department == department && same_name(&role.name, name))
            .ok_or_else(|| ScheduleError::NotFound {
                kind: "role",
                name: name.to_string(),
                department: department.to_string(),
            })?;

        let role = self.roles.remove(index);
        log_info!("Removed role {} from {}", role.name, role.department);
        Ok(role)
    }
}
