use serde::{Deserialize, Serialize};

use crate::{db::helpers::same_name, error::ScheduleError, models::Role};

/// Which department and tools the next click on a day will use.
///
/// Tools only exist inside a selected department, and a click can only
/// assign once all three are picked (`Armed`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum ToolSelection {
    #[default]
    NoDepartment,
    Department(PartialTools),
    Armed(ArmedTools),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialTools {
    pub department: String,
    pub employee: Option<String>,
    pub role: Option<Role>,
    pub hours: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmedTools {
    pub department: String,
    pub employee: String,
    pub role: Role,
    pub hours: String,
}

impl PartialTools {
    fn empty(department: String) -> Self {
        Self {
            department,
            employee: None,
            role: None,
            hours: None,
        }
    }

    fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.employee.is_none() {
            missing.push("employee");
        }
        if self.role.is_none() {
            missing.push("role");
        }
        if self.hours.is_none() {
            missing.push("hours");
        }
        missing
    }

    fn promote(self) -> ToolSelection {
        match self {
            PartialTools {
                department,
                employee: Some(employee),
                role: Some(role),
                hours: Some(hours),
            } => ToolSelection::Armed(ArmedTools {
                department,
                employee,
                role,
                hours,
            }),
            partial => ToolSelection::Department(partial),
        }
    }
}

impl ArmedTools {
    fn demote(self) -> PartialTools {
        PartialTools {
            department: self.department,
            employee: Some(self.employee),
            role: Some(self.role),
            hours: Some(self.hours),
        }
    }
}

impl ToolSelection {
    pub fn department(&self) -> Option<&str> {
        match self {
            ToolSelection::NoDepartment => None,
            ToolSelection::Department(tools) => Some(&tools.department),
            ToolSelection::Armed(tools) => Some(&tools.department),
        }
    }

    pub fn require_department(&self) -> Result<&str, ScheduleError> {
        self.department().ok_or(ScheduleError::NoDepartmentSelected)
    }

    /// The tools for a click-to-assign, or what is still missing.
    pub fn armed(&self) -> Result<&ArmedTools, ScheduleError> {
        match self {
            ToolSelection::NoDepartment => Err(ScheduleError::NoDepartmentSelected),
            ToolSelection::Department(tools) => Err(ScheduleError::ToolsIncomplete {
                missing: tools.missing(),
            }),
            ToolSelection::Armed(tools) => Ok(tools),
        }
    }

    /// Switches to `department` with no tools picked.
    pub fn select_department(&mut self, department: impl Into<String>) {
        *self = ToolSelection::Department(PartialTools::empty(department.into()));
    }

    pub fn clear(&mut self) {
        *self = ToolSelection::NoDepartment;
    }

    pub fn pick_employee(&mut self, name: impl Into<String>) -> Result<(), ScheduleError> {
        let name = name.into();
        self.update(|tools| tools.employee = Some(name))
    }

    /// Stores a copy of `role`; editing the role afterwards needs `refresh_role`.
    pub fn pick_role(&mut self, role: Role) -> Result<(), ScheduleError> {
        self.update(|tools| tools.role = Some(role))
    }

    pub fn pick_hours(&mut self, hours: impl Into<String>) -> Result<(), ScheduleError> {
        let hours = hours.into();
        self.update(|tools| tools.hours = Some(hours))
    }

    /// Drops the employee tool if it is `name`.
    pub fn forget_employee(&mut self, name: &str) {
        self.update_if(|tools| {
            if tools.employee.as_deref().is_some_and(|picked| same_name(picked, name)) {
                tools.employee = None;
            }
        });
    }

    pub fn forget_role(&mut self, name: &str) {
        self.update_if(|tools| {
            if tools.role.as_ref().is_some_and(|picked| same_name(&picked.name, name)) {
                tools.role = None;
            }
        });
    }

    pub fn forget_hours(&mut self, hours: &str) {
        self.update_if(|tools| {
            if tools.hours.as_deref() == Some(hours) {
                tools.hours = None;
            }
        });
    }

    /// Replaces the held copy of a role that was edited in the store.
    pub fn refresh_role(&mut self, role: &Role) {
        self.update_if(|tools| {
            if let Some(picked) = tools.role.as_mut() {
                if picked.department == role.department && same_name(&picked.name, &role.name) {
                    *picked = role.clone();
                }
            }
        });
    }

    fn update<F>(&mut self, change: F) -> Result<(), ScheduleError>
    where
        F: FnOnce(&mut PartialTools),
    {
        let mut tools = match std::mem::take(self) {
            ToolSelection::NoDepartment => return Err(ScheduleError::NoDepartmentSelected),
            ToolSelection::Department(tools) => tools,
            ToolSelection::Armed(tools) => tools.demote(),
        };
        change(&mut tools);
        *self = tools.promote();
        Ok(())
    }

    fn update_if<F>(&mut self, change: F)
    where
        F: FnOnce(&mut PartialTools),
    {
        // No department means no tools to change.
        let _ = self.update(change);
    }
}
