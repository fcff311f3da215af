use crate::{
    db::{helpers::clean_name, Database},
    error::ScheduleError,
    log_info, log_warn,
    models::{hours_duration, ShiftTemplate},
};

const ENABLE_LOGS: bool = true;

impl Database {
    pub fn templates(&self) -> &[ShiftTemplate] {
        &self.templates
    }

    pub fn templates_in<'a>(&'a self, department: &'a str) -> impl Iterator<Item = &'a ShiftTemplate> + 'a {
        self.templates
            .iter()
            .filter(move |template| template.department == department)
    }

    pub fn find_template(&self, hours: &str, department: &str) -> Option<&ShiftTemplate> {
        self.templates
            .iter()
            .find(|template| template.department == department && template.hours == hours)
    }

    /// Adds an hour template. Hours compare exactly; a range that does not
    /// parse is still accepted and will count as zero hours.
    pub fn add_template(&mut self, hours: &str, department: &str) -> Result<ShiftTemplate, ScheduleError> {
        let hours = clean_name(hours)?;
        self.require_department(department)?;
        if self.find_template(&hours, department).is_some() {
            return Err(ScheduleError::DuplicateTemplate {
                hours,
                department: department.to_string(),
            });
        }

        if hours_duration(&hours) == 0.0 {
            log_warn!("Hours '{hours}' in {department} count as 0h");
        }

        let template = ShiftTemplate {
            hours,
            department: department.to_string(),
        };
        self.templates.push(template.clone());
        log_info!("Added hours {} to {}", template.hours, template.department);
        Ok(template)
    }

    pub fn remove_template(&mut self, hours: &str, department: &str) -> Result<ShiftTemplate, ScheduleError> {
        let index = self
            .templates
            .iter()
            .position(|template| template.department == department && template.hours == hours)
            .ok_or_else(|| ScheduleError::NotFound {
                kind: "hours",
                name: hours.to_string(),
                department: department.to_string(),
            })?;

        let template = self.templates.remove(index);
        log_info!("Removed hours {} from {}", template.hours, template.department);
        Ok(template)
    }
}
