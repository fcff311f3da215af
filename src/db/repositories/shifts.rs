use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    db::{helpers::same_name, Database, Roster, ScheduleIndex},
    log_debug, log_info,
    models::{Role, ScheduleKey, Shift},
};

const ENABLE_LOGS: bool = true;

impl Database {
    pub fn schedule(&self) -> &ScheduleIndex {
        &self.schedule
    }

    /// Shifts filed under one day in one department, in assignment order.
    pub fn shifts_on(&self, date: NaiveDate, department: &str) -> &[Shift] {
        self.schedule
            .get(&ScheduleKey::new(date, department))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Assigns `employee_name` working `role` for `hours` on `date`.
    ///
    /// Returns `None` without touching the store when the employee already
    /// has a shift that day in that department. The role is copied into the
    /// shift, so later edits to it do not show on this shift.
    pub fn assign(
        &mut self,
        date: NaiveDate,
        department: &str,
        employee_name: &str,
        role: &Role,
        hours: &str,
    ) -> Option<Shift> {
        let key = ScheduleKey::new(date, department);
        if let Some(existing) = self.schedule.get(&key) {
            if existing
                .iter()
                .any(|shift| same_name(shift.employee_name(), employee_name))
            {
                log_debug!("{employee_name} already works on {key}; assignment ignored");
                return None;
            }
        }

        let shift = Shift::new(employee_name, role, hours);
        log_info!(
            "Assigned {} as {} ({}, {}h) on {key}",
            shift.employee_name(),
            shift.role_name(),
            shift.hours(),
            shift.hours_count()
        );
        self.schedule.entry(key).or_default().push(shift.clone());
        Some(shift)
    }

    /// Removes the shift with `id`, wherever it is filed. Stops at the first
    /// match since ids are generated fresh for every shift.
    pub fn remove_shift(&mut self, id: Uuid) -> Option<Shift> {
        let mut emptied = None;
        let mut removed = None;

        for (key, shifts) in self.schedule.iter_mut() {
            if let Some(index) = shifts.iter().position(|shift| shift.id() == id) {
                removed = Some(shifts.remove(index));
                if shifts.is_empty() {
                    emptied = Some(key.clone());
                }
                log_info!("Removed shift {id} from {key}");
                break;
            }
        }

        if let Some(key) = emptied {
            self.schedule.remove(&key);
        }
        if removed.is_none() {
            log_debug!("Shift {id} not found; nothing removed");
        }
        removed
    }

    pub fn find_shift(&self, id: Uuid) -> Option<(&ScheduleKey, &Shift)> {
        self.schedule.iter().find_map(|(key, shifts)| {
            shifts
                .iter()
                .find(|shift| shift.id() == id)
                .map(|shift| (key, shift))
        })
    }

    /// Drops every shift in every department. Returns how many were removed.
    pub fn clear_schedule(&mut self) -> usize {
        let count = self.schedule.values().map(Vec::len).sum();
        self.schedule.clear();
        log_info!("Cleared schedule ({count} shifts)");
        count
    }

    /// Replaces the whole schedule. Departments named by the incoming keys
    /// that are not known yet are registered; they are returned.
    pub fn replace_schedule(&mut self, schedule: ScheduleIndex) -> Vec<String> {
        let mut registered = Vec::new();
        for key in schedule.keys() {
            if self.ensure_department(&key.department) {
                registered.push(key.department.clone());
            }
        }
        self.schedule = schedule;
        registered
    }

    /// Replaces employees, roles and hour templates, leaving shifts alone.
    /// Unknown departments are registered as in `replace_schedule`.
    pub fn replace_roster(&mut self, roster: Roster) -> Vec<String> {
        let mut registered = Vec::new();
        let departments = roster
            .employees
            .iter()
            .map(|employee| employee.department.clone())
            .chain(roster.roles.iter().map(|role| role.department.clone()))
            .chain(roster.templates.iter().map(|template| template.department.clone()));
        for department in departments {
            if self.ensure_department(&department) {
                registered.push(department);
            }
        }

        self.employees = roster.employees;
        self.roles = roster.roles;
        self.templates = roster.templates;
        registered
    }
}
