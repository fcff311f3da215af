//! One function per user action. Each borrows the `AppState` for the
//! duration of the action and reports failures as display strings.

pub mod files;
pub mod roster;
pub mod schedule;

pub use files::{export_spreadsheet, load_roster, load_schedule, save_roster, save_schedule};
pub use roster::{
    add_department, add_employee, add_hours, add_role, delete_department, delete_employee, delete_hours,
    delete_role, department_roster, list_departments, pick_employee, pick_hours, pick_role, pick_role_color,
    recolor_role, select_department,
};
pub use schedule::{
    click_day, month_grid, month_label, month_stats, next_month, previous_month, remove_shift, reset_schedule,
};
