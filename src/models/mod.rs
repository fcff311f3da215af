pub mod roster;
pub mod shift;

pub use roster::{Employee, Role, ShiftTemplate, ROLE_PALETTE};
pub use shift::{hours_duration, ScheduleKey, Shift};
