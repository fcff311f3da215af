pub mod roster_file;
pub mod schedule_file;

pub use roster_file::{load_roster, parse_roster, render_roster, save_roster, RosterLoad};
pub use schedule_file::{load_schedule, save_schedule};
