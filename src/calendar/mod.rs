pub mod grid;
pub mod month;
pub mod stats;

pub use grid::{build_month_grid, CalendarDay, DayCell, MonthGrid};
pub use month::{weekday_name, YearMonth};
pub use stats::{monthly_hours, EmployeeHours};
