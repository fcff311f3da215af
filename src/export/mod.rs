pub mod layout;
pub mod xlsx;

pub use layout::{build_rows, export_employees, plan_columns, ColumnShade, DayEntry, EmployeeRow, SheetLayout};
pub use xlsx::{default_export_file_name, export_month, sanitize_sheet_name, ExportSummary};
