use thiserror::Error;

/// Validation failures raised by data-store operations.
///
/// Returning one of these means the operation was aborted and nothing in the
/// store changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("select a department first")]
    NoDepartmentSelected,

    #[error("select an employee, a role and hours first (missing: {})", missing.join(", "))]
    ToolsIncomplete { missing: Vec<&'static str> },

    #[error("name must not be empty")]
    EmptyName,

    #[error("department '{0}' already exists")]
    DuplicateDepartment(String),

    #[error("department '{0}' does not exist")]
    UnknownDepartment(String),

    #[error("the last remaining department cannot be removed")]
    LastDepartment,

    #[error("employee '{name}' already belongs to department '{department}'")]
    DuplicateEmployee { name: String, department: String },

    #[error("role '{name}' already exists in department '{department}'")]
    DuplicateRole { name: String, department: String },

    #[error("hours '{hours}' already exist in department '{department}'")]
    DuplicateTemplate { hours: String, department: String },

    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),

    #[error("{kind} '{name}' not found in department '{department}'")]
    NotFound {
        kind: &'static str,
        name: String,
        department: String,
    },

    #[error("department '{0}' has no employees or shifts to export")]
    NothingToExport(String),
}
