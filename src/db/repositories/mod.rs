pub mod departments;
pub mod employees;
pub mod roles;
pub mod shifts;
pub mod templates;
