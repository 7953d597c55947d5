//! Domain layer - Core business entities and logic
//!
//! Employee records, the form they are created from, and password hashing.
//! Nothing here touches HTTP or the database.

pub mod employee;
pub mod password;

pub use employee::{
    format_date, parse_date, Employee, EmployeeDraft, EmployeeForm, EmployeeView, NewEmployee,
};
pub use password::Password;
