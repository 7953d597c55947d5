//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on repository traits, not on
//! SeaORM directly.

mod employee_service;

pub use employee_service::{EmployeeManager, EmployeeService};
