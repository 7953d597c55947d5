//! Infrastructure layer - External systems integration
//!
//! Database connection, migrations and the employee repository.

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{EmployeeRepository, EmployeeStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockEmployeeRepository;
