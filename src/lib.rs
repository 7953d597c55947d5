//! Employee Inventory - record and list employees through two web pages.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Employee records, normalization, validation, password hashing
//! - **services**: The add and list use cases
//! - **infra**: Database connection, migrations and the employee repository
//! - **api**: Handlers, flash messages, templates and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Show migration status
//! cargo run -- migrate status
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Employee, EmployeeForm, Password};
pub use errors::{AppError, AppResult};
pub use infra::Database;
