//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Employee Records
// =============================================================================

/// Role stored when the form leaves the `authentication` field out
pub const DEFAULT_ROLE: &str = "User";

/// Text format of the date fields, both on the form and on the listing page
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Flash Messages
// =============================================================================

/// Cookie that carries flash messages across a redirect
pub const FLASH_COOKIE_NAME: &str = "_flash";

/// Shown after an employee has been stored
pub const MSG_EMPLOYEE_ADDED: &str = "Employee added successfully!";

/// Prefix of the message shown when the store rejects an insert
pub const MSG_ADD_FAILED_PREFIX: &str = "Error adding employee";

// =============================================================================
// Security
// =============================================================================

/// Signing secret used when SECRET_KEY is unset. Development only.
pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database user (for development)
pub const DEFAULT_DB_USER: &str = "postgres";

/// Default database password (for development)
pub const DEFAULT_DB_PASSWORD: &str = "password";

/// Default database host, with port
pub const DEFAULT_DB_HOST: &str = "localhost:5432";

/// Default database name
pub const DEFAULT_DB_NAME: &str = "employee_inventory";

/// Default size of the connection pool
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
