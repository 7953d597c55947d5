//! Application state - Dependency injection container.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

use super::templates::Templates;
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Database, EmployeeStore};
use crate::services::{EmployeeManager, EmployeeService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Employee use cases
    pub employee_service: Arc<dyn EmployeeService>,
    /// Page templates
    pub templates: Arc<Templates>,
    /// Database connection
    pub database: Arc<Database>,
    /// Signs the flash cookie
    cookie_key: Key,
}

impl AppState {
    /// Create application state from the database handle and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> AppResult<Self> {
        Self::new(database, config.secret_key())
    }

    /// Wire the store-backed employee service and derive the cookie
    /// signing key from `secret`.
    pub fn new(database: Arc<Database>, secret: &str) -> AppResult<Self> {
        let employees = Arc::new(EmployeeStore::new(database.get_connection()));

        Ok(Self {
            employee_service: Arc::new(EmployeeManager::new(employees)),
            templates: Arc::new(Templates::new()?),
            database,
            cookie_key: signing_key(secret),
        })
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Stretch an arbitrary-length secret to the 64 bytes a cookie key needs.
fn signing_key(secret: &str) -> Key {
    Key::from(Sha512::digest(secret.as_bytes()).as_slice())
}
