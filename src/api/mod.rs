//! API layer - HTTP handlers and page rendering
//!
//! - Request handlers for the add and list pages
//! - Flash messages carried in a signed cookie
//! - Tera page templates
//! - Route definitions

pub mod flash;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;

pub use routes::create_router;
pub use state::AppState;
