//! HTTP request handlers.

pub mod employee_handler;

pub use employee_handler::employee_routes;
