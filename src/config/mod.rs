//! Configuration: environment-backed settings and the constants
//! (defaults, flash texts, date format) shared across layers.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
