//! Configuration loading and schema definitions
//!
//! Settings for catalog source, suggestions, pagination and inquiry contact.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
