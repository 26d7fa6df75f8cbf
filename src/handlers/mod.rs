pub mod auth;
pub mod common;
pub mod firms;
pub mod jobbers;
pub mod locations;
pub mod lookups;
pub mod materials;
pub mod parties;
pub mod users;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;
