//! Boomerang API Library
//!
//! This crate provides the proxy route, the gallery page, and application setup.

// Module declarations
mod api_doc;
mod handlers;
mod telemetry;
mod utils;

// Public modules
pub mod error;
pub mod setup;
pub mod state;

// Re-exports
pub use error::{ErrorBody, ErrorResponse, HttpAppError};
pub use state::AppState;
