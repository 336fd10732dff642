//! Boomerang Core Library
//!
//! This crate provides the configuration, error types, and vendor data model
//! shared by the proxy server, the media client, and the CLI.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{Config, MediaConfig, ServerConfig};
pub use error::{LogLevel, MediaError};
pub use models::{DeleteResult, MediaResource, ResourceList, Transformation, TransformationStage};
