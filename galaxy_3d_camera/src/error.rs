//! Error types for the Galaxy3D camera crate
//!
//! This module defines the error types used throughout the crate,
//! including entity resolution, component management and engine setup.

use std::fmt;

/// Result type for Galaxy3D camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D camera errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Entity key is null or was destroyed
    InvalidEntity(String),

    /// Entity already owns a camera component
    ComponentAlreadyExists(String),

    /// Entity has no camera component
    ComponentNotFound(String),

    /// Initialization failed (engine, camera manager)
    InitializationFailed(String),

    /// Internal failure (poisoned lock, etc.)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidEntity(msg) => write!(f, "Invalid entity: {}", msg),
            Error::ComponentAlreadyExists(msg) => write!(f, "Component already exists: {}", msg),
            Error::ComponentNotFound(msg) => write!(f, "Component not found: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
