//! Domain Layer - Errors
//!
//! Shared error and result types for domain operations.

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum DomainError {
    /// Filesystem or serialization failure while persisting the list
    Io(String),
    /// Referenced an item that does not exist
    NotFound(String),
    /// Close-confirmation flow was driven out of order
    InvalidState(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Io(msg) => write!(f, "I/O error: {}", msg),
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
