//! Error types for storage operations.

use thiserror::Error;

/// Errors produced by [`crate::ProductStore`] implementations.
///
/// Every variant maps to a single, well-defined HTTP status in the REST
/// layer: `NotFound` → 404, `InvalidInput` and `InvalidState` → 400.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No product exists with the given identifier.
    #[error("producto {id} no encontrado")]
    NotFound {
        /// The identifier that was looked up.
        id: u64,
    },

    /// A write input failed validation.
    #[error("{message}")]
    InvalidInput {
        /// Human-readable description of the rejected field(s).
        message: String,
    },

    /// The operation is not valid for the record's current state,
    /// e.g. restoring a product that is not soft-deleted.
    #[error("{message}")]
    InvalidState {
        /// Human-readable description of the state conflict.
        message: String,
    },
}

impl StoreError {
    /// Convenience constructor for `InvalidInput`.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        StoreError::InvalidInput {
            message: message.into(),
        }
    }

    /// Convenience constructor for `InvalidState`.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        StoreError::InvalidState {
            message: message.into(),
        }
    }
}

/// Result type alias for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = StoreError::NotFound { id: 42 };
        assert_eq!(err.to_string(), "producto 42 no encontrado");
    }

    #[test]
    fn test_invalid_input_display() {
        let err = StoreError::invalid_input("precio debe ser mayor que 0");
        assert_eq!(err.to_string(), "precio debe ser mayor que 0");
    }
}
