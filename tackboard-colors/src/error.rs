//! Error types for the color catalog

use thiserror::Error;

/// Result type for color registry operations
pub type Result<T> = std::result::Result<T, ColorsError>;

/// Errors that can occur when building a color registry.
///
/// Catalog reads are total and never produce an error; validation happens
/// once, at registry construction.
#[derive(Debug, Error)]
pub enum ColorsError {
    /// Duplicate color id
    #[error("duplicate color id: {id}")]
    DuplicateId { id: String },

    /// Id is not a lower-case ASCII token
    #[error("invalid color id: {id}")]
    InvalidId { id: String },

    /// A definition field is empty
    #[error("empty {field} for color: {id}")]
    EmptyField { field: String, id: String },

    /// Registry has no entries
    #[error("color registry has no entries")]
    Empty,
}

impl ColorsError {
    /// Create a duplicate id error
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    /// Create an invalid id error
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId { id: id.into() }
    }

    /// Create an empty field error
    pub fn empty_field(field: impl Into<String>, id: impl Into<String>) -> Self {
        Self::EmptyField {
            field: field.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ColorsError::invalid_id("Not A Token");
        assert_eq!(err.to_string(), "invalid color id: Not A Token");
    }

    #[test]
    fn test_empty_field_display() {
        let err = ColorsError::empty_field("border", "teal");
        assert!(err.to_string().contains("border"));
        assert!(err.to_string().contains("teal"));
    }
}
