//! Error types for the recipebook library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for recipebook operations.
#[derive(Debug, Error)]
pub enum RecipeError {
    /// No recipe with the given id exists in the collection.
    #[error("Recipe with ID {id} not found")]
    NotFound { id: u64 },

    /// A required field was blank or a number was not positive.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error reading or writing the data file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file exists but is not a valid recipe collection.
    #[error("Failed to parse recipes in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Any other storage failure.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl RecipeError {
    /// Whether this error came from reading, parsing or writing stored data.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            RecipeError::Io { .. } | RecipeError::Json { .. } | RecipeError::Persistence(_)
        )
    }
}

/// Result type alias for recipebook operations.
pub type Result<T> = std::result::Result<T, RecipeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_failure_grouping() {
        let io = RecipeError::Io {
            path: PathBuf::from("recipes.json"),
            source: std::io::Error::other("disk full"),
        };
        assert!(io.is_storage_failure());
        assert!(RecipeError::Persistence("boom".into()).is_storage_failure());
        assert!(!RecipeError::NotFound { id: 7 }.is_storage_failure());
        assert!(!RecipeError::InvalidInput("empty".into()).is_storage_failure());
    }

    #[test]
    fn test_not_found_message() {
        let err = RecipeError::NotFound { id: 42 };
        assert_eq!(err.to_string(), "Recipe with ID 42 not found");
    }
}
