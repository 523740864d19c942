//! Tracker error types

use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by the tracker core
#[derive(Error, Debug)]
pub enum TrackerError {
    /// An input name that is neither a requirement nor a form field
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Row number outside the food list
    #[error("No entry at row {row} (list has {len} entries)")]
    NoSuchEntry { row: usize, len: usize },

    /// Reading or writing the persisted list failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::UnknownField("fat".to_string());
        assert_eq!(err.to_string(), "Unknown field: fat");

        let err = TrackerError::NoSuchEntry { row: 4, len: 2 };
        assert_eq!(err.to_string(), "No entry at row 4 (list has 2 entries)");
    }

    #[test]
    fn test_store_error_is_transparent() {
        let err: TrackerError = StoreError::Unavailable("quota".to_string()).into();
        assert_eq!(err.to_string(), "Store unavailable: quota");
    }
}
