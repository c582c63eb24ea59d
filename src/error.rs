//! Error types for inventory store operations.
//!
//! Uses `thiserror` for the library surface; the demo binary wraps these in
//! `anyhow` at its edge.

use thiserror::Error;

/// Error type for every inventory store operation.
///
/// One undifferentiated storage category: anything the engine reports
/// surfaces as [`StoreError::Sqlite`]. Reads and writes propagate errors
/// the same way; handling is the caller's.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The underlying SQLite engine reported a failure.
    #[error("sqlite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },
}

/// Result type alias for inventory store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: StoreError = rusqlite::Error::InvalidQuery.into();
        assert!(err.to_string().starts_with("sqlite error:"));
    }

    #[test]
    fn test_sqlite_error_conversion() {
        let err: StoreError = rusqlite::Error::InvalidQuery.into();
        assert!(matches!(err, StoreError::Sqlite { .. }));
    }
}
