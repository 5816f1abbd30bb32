//! Error types for the cart crate.

use thiserror::Error;

/// Errors surfaced by a storage backend.
///
/// The store handles every variant locally. A failed read degrades to an
/// empty cart and a failed write is logged at warning level; the in-memory
/// collection stays authoritative for the session either way.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend failure that is not an I/O error.
    #[error("storage backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Backend("storage offline".to_string());
        assert_eq!(err.to_string(), "storage backend error: storage offline");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::other("disk gone");
        let err = StorageError::from(io);
        assert!(matches!(err, StorageError::Io(_)));
    }
}
