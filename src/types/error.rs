//! Error types for the car store

/// Main error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Connectivity could not be established or verified at construction.
    /// Fatal to the repository; retry policy is the caller's decision.
    #[error("connection error: {0}")]
    Connection(String),

    /// Query or decode failure while reading the collection
    #[error("read error: {0}")]
    Read(String),

    /// Failure during insert, update, or delete
    #[error("write error: {0}")]
    Write(String),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_kind_and_detail() {
        let err = StoreError::Connection("server selection timed out".into());
        assert_eq!(
            err.to_string(),
            "connection error: server selection timed out"
        );

        let err = StoreError::Read("invalid document".into());
        assert_eq!(err.to_string(), "read error: invalid document");

        let err = StoreError::Write("pool closed".into());
        assert_eq!(err.to_string(), "write error: pool closed");

        let err = StoreError::Config("timeout must be non-zero".into());
        assert_eq!(err.to_string(), "configuration error: timeout must be non-zero");
    }
}
