use thiserror::Error;

/// Errors produced by the document store layer.
///
/// Callers treat every variant the same way: the write (or read) failed
/// and the current run should stop. There is no retry or recovery here.
#[derive(Error, Debug)]
pub enum StoreError {
    /// SQLite error from the backing database.
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Failed to obtain a connection from the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Document payload could not be encoded or decoded.
    #[error("document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store refused the write (quota, validation, ...).
    #[error("write rejected by store: {0}")]
    Rejected(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
