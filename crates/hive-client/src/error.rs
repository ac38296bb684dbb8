//! Error types for the Hive session adapter.

use thiserror::Error;

/// Result type for adapter operations.
pub type HiveResult<T> = Result<T, HiveError>;

/// Errors surfaced by the session adapter.
///
/// Every failure is returned synchronously to the caller; the adapter
/// never retries on its own.
#[derive(Debug, Error)]
pub enum HiveError {
    /// Socket open or session handshake failed at construction
    #[error("connection failed: {0}")]
    Connection(String),

    /// Query submission came back with a non-success status
    #[error("execute failed with error code {code}: {message}")]
    Execution { code: i32, message: String },

    /// A fetch was attempted before any successful execute
    #[error("no active execution")]
    NoActiveExecution,

    /// `fetch_one` against a result set with no rows
    #[error("result set is empty")]
    EmptyResult,

    /// Malformed endpoint specification
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Structurally invalid server response
    #[error("protocol violation: {0}")]
    Protocol(String),

    /// Error raised by the Thrift layer
    #[error("Thrift error: {0}")]
    Thrift(#[from] hive_thrift::ThriftError),
}
