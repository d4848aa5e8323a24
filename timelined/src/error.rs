//! Daemon error types.

use thiserror::Error;
use timeline_eventlog::EventLogError;
use timeline_store::StoreError;

/// Daemon-level errors. All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Event log could not be read
    #[error("Event log error: {0}")]
    EventLog(#[from] EventLogError),

    /// Event store could not be built
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Listener or server I/O error
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Result type for daemon operations.
pub type DaemonResult<T> = Result<T, DaemonError>;

/// Failures reported to the caller of a timeline query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No user ID in the request
    #[error("no user id was provided")]
    MissingUserId,

    /// User has no events in the store
    #[error("cannot find user events for {0}")]
    UserNotFound(String),

    /// Event is unknown, or belongs to another user
    #[error("cannot find index for event: {0}")]
    EventNotFound(String),
}

/// Result type for timeline queries.
pub type QueryResult<T> = Result<T, QueryError>;
