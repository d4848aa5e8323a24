//! Storage layer errors

use thiserror::Error;

/// Errors that can occur while building the store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Same event ID seen twice in the input
    #[error("Duplicate event id {event_id}: owned by {first_user} and {second_user}")]
    DuplicateEventId {
        /// The repeated event ID
        event_id: String,
        /// Owner of the first occurrence
        first_user: String,
        /// Owner of the repeated occurrence
        second_user: String,
    },
}

impl StoreError {
    /// Create a duplicate ID error
    pub fn duplicate(
        event_id: impl Into<String>,
        first_user: impl Into<String>,
        second_user: impl Into<String>,
    ) -> Self {
        Self::DuplicateEventId {
            event_id: event_id.into(),
            first_user: first_user.into(),
            second_user: second_user.into(),
        }
    }
}
