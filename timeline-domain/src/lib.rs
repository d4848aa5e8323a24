//! Timeline Domain Layer
//!
//! Pure domain types with zero I/O dependencies.
//! Contains the event record, its public projection and the timestamp value object.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{Event, EventId, EventView, UserId};
pub use value_objects::{DomainError, Timestamp, TIMESTAMP_FORMAT};
