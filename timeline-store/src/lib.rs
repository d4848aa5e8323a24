//! Timeline Storage Layer
//!
//! Holds every user's events in chronological order, plus an index from event
//! ID to its position in the owning user's sequence.
//!
//! # Architecture
//!
//! - **Repository trait**: Read interface used by the query layer (port)
//! - **In-memory store**: Built once from the full event list, immutable afterwards
//!
//! # Usage
//!
//! ```rust
//! use timeline_domain::{Event, Timestamp};
//! use timeline_store::{EventStore, TimelineRepository};
//!
//! let events = vec![
//!     Event::new("b", "alice", Timestamp::parse("2020-02-10 16:00:01.000").unwrap()),
//!     Event::new("a", "alice", Timestamp::parse("2020-02-10 16:00:00.000").unwrap()),
//! ];
//!
//! let store = EventStore::build(events).unwrap();
//!
//! let timeline = store.user_events("alice").unwrap();
//! assert_eq!(timeline[0].id, "a");
//! assert_eq!(store.lookup_index("b"), Some(1));
//! ```

#![warn(clippy::all)]

// Modules
mod error;
mod memory;
mod repository;

// Re-exports
pub use error::StoreError;
pub use memory::EventStore;
pub use repository::{EventLocation, TimelineRepository};
