//! Repository trait definitions (Ports)
//!
//! The query layer only reads through this trait, so it works against any
//! immutable snapshot of per-user timelines.

use timeline_domain::{Event, UserId};

/// Where an event lives: its owner and its position in the owner's sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventLocation {
    /// Owning user
    pub user_id: UserId,
    /// Position in the owner's chronologically sorted sequence
    pub position: usize,
}

/// Read access to per-user timelines.
pub trait TimelineRepository: Send + Sync {
    /// Events of a user sorted ascending by timestamp, `None` for unknown users
    fn user_events(&self, user_id: &str) -> Option<&[Event]>;

    /// Location of an event, `None` for unknown IDs
    fn locate(&self, event_id: &str) -> Option<&EventLocation>;

    /// Position of an event within its owner's sequence
    fn lookup_index(&self, event_id: &str) -> Option<usize> {
        self.locate(event_id).map(|location| location.position)
    }
}
