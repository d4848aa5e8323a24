//! In-memory event store
//!
//! Built once from the full event list and never mutated afterwards, so it can
//! be shared behind an `Arc` by any number of readers without locking.

use std::collections::HashMap;

use timeline_domain::{Event, EventId, UserId};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::repository::{EventLocation, TimelineRepository};

/// Immutable per-user timelines with an event ID index.
#[derive(Debug, Default)]
pub struct EventStore {
    /// user id -> events sorted by timestamp
    user_events: HashMap<UserId, Vec<Event>>,
    /// event id -> owner and position in the owner's sequence
    event_index: HashMap<EventId, EventLocation>,
}

impl EventStore {
    /// Build the store from raw events in any order.
    ///
    /// Events are grouped by user and sorted ascending by timestamp. Events
    /// with equal timestamps keep their input order.
    ///
    /// # Errors
    /// Returns `StoreError::DuplicateEventId` if an ID occurs more than once,
    /// whether for the same user or for different users.
    pub fn build(events: impl IntoIterator<Item = Event>) -> Result<Self, StoreError> {
        let mut owners: HashMap<EventId, UserId> = HashMap::new();
        let mut user_events: HashMap<UserId, Vec<Event>> = HashMap::new();

        for event in events {
            if let Some(first_user) = owners.get(&event.id) {
                return Err(StoreError::duplicate(
                    event.id.clone(),
                    first_user.clone(),
                    event.user_id.clone(),
                ));
            }
            owners.insert(event.id.clone(), event.user_id.clone());

            user_events
                .entry(event.user_id.clone())
                .or_default()
                .push(event);
        }

        let mut event_index = HashMap::with_capacity(owners.len());

        for (user_id, timeline) in user_events.iter_mut() {
            // Stable: ties keep input order
            timeline.sort_by_key(|event| event.timestamp);

            for (position, event) in timeline.iter().enumerate() {
                event_index.insert(
                    event.id.clone(),
                    EventLocation {
                        user_id: user_id.clone(),
                        position,
                    },
                );
            }

            debug!(%user_id, events = timeline.len(), "Indexed user timeline");
        }

        info!(
            users = user_events.len(),
            events = event_index.len(),
            "Event store built"
        );

        Ok(Self {
            user_events,
            event_index,
        })
    }

    /// Events of a user in chronological order
    pub fn lookup(&self, user_id: &str) -> Option<&[Event]> {
        self.user_events.get(user_id).map(Vec::as_slice)
    }

    /// Position of an event within its owner's sequence
    pub fn lookup_index(&self, event_id: &str) -> Option<usize> {
        self.locate(event_id).map(|location| location.position)
    }

    /// Owner and position of an event
    pub fn locate(&self, event_id: &str) -> Option<&EventLocation> {
        self.event_index.get(event_id)
    }

    /// Number of users with at least one event
    pub fn user_count(&self) -> usize {
        self.user_events.len()
    }

    /// Total number of events
    pub fn event_count(&self) -> usize {
        self.event_index.len()
    }

    /// IDs of all users (unordered)
    pub fn users(&self) -> impl Iterator<Item = &str> {
        self.user_events.keys().map(String::as_str)
    }
}

impl TimelineRepository for EventStore {
    fn user_events(&self, user_id: &str) -> Option<&[Event]> {
        self.lookup(user_id)
    }

    fn locate(&self, event_id: &str) -> Option<&EventLocation> {
        EventStore::locate(self, event_id)
    }
}

// =============================================================================
// Tests
// =============================================================================
