//! Domain Entities for the Timeline
//!
//! The event record as read from the log, and the reduced projection
//! returned to API clients.

use crate::value_objects::Timestamp;
use serde::{Deserialize, Serialize};

// =============================================================================
// Identifiers
// =============================================================================

/// Unique identifier for an Event
pub type EventId = String;

/// Identifier of the user owning an Event
pub type UserId = String;

// =============================================================================
// Event
// =============================================================================

/// A single recorded API call attributed to a user.
///
/// `id`, `timestamp` and `user_id` are required; every other field is carried
/// through unchanged and defaults to empty when missing from the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub timestamp: Timestamp,
    pub user_id: UserId,

    // Call description
    #[serde(default)]
    pub caller_ip: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub call_path: String,
    #[serde(default)]
    pub server_url: String,
    #[serde(default)]
    pub status_code: u16,

    // Service / endpoint
    #[serde(default)]
    pub service_name: String,
    #[serde(default)]
    pub endpoint_path: String,
    #[serde(default)]
    pub endpoint_id: String,

    // Internal fields, never exposed through the API
    #[serde(default)]
    pub request_content_type: String,
    #[serde(default)]
    pub request_size: u64,
    #[serde(default)]
    pub response_content_type: String,
    #[serde(default)]
    pub response_size: u64,
    #[serde(default)]
    pub auth_type: String,
    #[serde(default, rename = "attributes.name")]
    pub attributes_name: Vec<String>,
    #[serde(default, rename = "attributes.in")]
    pub attributes_in: Vec<String>,
    #[serde(default, rename = "attributes.part_of")]
    pub attributes_part_of: Vec<String>,
    #[serde(default, rename = "attributes.value")]
    pub attributes_value: Vec<String>,
    #[serde(default, rename = "attributes.value_type")]
    pub attributes_value_type: Vec<String>,
}

impl Event {
    /// Create an event with only the required fields set
    pub fn new(id: impl Into<EventId>, user_id: impl Into<UserId>, timestamp: Timestamp) -> Self {
        Self {
            id: id.into(),
            timestamp,
            user_id: user_id.into(),
            caller_ip: String::new(),
            url: String::new(),
            method: String::new(),
            call_path: String::new(),
            server_url: String::new(),
            status_code: 0,
            service_name: String::new(),
            endpoint_path: String::new(),
            endpoint_id: String::new(),
            request_content_type: String::new(),
            request_size: 0,
            response_content_type: String::new(),
            response_size: 0,
            auth_type: String::new(),
            attributes_name: Vec::new(),
            attributes_in: Vec::new(),
            attributes_part_of: Vec::new(),
            attributes_value: Vec::new(),
            attributes_value_type: Vec::new(),
        }
    }

    /// Public projection of this event
    pub fn view(&self) -> EventView {
        EventView::from(self)
    }
}

// =============================================================================
// EventView
// =============================================================================

/// Public projection of an [`Event`] returned by the API.
///
/// Drops request/response sizes, content types, auth type and attribute lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventView {
    pub id: EventId,
    pub timestamp: Timestamp,
    pub caller_ip: String,
    pub url: String,
    pub method: String,
    pub call_path: String,
    pub server_url: String,
    pub status_code: u16,
    pub user_id: UserId,
    pub service_name: String,
    pub endpoint_path: String,
    pub endpoint_id: String,
}

impl From<&Event> for EventView {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            timestamp: event.timestamp,
            caller_ip: event.caller_ip.clone(),
            url: event.url.clone(),
            method: event.method.clone(),
            call_path: event.call_path.clone(),
            server_url: event.server_url.clone(),
            status_code: event.status_code,
            user_id: event.user_id.clone(),
            service_name: event.service_name.clone(),
            endpoint_path: event.endpoint_path.clone(),
            endpoint_id: event.endpoint_id.clone(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
