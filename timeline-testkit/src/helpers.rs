//! Event builders for seeding stores and logs.

use chrono::{Duration, TimeZone, Utc};
use timeline_domain::{Event, Timestamp};
use uuid::Uuid;

/// Options for seeding a single event.
pub struct SeedEventOptions {
    /// Event ID (random UUID if None)
    pub id: Option<String>,
    /// Owning user
    pub user_id: String,
    /// Offset from [`base_timestamp`] in seconds
    pub offset_secs: i64,
    /// HTTP method (defaults to GET)
    pub method: String,
    /// Status code (defaults to 200)
    pub status_code: u16,
    /// Service name (defaults to "users")
    pub service_name: String,
}

impl SeedEventOptions {
    /// Options for a GET call by `user_id` at `offset_secs`.
    pub fn new(user_id: impl Into<String>, offset_secs: i64) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            offset_secs,
            method: "GET".to_string(),
            status_code: 200,
            service_name: "users".to_string(),
        }
    }

    /// Set a fixed event ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Fixed origin for seeded timestamps: 2020-02-10 16:00:00.000 UTC.
pub fn base_timestamp() -> Timestamp {
    Timestamp::from(Utc.with_ymd_and_hms(2020, 2, 10, 16, 0, 0).unwrap())
}

/// Deterministic ID of the `index`-th event of a seeded timeline.
pub fn timeline_id(user_id: &str, index: usize) -> String {
    format!("{}-e{}", user_id, index)
}

/// Build one event with descriptive fields filled in.
pub fn seed_event(options: SeedEventOptions) -> Event {
    let SeedEventOptions {
        id,
        user_id,
        offset_secs,
        method,
        status_code,
        service_name,
    } = options;

    let id = id.unwrap_or_else(|| Uuid::new_v4().to_string());
    let timestamp =
        Timestamp::from(base_timestamp().as_datetime() + Duration::seconds(offset_secs));

    let mut event = Event::new(id, user_id, timestamp);
    event.caller_ip = "10.0.0.1".to_string();
    event.url = format!("https://api.example.com/{}", service_name);
    event.method = method;
    event.call_path = format!("/{}", service_name);
    event.server_url = "https://api.example.com".to_string();
    event.status_code = status_code;
    event.endpoint_path = format!("/{}", service_name);
    event.endpoint_id = format!("{}-endpoint", service_name);
    event.service_name = service_name;
    event.request_content_type = "application/json".to_string();
    event.response_content_type = "application/json".to_string();
    event.response_size = 256;
    event.auth_type = "bearer".to_string();
    event
}

/// Seed `count` events for one user, one second apart, returned in reverse
/// chronological order so that building a store has to sort them.
///
/// The event at chronological position `i` has ID [`timeline_id`]`(user_id, i)`.
pub fn seed_user_timeline(user_id: &str, count: usize) -> Vec<Event> {
    (0..count)
        .rev()
        .map(|i| {
            seed_event(
                SeedEventOptions::new(user_id, i as i64).with_id(timeline_id(user_id, i)),
            )
        })
        .collect()
}

/// Seed several users' timelines interleaved with each other.
pub fn seed_interleaved_timelines(users: &[(&str, usize)]) -> Vec<Event> {
    let mut timelines: Vec<Vec<Event>> = users
        .iter()
        .map(|(user_id, count)| seed_user_timeline(user_id, *count))
        .collect();

    let mut events = Vec::new();
    loop {
        let mut progressed = false;
        for timeline in timelines.iter_mut() {
            if let Some(event) = timeline.pop() {
                events.push(event);
                progressed = true;
            }
        }
        if !progressed {
            break;
        }
    }
    events
}
