//! Test helpers for timeline tests.
//!
//! Provides event builders, per-user timeline seeding and on-disk event logs.

mod helpers;

pub use helpers::{
    base_timestamp, seed_event, seed_interleaved_timelines, seed_user_timeline, timeline_id,
    SeedEventOptions,
};

use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use timeline_domain::Event;

/// Render events as event log lines (one JSON record per line).
pub fn to_log_lines(events: &[Event]) -> Result<String> {
    let mut out = String::new();
    for event in events {
        out.push_str(&serde_json::to_string(event)?);
        out.push('\n');
    }
    Ok(out)
}

/// Write events to a temporary event log file.
///
/// The file is removed when the returned handle is dropped.
pub fn write_event_log(events: &[Event]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(to_log_lines(events)?.as_bytes())?;
    file.flush()?;
    Ok(file)
}
