//! Event Log Reading

use std::io::BufRead;
use std::path::Path;

use timeline_domain::Event;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::types::{EventLogError, Result};

/// Decode one line of the log.
///
/// Returns `Ok(None)` for blank lines. `line` is the 1-based line number used
/// in the error.
pub fn parse_record(line: usize, raw: &str) -> Result<Option<Event>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    serde_json::from_str(raw)
        .map(Some)
        .map_err(|source| EventLogError::MalformedRecord { line, source })
}

/// Read every record from a buffered reader.
pub fn read_events<R: BufRead>(reader: R) -> Result<Vec<Event>> {
    let mut events = Vec::new();

    for (index, raw) in reader.lines().enumerate() {
        let raw = raw?;
        if let Some(event) = parse_record(index + 1, &raw)? {
            events.push(event);
        }
    }

    Ok(events)
}

/// Load the event log at `path`.
///
/// The final line is read even without a trailing newline.
pub async fn load_event_file(path: impl AsRef<Path>) -> Result<Vec<Event>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Opening event log");

    let file = tokio::fs::File::open(path)
        .await
        .map_err(|source| EventLogError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let mut lines = BufReader::new(file).lines();
    let mut events = Vec::new();
    let mut line = 0;

    while let Some(raw) = lines.next_line().await? {
        line += 1;
        if let Some(event) = parse_record(line, &raw)? {
            events.push(event);
        }
    }

    info!(path = %path.display(), lines = line, events = events.len(), "Event log loaded");

    Ok(events)
}
