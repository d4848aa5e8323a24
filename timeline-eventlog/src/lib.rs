//! Event Log Module
//!
//! Reads the on-disk event log into domain events:
//! - One JSON record per line
//! - Blank lines are skipped
//! - Any malformed record aborts the whole load (no partial data)
//!
//! # Usage
//!
//! ```rust,no_run
//! use timeline_eventlog::load_event_file;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let events = load_event_file("testdata/events-sample.json").await?;
//! println!("loaded {} events", events.len());
//! # Ok(())
//! # }
//! ```

pub mod reader;
pub mod types;

pub use reader::{load_event_file, parse_record, read_events};
pub use types::{EventLogError, Result};
