//! Value Objects for the Timeline Domain
//!
//! Immutable, validated domain primitives.
//! All value objects enforce invariants at construction time.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual layout of event timestamps in the log (`YYYY-MM-DD HH:MM:SS.mmm`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

// `%.3f` treats the fraction as optional when parsing; the log requires it.
const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S.%3f";

/// Domain errors for value object validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Timestamp does not match the fixed log format
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp {
        /// The rejected input
        value: String,
        /// Parser message
        reason: String,
    },
}

// =============================================================================
// Timestamp
// =============================================================================

/// Point in time at which an event occurred.
///
/// # Invariants
/// - Parsed from the fixed log format, no timezone offset
/// - Always interpreted as UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Parse a timestamp in the fixed log format.
    ///
    /// # Examples
    /// ```
    /// # use timeline_domain::value_objects::Timestamp;
    /// let ts = Timestamp::parse("2020-02-10 16:37:53.041").unwrap();
    /// assert_eq!(ts.to_string(), "2020-02-10 16:37:53.041");
    /// ```
    ///
    /// # Errors
    /// Returns `DomainError::InvalidTimestamp` if the input does not match
    /// [`TIMESTAMP_FORMAT`].
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        NaiveDateTime::parse_from_str(value, TIMESTAMP_PARSE_FORMAT)
            .map(|naive| Self(naive.and_utc()))
            .map_err(|e| DomainError::InvalidTimestamp {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }

    /// Get the underlying UTC datetime
    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================
