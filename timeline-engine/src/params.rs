//! Typed request parameters.
//!
//! `limit` and `page` arrive as optional strings. Anything that does not parse
//! is treated exactly like a missing parameter, so both parsers return
//! `Option` instead of an error.

use std::fmt;
use std::num::NonZeroUsize;

// =============================================================================
// Limit
// =============================================================================

/// Requested window size.
///
/// # Invariants
/// - Always >= 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Limit(NonZeroUsize);

impl Limit {
    /// Create a limit, `None` for zero
    pub fn new(value: usize) -> Option<Self> {
        NonZeroUsize::new(value).map(Self)
    }

    /// Parse a positive integer.
    ///
    /// Zero, negative numbers and non-numeric input all yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse::<usize>().ok().and_then(Self::new)
    }

    /// Parse an optional raw parameter
    pub fn from_param(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Self::parse)
    }

    /// Get the underlying size
    pub fn get(&self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Page
// =============================================================================

/// Page multiplier applied to a [`Limit`]. May be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Page(i64);

impl Page {
    /// Create a page
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parse a signed integer, `None` for anything else
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse::<i64>().ok().map(Self)
    }

    /// Parse an optional raw parameter
    pub fn from_param(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Self::parse)
    }

    /// Get the underlying page number
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================
