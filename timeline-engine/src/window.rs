//! Window Computation (Pure Functions)
//!
//! Selects the half-open index range `[start, end)` of a user's sequence that a
//! request should return.
//!
//! # Algorithm
//!
//! ```text
//! no anchor, no limit  → [0, N)
//! anchor,    no limit  → [anchor, anchor + 1)
//! limit L              → base  = anchor or 0
//!                        start = max(0, base - L/2)
//!                        end   = min(N, start + L)
//!                        if end - start < L:
//!                            start = max(0, start - (L - (end - start)))
//! ```
//!
//! Key invariants:
//! - `0 <= start <= end <= N`
//! - When `N >= L` the window holds exactly `L` positions
//! - Near the tail the window borrows leading context instead of shrinking

use std::fmt;
use std::ops::Range;

use crate::params::Limit;

/// Half-open index range into a per-user sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    /// First selected position (inclusive)
    pub start: usize,
    /// One past the last selected position
    pub end: usize,
}

impl Window {
    /// Create a window; `start` is pulled down to `end` if it lies past it.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: start.min(end),
            end,
        }
    }

    /// The whole sequence
    pub fn full(len: usize) -> Self {
        Self::new(0, len)
    }

    /// Exactly one position
    pub fn single(position: usize) -> Self {
        Self::new(position, position.saturating_add(1))
    }

    /// Number of selected positions
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether no position is selected
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Slice range for indexing a sequence
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Compute the window for a sequence of `len` events.
///
/// # Arguments
///
/// * `len` - Length of the user's sequence
/// * `anchor` - Position of the requested event, if any (must be `< len`)
/// * `limit` - Requested window size, if any
///
/// # Examples
///
/// ```
/// # use timeline_engine::{compute_window, Limit, Window};
/// // Centered on position 5
/// assert_eq!(compute_window(10, Some(5), Limit::new(4)), Window::new(3, 7));
///
/// // Tail reached: extend to the left
/// assert_eq!(compute_window(10, Some(9), Limit::new(4)), Window::new(6, 10));
///
/// // No anchor: start of the sequence
/// assert_eq!(compute_window(10, None, Limit::new(3)), Window::new(0, 3));
/// ```
pub fn compute_window(len: usize, anchor: Option<usize>, limit: Option<Limit>) -> Window {
    let limit = match limit {
        Some(limit) => limit.get(),
        None => {
            return match anchor {
                Some(position) => Window::single(position),
                None => Window::full(len),
            }
        },
    };

    let base = anchor.unwrap_or(0);

    let mut start = base.saturating_sub(limit / 2);
    let end = len.min(start.saturating_add(limit));

    // Upper bound cut the window short: borrow the missing positions from the left
    let taken = end.saturating_sub(start);
    if taken < limit {
        start = start.saturating_sub(limit - taken);
    }

    Window::new(start, end)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(value: usize) -> Option<Limit> {
        Limit::new(value)
    }

    // =========================================================================
    // Without limit
    // =========================================================================

    #[test]
    fn test_no_anchor_no_limit_is_full_sequence() {
        assert_eq!(compute_window(10, None, None), Window::new(0, 10));
        assert_eq!(compute_window(0, None, None), Window::new(0, 0));
    }

    #[test]
    fn test_anchor_without_limit_selects_anchor_only() {
        assert_eq!(compute_window(10, Some(0), None), Window::new(0, 1));
        assert_eq!(compute_window(10, Some(5), None), Window::new(5, 6));
        assert_eq!(compute_window(10, Some(9), None), Window::new(9, 10));
    }

    // =========================================================================
    // With limit
    // =========================================================================

    #[test]
    fn test_anchor_centered() {
        // e0..e9, anchor e5, limit 4 → {e3, e4, e5, e6}
        assert_eq!(compute_window(10, Some(5), limit(4)), Window::new(3, 7));
        assert_eq!(compute_window(10, Some(5), limit(5)), Window::new(3, 8));
    }

    #[test]
    fn test_anchor_near_start_is_clamped() {
        assert_eq!(compute_window(10, Some(0), limit(5)), Window::new(0, 5));
        assert_eq!(compute_window(10, Some(1), limit(5)), Window::new(0, 5));
    }

    #[test]
    fn test_anchor_near_end_extends_left() {
        // start = 7, end = min(10, 12) = 10, short by 2 → start = 5
        assert_eq!(compute_window(10, Some(9), limit(5)), Window::new(5, 10));
        assert_eq!(compute_window(10, Some(8), limit(4)), Window::new(6, 10));
    }

    #[test]
    fn test_no_anchor_with_limit_starts_at_zero() {
        assert_eq!(compute_window(10, None, limit(4)), Window::new(0, 4));
    }

    #[test]
    fn test_limit_larger_than_sequence() {
        assert_eq!(compute_window(3, Some(1), limit(10)), Window::new(0, 3));
        assert_eq!(compute_window(3, None, limit(10)), Window::new(0, 3));
        assert_eq!(compute_window(0, None, limit(10)), Window::new(0, 0));
    }

    #[test]
    fn test_limit_one_selects_anchor() {
        for anchor in 0..10 {
            assert_eq!(
                compute_window(10, Some(anchor), limit(1)),
                Window::single(anchor)
            );
        }
    }

    // =========================================================================
    // Properties
    // =========================================================================

    #[test]
    fn test_window_size_is_limit_when_sequence_is_long_enough() {
        for len in 1..=25 {
            for l in 1..=len {
                for anchor in 0..len {
                    let window = compute_window(len, Some(anchor), limit(l));
                    assert_eq!(
                        window.len(),
                        l,
                        "len={} limit={} anchor={} window={}",
                        len,
                        l,
                        anchor,
                        window
                    );
                }
            }
        }
    }

    #[test]
    fn test_window_always_within_bounds() {
        for len in 0..=20 {
            for l in 1..=25 {
                for anchor in (0..len).map(Some).chain(std::iter::once(None)) {
                    let window = compute_window(len, anchor, limit(l));
                    assert!(window.start <= window.end);
                    assert!(window.end <= len);
                    assert_eq!(window.len(), l.min(len));
                }
            }
        }
    }

    #[test]
    fn test_window_contains_anchor() {
        for len in 1..=20 {
            for l in 1..=20 {
                for anchor in 0..len {
                    let window = compute_window(len, Some(anchor), limit(l));
                    assert!(window.range().contains(&anchor));
                }
            }
        }
    }

    #[test]
    fn test_window_helpers() {
        let window = Window::new(3, 7);
        assert_eq!(window.len(), 4);
        assert!(!window.is_empty());
        assert_eq!(window.range(), 3..7);
        assert_eq!(window.to_string(), "[3, 7)");

        assert!(Window::new(5, 5).is_empty());
        assert_eq!(Window::new(8, 5), Window::new(5, 5));
    }
}
