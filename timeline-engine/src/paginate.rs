//! Page shifting (Pure Functions)
//!
//! Moves a computed window by whole pages and re-clamps it to the sequence.

use crate::params::{Limit, Page};
use crate::window::Window;

/// Shift `window` by `page * limit` positions within a sequence of `len` events.
///
/// Without a page the window is returned unchanged. Both bounds are clamped to
/// `[0, len]` independently, so a page past either end of the sequence yields
/// an empty window rather than an error.
///
/// # Examples
///
/// ```
/// # use timeline_engine::{paginate, Limit, Page, Window};
/// let limit = Limit::new(4).unwrap();
///
/// // Next page, truncated by the end of the sequence
/// let next = paginate(Window::new(3, 7), limit, Some(Page::new(1)), 10);
/// assert_eq!(next, Window::new(7, 10));
///
/// // Far past the end
/// let beyond = paginate(Window::new(3, 7), limit, Some(Page::new(5)), 10);
/// assert!(beyond.is_empty());
/// ```
pub fn paginate(window: Window, limit: Limit, page: Option<Page>, len: usize) -> Window {
    let Some(page) = page else {
        return window;
    };

    let max = i64::try_from(len).unwrap_or(i64::MAX);
    let step = i64::try_from(limit.get()).unwrap_or(i64::MAX);
    let offset = page.get().saturating_mul(step);

    let shift = |position: usize| -> usize {
        let position = i64::try_from(position).unwrap_or(i64::MAX);
        // Clamped into [0, len], so the cast back cannot truncate
        position.saturating_add(offset).clamp(0, max) as usize
    };

    Window::new(shift(window.start), shift(window.end))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn limit(value: usize) -> Limit {
        Limit::new(value).unwrap()
    }

    #[test]
    fn test_no_page_is_noop() {
        for (start, end) in [(0, 0), (0, 10), (3, 7), (9, 10)] {
            let window = Window::new(start, end);
            assert_eq!(paginate(window, limit(4), None, 10), window);
        }
    }

    #[test]
    fn test_page_zero_is_noop() {
        let window = Window::new(3, 7);
        assert_eq!(paginate(window, limit(4), Some(Page::new(0)), 10), window);
    }

    #[test]
    fn test_next_page_truncated_at_end() {
        // e0..e9, anchor e5, limit 4, page 1 → {e7, e8, e9}
        let window = paginate(Window::new(3, 7), limit(4), Some(Page::new(1)), 10);
        assert_eq!(window, Window::new(7, 10));
        assert_eq!(window.len(), 3);
    }

    #[test]
    fn test_previous_page() {
        let window = paginate(Window::new(5, 10), limit(5), Some(Page::new(-1)), 10);
        assert_eq!(window, Window::new(0, 5));
    }

    #[test]
    fn test_previous_page_truncated_at_start() {
        let window = paginate(Window::new(3, 7), limit(4), Some(Page::new(-1)), 10);
        assert_eq!(window, Window::new(0, 3));
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let window = paginate(Window::new(0, 5), limit(5), Some(Page::new(20)), 12);
        assert!(window.is_empty());
        assert_eq!(window, Window::new(12, 12));
    }

    #[test]
    fn test_page_before_start_is_empty() {
        let window = paginate(Window::new(0, 5), limit(5), Some(Page::new(-2)), 12);
        assert!(window.is_empty());
        assert_eq!(window, Window::new(0, 0));
    }

    #[test]
    fn test_extreme_page_does_not_overflow() {
        let forward = paginate(Window::new(0, 5), limit(5), Some(Page::new(i64::MAX)), 12);
        assert_eq!(forward, Window::new(12, 12));

        let backward = paginate(Window::new(0, 5), limit(5), Some(Page::new(i64::MIN)), 12);
        assert_eq!(backward, Window::new(0, 0));
    }

    #[test]
    fn test_result_within_bounds() {
        for page in -5..=5 {
            for l in 1..=6 {
                for start in 0..=10 {
                    for end in start..=10 {
                        let window =
                            paginate(Window::new(start, end), limit(l), Some(Page::new(page)), 10);
                        assert!(window.start <= window.end);
                        assert!(window.end <= 10);
                    }
                }
            }
        }
    }
}
