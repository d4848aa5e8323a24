//! Timeline query: the single entry point used by the HTTP layer.
//!
//! Composes store lookup → window computation → pagination. Holds no state of
//! its own beyond a shared handle to an immutable repository, so any number of
//! handlers can resolve queries concurrently.
//!
//! # Resolution
//!
//! 1. Unknown user → `UserNotFound`
//! 2. Event ID given: unknown, or owned by someone else → `EventNotFound`;
//!    otherwise the range is just that event. No event ID: the whole timeline.
//! 3. A valid positive `limit` recomputes the range around the event (or from
//!    the start). Anything else leaves the step-2 range alone.
//! 4. A valid integer `page` shifts the range, but only when a limit is set.

use std::sync::Arc;

use timeline_domain::Event;
use timeline_engine::{compute_window, paginate, Limit, Page, Window};
use timeline_store::TimelineRepository;
use tracing::debug;

use crate::error::{QueryError, QueryResult};

/// Query facade over a timeline repository.
pub struct TimelineQuery<R: TimelineRepository> {
    repo: Arc<R>,
}

impl<R: TimelineRepository> Clone for TimelineQuery<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: TimelineRepository> TimelineQuery<R> {
    /// Create a query facade over a shared repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The underlying repository.
    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    /// Resolve a request to the slice of the user's timeline it selects.
    ///
    /// Empty strings count as absent for `event_id`, `limit` and `page`.
    pub fn resolve(
        &self,
        user_id: &str,
        event_id: Option<&str>,
        limit: Option<&str>,
        page: Option<&str>,
    ) -> QueryResult<&[Event]> {
        let (events, window) = self.resolve_window(user_id, event_id, limit, page)?;

        Ok(events.get(window.range()).unwrap_or_default())
    }

    /// Resolve a request to the user's timeline and the selected window.
    pub fn resolve_window(
        &self,
        user_id: &str,
        event_id: Option<&str>,
        limit: Option<&str>,
        page: Option<&str>,
    ) -> QueryResult<(&[Event], Window)> {
        debug!(user_id, ?event_id, ?limit, ?page, "Resolving timeline query");

        if user_id.is_empty() {
            return Err(QueryError::MissingUserId);
        }

        let events = self
            .repo
            .user_events(user_id)
            .ok_or_else(|| QueryError::UserNotFound(user_id.to_string()))?;

        let anchor = match event_id.filter(|id| !id.is_empty()) {
            Some(event_id) => Some(self.anchor_position(user_id, event_id)?),
            None => None,
        };

        let len = events.len();
        let limit = Limit::from_param(limit);

        let window = compute_window(len, anchor, limit);
        let window = match limit {
            Some(limit) => paginate(window, limit, Page::from_param(page), len),
            None => window,
        };

        debug!(
            user_id,
            events = len,
            ?anchor,
            %window,
            "Resolved timeline window"
        );

        Ok((events, window))
    }

    fn anchor_position(&self, user_id: &str, event_id: &str) -> QueryResult<usize> {
        self.repo
            .locate(event_id)
            .filter(|location| location.user_id == user_id)
            .map(|location| location.position)
            .ok_or_else(|| QueryError::EventNotFound(event_id.to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use timeline_store::EventStore;
    use timeline_testkit::{seed_interleaved_timelines, seed_user_timeline, timeline_id};

    /// alice: e0..e9, bob: e0..e2
    fn build_query() -> TimelineQuery<EventStore> {
        let events = seed_interleaved_timelines(&[("alice", 10), ("bob", 3)]);
        TimelineQuery::new(Arc::new(EventStore::build(events).unwrap()))
    }

    fn ids(events: &[Event]) -> Vec<String> {
        events.iter().map(|event| event.id.clone()).collect()
    }

    fn alice(range: std::ops::Range<usize>) -> Vec<String> {
        range.map(|i| timeline_id("alice", i)).collect()
    }

    // =========================================================================
    // Failures
    // =========================================================================

    #[test]
    fn test_unknown_user() {
        let query = build_query();
        let err = query.resolve("carol", None, None, None).unwrap_err();
        assert_eq!(err, QueryError::UserNotFound("carol".to_string()));
    }

    #[test]
    fn test_missing_user() {
        let query = build_query();
        let err = query.resolve("", None, Some("5"), None).unwrap_err();
        assert_eq!(err, QueryError::MissingUserId);
    }

    #[test]
    fn test_unknown_event_regardless_of_limit_and_page() {
        let query = build_query();

        for (limit, page) in [(None, None), (Some("4"), None), (Some("4"), Some("1"))] {
            let err = query.resolve("alice", Some("nope"), limit, page).unwrap_err();
            assert_eq!(err, QueryError::EventNotFound("nope".to_string()));
        }
    }

    #[test]
    fn test_event_of_another_user_is_not_found() {
        let query = build_query();
        let bob_event = timeline_id("bob", 1);
        let err = query
            .resolve("alice", Some(&bob_event), Some("4"), None)
            .unwrap_err();

        assert_eq!(err, QueryError::EventNotFound(bob_event));
    }

    // =========================================================================
    // Selection
    // =========================================================================

    #[test]
    fn test_full_timeline_in_order() {
        let query = build_query();
        let events = query.resolve("alice", None, None, None).unwrap();

        assert_eq!(ids(events), alice(0..10));
    }

    #[test]
    fn test_page_ignored_without_limit() {
        let query = build_query();
        let events = query.resolve("alice", None, None, Some("1")).unwrap();

        assert_eq!(ids(events), alice(0..10));
    }

    #[test]
    fn test_anchor_only() {
        let query = build_query();
        let anchor = timeline_id("alice", 5);
        let events = query.resolve("alice", Some(&anchor), None, None).unwrap();

        assert_eq!(ids(events), vec![anchor]);
    }

    #[test]
    fn test_anchor_with_limit() {
        let query = build_query();
        let anchor = timeline_id("alice", 5);
        let events = query
            .resolve("alice", Some(&anchor), Some("4"), None)
            .unwrap();

        assert_eq!(ids(events), alice(3..7));
    }

    #[test]
    fn test_anchor_with_limit_and_next_page() {
        let query = build_query();
        let anchor = timeline_id("alice", 5);
        let events = query
            .resolve("alice", Some(&anchor), Some("4"), Some("1"))
            .unwrap();

        assert_eq!(ids(events), alice(7..10));
    }

    #[test]
    fn test_limit_without_anchor() {
        let query = build_query();
        let events = query.resolve("alice", None, Some("3"), None).unwrap();
        assert_eq!(ids(events), alice(0..3));

        let events = query.resolve("alice", None, Some("3"), Some("2")).unwrap();
        assert_eq!(ids(events), alice(6..9));
    }

    #[test]
    fn test_page_out_of_range_is_empty() {
        let query = build_query();
        let anchor = timeline_id("alice", 9);
        let events = query
            .resolve("alice", Some(&anchor), Some("5"), Some("2"))
            .unwrap();

        assert!(events.is_empty());
    }

    #[test]
    fn test_invalid_limit_disables_windowing_and_paging() {
        let query = build_query();
        let anchor = timeline_id("alice", 5);

        for limit in ["", "abc", "0", "-4"] {
            let events = query
                .resolve("alice", Some(&anchor), Some(limit), Some("1"))
                .unwrap();
            assert_eq!(ids(events), vec![anchor.clone()], "limit={:?}", limit);
        }
    }

    #[test]
    fn test_invalid_page_is_ignored() {
        let query = build_query();
        let anchor = timeline_id("alice", 5);
        let events = query
            .resolve("alice", Some(&anchor), Some("4"), Some("next"))
            .unwrap();

        assert_eq!(ids(events), alice(3..7));
    }

    #[test]
    fn test_empty_event_id_is_absent() {
        let query = build_query();
        let events = query.resolve("alice", Some(""), Some("2"), None).unwrap();

        assert_eq!(ids(events), alice(0..2));
    }

    #[test]
    fn test_resolve_window_reports_range() {
        let query = build_query();
        let anchor = timeline_id("alice", 5);
        let (events, window) = query
            .resolve_window("alice", Some(&anchor), Some("4"), None)
            .unwrap();

        assert_eq!(events.len(), 10);
        assert_eq!(window, Window::new(3, 7));
    }

    // =========================================================================
    // Determinism
    // =========================================================================

    #[test]
    fn test_repeated_resolve_is_identical() {
        let query = build_query();
        let anchor = timeline_id("alice", 2);

        let first = query
            .resolve("alice", Some(&anchor), Some("5"), Some("-1"))
            .unwrap()
            .to_vec();
        let second = query
            .resolve("alice", Some(&anchor), Some("5"), Some("-1"))
            .unwrap()
            .to_vec();

        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_resolve_is_deterministic() {
        let store = Arc::new(EventStore::build(seed_user_timeline("alice", 50)).unwrap());
        let query = TimelineQuery::new(store);
        let anchor = timeline_id("alice", 30);

        let expected = ids(query
            .resolve("alice", Some(&anchor), Some("7"), Some("1"))
            .unwrap());

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let query = query.clone();
                    let anchor = anchor.clone();
                    scope.spawn(move || {
                        (0..100)
                            .map(|_| {
                                ids(query
                                    .resolve("alice", Some(&anchor), Some("7"), Some("1"))
                                    .unwrap())
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            for handle in handles {
                for result in handle.join().unwrap() {
                    assert_eq!(result, expected);
                }
            }
        });
    }
}
