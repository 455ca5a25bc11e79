//! Bookkeeping for the debounced user search.
//!
//! Every edit of the search box goes through [`SearchTracker::schedule`],
//! which hands out a monotonically increasing query id. The id travels with
//! the debounce timer and with the request; when either comes back the
//! tracker decides whether it still refers to the latest edit. Anything older
//! is dropped, so a slow response can never overwrite the results of a newer
//! query.

#[derive(Debug, Default)]
pub struct SearchTracker {
    next_query_id: u64,
    latest: Option<u64>,
    in_flight: Option<u64>,
}

impl SearchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new value of the search box.
    ///
    /// Returns the id to fire once the debounce elapses, or `None` for an
    /// empty query, which also invalidates any pending or in-flight search.
    pub fn schedule(&mut self, query: &str) -> Option<u64> {
        self.in_flight = None;
        if query.is_empty() {
            self.latest = None;
            return None;
        }
        self.next_query_id = self.next_query_id.wrapping_add(1);
        self.latest = Some(self.next_query_id);
        self.latest
    }

    /// Called when the debounce timer for `id` fires. Returns `true` when the
    /// request should actually be sent.
    pub fn begin(&mut self, id: u64) -> bool {
        if self.latest == Some(id) {
            self.in_flight = Some(id);
            true
        } else {
            false
        }
    }

    /// Called with the id of a finished request. Returns `true` when its
    /// result should be applied to the view.
    pub fn accept(&mut self, id: u64) -> bool {
        if self.in_flight == Some(id) && self.latest == Some(id) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn latest(&self) -> Option<u64> {
        self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_query_runs_to_completion() {
        let mut tracker = SearchTracker::new();
        let id = tracker.schedule("ana").unwrap();

        assert!(tracker.begin(id));
        assert!(tracker.is_in_flight());
        assert!(tracker.accept(id));
        assert!(!tracker.is_in_flight());
    }

    #[test]
    fn retyping_supersedes_pending_timer() {
        let mut tracker = SearchTracker::new();
        let first = tracker.schedule("a").unwrap();
        let second = tracker.schedule("an").unwrap();

        assert!(second > first);
        assert!(!tracker.begin(first));
        assert!(tracker.begin(second));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut tracker = SearchTracker::new();
        let first = tracker.schedule("a").unwrap();
        assert!(tracker.begin(first));

        let second = tracker.schedule("ab").unwrap();
        assert!(!tracker.is_in_flight());
        assert!(!tracker.accept(first));

        assert!(tracker.begin(second));
        assert!(tracker.accept(second));
    }

    #[test]
    fn clearing_the_box_invalidates_everything() {
        let mut tracker = SearchTracker::new();
        let id = tracker.schedule("bob").unwrap();
        assert!(tracker.begin(id));

        assert_eq!(tracker.schedule(""), None);
        assert_eq!(tracker.latest(), None);
        assert!(!tracker.is_in_flight());
        assert!(!tracker.accept(id));
    }

    #[test]
    fn whitespace_is_a_real_query() {
        let mut tracker = SearchTracker::new();
        assert!(tracker.schedule(" ").is_some());
    }

    #[test]
    fn response_is_accepted_once() {
        let mut tracker = SearchTracker::new();
        let id = tracker.schedule("x").unwrap();
        tracker.begin(id);

        assert!(tracker.accept(id));
        assert!(!tracker.accept(id));
    }
}
