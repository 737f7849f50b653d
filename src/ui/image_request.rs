//! Tracks the latest image request per display target.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out increasing tickets; only the most recent one may be displayed.
///
/// Decodes finish in any order, so a slow decode for an earlier card must not
/// replace the image of a card selected after it.
#[derive(Clone, Default)]
pub struct ImageRequestTracker {
    latest: Arc<AtomicU64>,
}

impl ImageRequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, superseding every earlier ticket.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `ticket` is still the latest request.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_supersedes_older() {
        let tracker = ImageRequestTracker::new();
        let slow = tracker.begin();
        let fast = tracker.begin();

        assert!(tracker.is_current(fast));
        assert!(!tracker.is_current(slow));
    }

    #[test]
    fn clones_share_the_latest_ticket() {
        let tracker = ImageRequestTracker::new();
        let worker_view = tracker.clone();
        let ticket = tracker.begin();
        assert!(worker_view.is_current(ticket));

        tracker.begin();
        assert!(!worker_view.is_current(ticket));
    }

    #[test]
    fn targets_are_tracked_independently() {
        let preview = ImageRequestTracker::new();
        let viewer = ImageRequestTracker::new();
        let preview_ticket = preview.begin();
        viewer.begin();
        viewer.begin();

        assert!(preview.is_current(preview_ticket));
    }
}
