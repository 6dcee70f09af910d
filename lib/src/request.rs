use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued request so its response can be matched against the
/// latest request of the same kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Hands out monotonically increasing tokens. Only the most recently issued
/// token is current; responses for older tokens are stale.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestToken {
        RequestToken(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.load(Ordering::Acquire) == token.0
    }

    /// Makes every issued token stale, e.g. when the user navigates away.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::AcqRel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_latest_token_is_current() {
        let tracker = RequestTracker::new();

        let first = tracker.issue();
        assert!(tracker.is_current(first));

        let second = tracker.issue();
        assert!(second > first);
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn invalidate_makes_everything_stale() {
        let tracker = RequestTracker::new();
        let token = tracker.issue();

        tracker.invalidate();

        assert!(!tracker.is_current(token));
        assert!(tracker.is_current(tracker.issue()));
    }
}
