//! Pull-to-refresh gesture tracking.

/// Tracks one vertical touch gesture and decides whether it is a pull-to-refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullToRefresh {
    threshold_px: i32,
    start_y: Option<i32>,
    distance: i32,
}

impl PullToRefresh {
    /// Creates a tracker that fires once a pull exceeds `threshold_px`.
    pub fn new(threshold_px: i32) -> Self {
        Self {
            threshold_px,
            start_y: None,
            distance: 0,
        }
    }

    /// Records the touch start position.
    pub fn touch_start(&mut self, y: i32) {
        self.start_y = Some(y);
        self.distance = 0;
    }

    /// Records movement. Returns `true` when the page is at the top and the user is pulling
    /// down, in which case native scrolling should be suppressed.
    pub fn touch_move(&mut self, y: i32, at_top: bool) -> bool {
        let Some(start_y) = self.start_y else {
            return false;
        };
        self.distance = y - start_y;
        self.distance > 0 && at_top
    }

    /// Ends the gesture. Returns `true` when a refresh should be triggered.
    pub fn touch_end(&mut self, at_top: bool) -> bool {
        let triggered = self.start_y.is_some() && self.distance > self.threshold_px && at_top;
        self.start_y = None;
        self.distance = 0;
        triggered
    }

    /// Current pull distance in pixels.
    pub fn distance(&self) -> i32 {
        self.distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_pull_at_top_triggers_refresh() {
        let mut gesture = PullToRefresh::new(60);
        gesture.touch_start(100);
        assert!(gesture.touch_move(180, true));
        assert_eq!(gesture.distance(), 80);
        assert!(gesture.touch_end(true));
        assert_eq!(gesture.distance(), 0);
    }

    #[test]
    fn short_pull_or_scrolled_page_does_not_refresh() {
        let mut gesture = PullToRefresh::new(60);
        gesture.touch_start(100);
        gesture.touch_move(150, true);
        assert!(!gesture.touch_end(true));

        gesture.touch_start(100);
        assert!(!gesture.touch_move(300, false));
        assert!(!gesture.touch_end(false));
    }

    #[test]
    fn upward_swipe_is_not_a_pull() {
        let mut gesture = PullToRefresh::new(60);
        gesture.touch_start(300);
        assert!(!gesture.touch_move(100, true));
        assert!(!gesture.touch_end(true));
    }

    #[test]
    fn end_without_start_is_ignored() {
        let mut gesture = PullToRefresh::new(60);
        assert!(!gesture.touch_move(500, true));
        assert!(!gesture.touch_end(true));
    }
}
