#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    /// No element to watch yet, or the watch was torn down before firing.
    Idle,
    Armed,
    /// Terminal.
    Triggered,
}

/// One-shot latch fed with visible fractions of a watched element.
#[derive(Clone, Debug)]
pub struct RevealLatch {
    threshold: f64,
    state: RevealState,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: RevealState::Idle,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_triggered(&self) -> bool {
        self.state == RevealState::Triggered
    }

    /// The element is available for observation.
    pub fn arm(&mut self) {
        if self.state == RevealState::Idle {
            self.state = RevealState::Armed;
        }
    }

    /// Feeds one visibility sample. Returns true only on the sample that
    /// moves the latch from Armed to Triggered.
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if self.state != RevealState::Armed || visible_fraction < self.threshold {
            return false;
        }
        self.state = RevealState::Triggered;
        true
    }

    /// The element went away. An armed latch goes back to Idle without
    /// firing; a triggered one stays triggered.
    pub fn teardown(&mut self) {
        if self.state == RevealState::Armed {
            self.state = RevealState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_across_scroll_in_out_in() {
        let mut latch = RevealLatch::new(0.35);
        latch.arm();

        let samples = [0.0, 0.2, 0.5, 0.1, 0.0, 0.4, 1.0];
        let activations = samples.iter().filter(|&&fraction| latch.observe(fraction)).count();

        assert_eq!(activations, 1);
        assert!(latch.is_triggered());
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut latch = RevealLatch::new(0.35);
        latch.arm();
        assert!(!latch.observe(0.3499));
        assert!(latch.observe(0.35));
    }

    #[test]
    fn test_needs_arming() {
        let mut latch = RevealLatch::new(0.35);
        assert!(!latch.observe(1.0));
        assert_eq!(latch.state(), RevealState::Idle);
    }

    #[test]
    fn test_teardown_while_armed_does_not_fire() {
        let mut latch = RevealLatch::new(0.35);
        latch.arm();
        latch.teardown();
        assert_eq!(latch.state(), RevealState::Idle);
        assert!(!latch.observe(1.0));
        latch.teardown();
        assert_eq!(latch.state(), RevealState::Idle);
    }

    #[test]
    fn test_triggered_never_reverts() {
        let mut latch = RevealLatch::new(0.35);
        latch.arm();
        assert!(latch.observe(0.9));
        latch.teardown();
        latch.arm();
        assert!(!latch.observe(0.9));
        assert_eq!(latch.state(), RevealState::Triggered);
    }
}
