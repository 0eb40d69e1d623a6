use super::easing::{ease_out_cubic, progress};

/// Inputs of one count-up generation. A change to any field means a new
/// generation: the running animation is cancelled and a fresh one started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationRequest {
    pub target: f64,
    pub duration_ms: u32,
    pub active: bool,
}

impl AnimationRequest {
    pub fn new(target: f64, duration_ms: u32, active: bool) -> Self {
        Self { target, duration_ms, active }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Idle,
    Running { started_at: f64 },
    Finished,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub value: f64,
    pub step: Step,
}

/// Eases a displayed number from 0 to `target` over `duration_ms`.
///
/// The value only moves while `Running`; `Finished` holds exactly `target`.
#[derive(Clone, Debug)]
pub struct CountUp {
    request: AnimationRequest,
    phase: Phase,
    value: f64,
}

impl CountUp {
    pub fn new(request: AnimationRequest) -> Self {
        Self {
            request,
            phase: Phase::Idle,
            value: 0.0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Anchors the animation at `now`. Returns false (and does nothing) when
    /// the request is inactive or the animation already started.
    pub fn start(&mut self, now: f64) -> bool {
        if !self.request.active || self.phase != Phase::Idle {
            return false;
        }
        self.phase = Phase::Running { started_at: now };
        true
    }

    pub fn tick(&mut self, now: f64) -> Frame {
        let started_at = match self.phase {
            Phase::Running { started_at } => started_at,
            Phase::Idle | Phase::Finished => {
                return Frame {
                    value: self.value,
                    step: Step::Done,
                }
            }
        };

        let p = progress(now - started_at, f64::from(self.request.duration_ms));
        if p >= 1.0 {
            self.finish();
            return Frame {
                value: self.value,
                step: Step::Done,
            };
        }

        self.value = self.request.target * ease_out_cubic(p);
        Frame {
            value: self.value,
            step: Step::Continue,
        }
    }

    /// Jumps straight to the target.
    pub fn finish(&mut self) -> f64 {
        self.phase = Phase::Finished;
        self.value = self.request.target;
        self.value
    }

    /// Stops a running animation where it is. No-op in any other phase.
    pub fn cancel(&mut self) {
        if self.is_running() {
            self.phase = Phase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(target: f64, duration_ms: u32, step_ms: f64) -> Vec<f64> {
        let mut count_up = CountUp::new(AnimationRequest::new(target, duration_ms, true));
        assert!(count_up.start(0.0));
        let mut values = Vec::new();
        let mut now = 0.0;
        loop {
            let frame = count_up.tick(now);
            values.push(frame.value);
            if frame.step == Step::Done {
                return values;
            }
            now += step_ms;
        }
    }

    #[test]
    fn test_halfway_value() {
        let mut count_up = CountUp::new(AnimationRequest::new(50.0, 1000, true));
        count_up.start(0.0);
        let frame = count_up.tick(500.0);
        assert_eq!(frame.step, Step::Continue);
        assert!((frame.value - 43.75).abs() < 1e-9);

        let frame = count_up.tick(1000.0);
        assert_eq!(frame.step, Step::Done);
        assert_eq!(frame.value, 50.0);
        assert_eq!(count_up.phase(), Phase::Finished);
    }

    #[test]
    fn test_values_never_decrease_and_land_on_target() {
        for &(target, duration_ms) in &[(12.0, 1700), (64.2, 2400), (124_032.0, 2800), (1.0, 1)] {
            let values = run_to_end(target, duration_ms, 16.7);
            for pair in values.windows(2) {
                assert!(pair[1] >= pair[0], "{} -> {} for target {}", pair[0], pair[1], target);
            }
            assert_eq!(*values.last().unwrap(), target);
        }
    }

    #[test]
    fn test_inactive_request_stays_at_zero() {
        let mut count_up = CountUp::new(AnimationRequest::new(62.0, 1800, false));
        assert!(!count_up.start(0.0));
        for now in [0.0, 900.0, 1800.0, 60_000.0] {
            let frame = count_up.tick(now);
            assert_eq!(frame.value, 0.0);
            assert_eq!(frame.step, Step::Done);
        }
        assert_eq!(count_up.phase(), Phase::Idle);
    }

    #[test]
    fn test_start_only_once() {
        let mut count_up = CountUp::new(AnimationRequest::new(84.0, 2100, true));
        assert!(count_up.start(100.0));
        assert!(!count_up.start(900.0));
        assert_eq!(count_up.phase(), Phase::Running { started_at: 100.0 });
    }

    #[test]
    fn test_frame_before_anchor_is_zero() {
        let mut count_up = CountUp::new(AnimationRequest::new(84.0, 2100, true));
        count_up.start(100.0);
        let frame = count_up.tick(99.2);
        assert_eq!(frame.value, 0.0);
        assert_eq!(frame.step, Step::Continue);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut never_started = CountUp::new(AnimationRequest::new(10.0, 500, true));
        never_started.cancel();
        never_started.cancel();
        assert_eq!(never_started.phase(), Phase::Idle);
        assert_eq!(never_started.value(), 0.0);

        let mut finished = CountUp::new(AnimationRequest::new(10.0, 500, true));
        finished.start(0.0);
        finished.tick(500.0);
        finished.cancel();
        assert_eq!(finished.phase(), Phase::Finished);
        assert_eq!(finished.value(), 10.0);
    }

    #[test]
    fn test_cancel_freezes_running_value() {
        let mut count_up = CountUp::new(AnimationRequest::new(10.0, 1000, true));
        count_up.start(0.0);
        let frame = count_up.tick(500.0);
        count_up.cancel();
        assert!(!count_up.is_running());
        assert_eq!(count_up.tick(900.0).value, frame.value);
    }
}
