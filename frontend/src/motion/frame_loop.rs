use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};

use super::count_up::{AnimationRequest, CountUp, Step};
use super::error::MotionError;

/// Handle of one pending host frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameId(pub i32);

/// Per-frame callback scheduler supplied by the host.
///
/// `request` schedules the callback the scheduler was built with (see
/// [`FrameLoop::start`]) for the next display refresh.
pub trait FrameScheduler {
    fn now(&self) -> f64;
    fn request(&self) -> Result<FrameId, MotionError>;
    fn cancel(&self, id: FrameId);
}

struct LoopState<S> {
    animator: CountUp,
    scheduler: S,
    pending: Option<FrameId>,
    sink: Rc<dyn Fn(f64)>,
}

/// What the host calls back into when a requested frame fires.
///
/// Only holds a weak reference, so a frame that fires after its loop was
/// dropped is ignored.
pub struct FrameTicker<S> {
    state: Weak<RefCell<LoopState<S>>>,
}

impl<S> Clone for FrameTicker<S> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<S: FrameScheduler> FrameTicker<S> {
    pub fn fire(&self, timestamp: f64) {
        let Some(state) = self.state.upgrade() else {
            return;
        };

        let (value, sink) = {
            let mut state = state.borrow_mut();
            // a frame we no longer wait for (cancelled in between)
            if state.pending.take().is_none() {
                return;
            }

            let frame = state.animator.tick(timestamp);
            let mut value = frame.value;
            match frame.step {
                Step::Continue => match state.scheduler.request() {
                    Ok(id) => state.pending = Some(id),
                    Err(e) => {
                        warn!("Frame request failed mid-animation, jumping to target: {}", e);
                        value = state.animator.finish();
                    }
                },
                Step::Done => debug!("Count-up reached {}", value),
            }
            (value, state.sink.clone())
        };

        sink(value);
    }
}

/// One running count-up bound to a frame scheduler.
///
/// Owns the single pending-frame token of its animation. Dropping the loop
/// cancels the pending frame, so a new generation can never overlap the old.
pub struct FrameLoop<S: FrameScheduler> {
    state: Rc<RefCell<LoopState<S>>>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn start<F, M>(request: AnimationRequest, sink: F, make_scheduler: M) -> Result<Self, MotionError>
    where
        F: Fn(f64) + 'static,
        M: FnOnce(FrameTicker<S>) -> S,
    {
        let state = Rc::new_cyclic(|weak| {
            RefCell::new(LoopState {
                animator: CountUp::new(request),
                scheduler: make_scheduler(FrameTicker { state: weak.clone() }),
                pending: None,
                sink: Rc::new(sink),
            })
        });

        {
            let mut state = state.borrow_mut();
            let now = state.scheduler.now();
            if state.animator.start(now) {
                let id = state.scheduler.request()?;
                state.pending = Some(id);
                debug!(
                    "Count-up to {} over {}ms started",
                    request.target, request.duration_ms
                );
            }
        }

        Ok(Self { state })
    }

    pub fn is_running(&self) -> bool {
        self.state.borrow().pending.is_some()
    }

    pub fn value(&self) -> f64 {
        self.state.borrow().animator.value()
    }

    /// Cancels the pending frame. Safe to call any number of times.
    pub fn cancel(&self) {
        let Ok(mut state) = self.state.try_borrow_mut() else {
            return;
        };
        if let Some(id) = state.pending.take() {
            state.scheduler.cancel(id);
        }
        state.animator.cancel();
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Scheduler whose frames only fire when the test says so.
    #[derive(Clone, Default)]
    struct ManualFrames {
        clock: Rc<Cell<f64>>,
        next_id: Rc<Cell<i32>>,
        requested: Rc<RefCell<Vec<FrameId>>>,
        cancelled: Rc<RefCell<Vec<FrameId>>>,
        fail_requests: Rc<Cell<bool>>,
    }

    impl FrameScheduler for ManualFrames {
        fn now(&self) -> f64 {
            self.clock.get()
        }

        fn request(&self) -> Result<FrameId, MotionError> {
            if self.fail_requests.get() {
                return Err(MotionError::Host("requestAnimationFrame unavailable".to_string()));
            }
            let id = FrameId(self.next_id.get() + 1);
            self.next_id.set(id.0);
            self.requested.borrow_mut().push(id);
            Ok(id)
        }

        fn cancel(&self, id: FrameId) {
            self.cancelled.borrow_mut().push(id);
        }
    }

    struct Harness {
        frames: ManualFrames,
        ticker: Rc<RefCell<Option<FrameTicker<ManualFrames>>>>,
        seen: Rc<RefCell<Vec<f64>>>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                frames: ManualFrames::default(),
                ticker: Rc::new(RefCell::new(None)),
                seen: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn start(&self, target: f64, duration_ms: u32, active: bool) -> FrameLoop<ManualFrames> {
            let seen = self.seen.clone();
            let ticker_slot = self.ticker.clone();
            let frames = self.frames.clone();
            FrameLoop::start(
                AnimationRequest::new(target, duration_ms, active),
                move |value| seen.borrow_mut().push(value),
                move |ticker| {
                    *ticker_slot.borrow_mut() = Some(ticker);
                    frames
                },
            )
            .expect("manual scheduler never fails on start")
        }

        fn fire(&self, at: f64) {
            self.frames.clock.set(at);
            let ticker = self.ticker.borrow().clone();
            ticker.expect("loop was started").fire(at);
        }
    }

    #[test]
    fn test_runs_to_target_and_stops_scheduling() {
        let harness = Harness::new();
        let frame_loop = harness.start(50.0, 1000, true);
        assert!(frame_loop.is_running());

        harness.fire(500.0);
        harness.fire(1000.0);

        assert_eq!(*harness.seen.borrow(), vec![43.75, 50.0]);
        assert!(!frame_loop.is_running());
        // start + one reschedule after the halfway frame
        assert_eq!(harness.frames.requested.borrow().len(), 2);

        harness.fire(1100.0);
        assert_eq!(harness.seen.borrow().len(), 2);
        assert_eq!(frame_loop.value(), 50.0);
    }

    #[test]
    fn test_inactive_never_schedules() {
        let harness = Harness::new();
        let frame_loop = harness.start(62.0, 1800, false);
        assert!(!frame_loop.is_running());
        assert!(harness.frames.requested.borrow().is_empty());

        harness.fire(900.0);
        harness.fire(5000.0);
        assert!(harness.seen.borrow().is_empty());
        assert_eq!(frame_loop.value(), 0.0);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let harness = Harness::new();
        let frame_loop = harness.start(12.0, 1700, true);
        frame_loop.cancel();
        frame_loop.cancel();
        assert_eq!(*harness.frames.cancelled.borrow(), vec![FrameId(1)]);

        harness.fire(400.0);
        assert!(harness.seen.borrow().is_empty());
    }

    #[test]
    fn test_cancel_after_completion_is_noop() {
        let harness = Harness::new();
        let frame_loop = harness.start(12.0, 100, true);
        harness.fire(100.0);
        assert_eq!(frame_loop.value(), 12.0);

        frame_loop.cancel();
        drop(frame_loop);
        assert!(harness.frames.cancelled.borrow().is_empty());
    }

    #[test]
    fn test_drop_cancels_pending_frame_and_ignores_late_fire() {
        let harness = Harness::new();
        let first = harness.start(84.0, 2100, true);
        harness.fire(100.0);
        let stale = harness.ticker.borrow().clone().unwrap();
        drop(first);
        assert_eq!(*harness.frames.cancelled.borrow(), vec![FrameId(2)]);

        let seen_before = harness.seen.borrow().len();
        stale.fire(2100.0);
        assert_eq!(harness.seen.borrow().len(), seen_before);
    }

    #[test]
    fn test_new_generation_replaces_old() {
        let harness = Harness::new();
        let old = harness.start(10.0, 1000, true);
        harness.fire(200.0);
        let old_ticker = harness.ticker.borrow().clone().unwrap();

        drop(old);
        harness.frames.clock.set(200.0);
        let new = harness.start(20.0, 1000, true);
        old_ticker.fire(700.0);
        assert_eq!(harness.seen.borrow().len(), 1);

        harness.fire(1200.0);
        assert_eq!(new.value(), 20.0);
        assert_eq!(*harness.seen.borrow().last().unwrap(), 20.0);
    }

    #[test]
    fn test_failed_reschedule_jumps_to_target() {
        let harness = Harness::new();
        let frame_loop = harness.start(64.2, 2400, true);
        harness.frames.fail_requests.set(true);
        harness.fire(600.0);
        assert_eq!(*harness.seen.borrow(), vec![64.2]);
        assert!(!frame_loop.is_running());
    }

    #[test]
    fn test_failed_first_request_is_an_error() {
        let frames = ManualFrames::default();
        frames.fail_requests.set(true);
        let result = FrameLoop::start(AnimationRequest::new(1.0, 10, true), |_| {}, move |_| frames);
        assert!(matches!(result, Err(MotionError::Host(_))));
    }
}
