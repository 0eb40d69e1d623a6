use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Performance,
    Window,
};

use super::count_up::AnimationRequest;
use super::error::MotionError;
use super::frame_loop::{FrameId, FrameLoop, FrameScheduler, FrameTicker};
use super::reveal::RevealLatch;

/// `requestAnimationFrame` scheduler. Reuses one closure for every frame of
/// its loop; the closure is freed together with the loop.
pub struct BrowserFrames {
    window: Window,
    performance: Performance,
    callback: Closure<dyn FnMut(f64)>,
}

impl BrowserFrames {
    fn new(window: Window, performance: Performance, ticker: FrameTicker<BrowserFrames>) -> Self {
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            ticker.fire(timestamp);
        }) as Box<dyn FnMut(f64)>);

        Self {
            window,
            performance,
            callback,
        }
    }
}

impl FrameScheduler for BrowserFrames {
    fn now(&self) -> f64 {
        self.performance.now()
    }

    fn request(&self) -> Result<FrameId, MotionError> {
        let id = self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())?;
        Ok(FrameId(id))
    }

    fn cancel(&self, id: FrameId) {
        // cancelling a frame that already ran is a no-op for the browser
        let _ = self.window.cancel_animation_frame(id.0);
    }
}

/// Starts a count-up driven by the browser's refresh rate.
pub fn start_count_up<F>(request: AnimationRequest, sink: F) -> Result<FrameLoop<BrowserFrames>, MotionError>
where
    F: Fn(f64) + 'static,
{
    let window = web_sys::window().ok_or(MotionError::NoWindow)?;
    let performance = window.performance().ok_or(MotionError::NoPerformance)?;
    FrameLoop::start(request, sink, move |ticker| {
        BrowserFrames::new(window, performance, ticker)
    })
}

/// Watches one element with an `IntersectionObserver` and calls `on_reveal`
/// the first time at least `threshold` of it is visible.
///
/// The observer disconnects itself after firing, and on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    latch: Rc<RefCell<RevealLatch>>,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn observe<F>(element: &Element, threshold: f64, on_reveal: F) -> Result<Self, MotionError>
    where
        F: Fn() + 'static,
    {
        let latch = Rc::new(RefCell::new(RevealLatch::new(threshold)));

        let callback = {
            let latch = latch.clone();
            Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let fraction = if entry.is_intersecting() {
                        entry.intersection_ratio()
                    } else {
                        0.0
                    };
                    let fired = latch.borrow_mut().observe(fraction);
                    if fired {
                        debug!("Element revealed at {:.2} visible", fraction);
                        observer.disconnect();
                        on_reveal();
                        break;
                    }
                }
            }) as Box<dyn FnMut(Array, IntersectionObserver)>)
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        latch.borrow_mut().arm();
        observer.observe(element);

        Ok(Self {
            observer,
            latch,
            _callback: callback,
        })
    }

    pub fn is_triggered(&self) -> bool {
        self.latch.borrow().is_triggered()
    }

    /// Stops watching. Safe to call any number of times.
    pub fn disconnect(&self) {
        if let Ok(mut latch) = self.latch.try_borrow_mut() {
            latch.teardown();
        }
        self.observer.disconnect();
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
