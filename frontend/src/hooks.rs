use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::motion::browser::{start_count_up, RevealObserver};
use crate::motion::count_up::AnimationRequest;

/// Displayed value of a statistic that counts up from 0 to `target` once
/// `active` is true. Changing any input restarts the animation from 0.
#[hook]
pub fn use_count_up(target: f64, active: bool, duration_ms: u32) -> f64 {
    let value = use_state(|| 0.0_f64);

    {
        let value = value.clone();
        use_effect_with_deps(
            move |&(target, active, duration_ms)| {
                let frame_loop = if active {
                    let setter = value.setter();
                    let request = AnimationRequest::new(target, duration_ms, active);
                    match start_count_up(request, move |current| setter.set(current)) {
                        Ok(frame_loop) => Some(frame_loop),
                        Err(e) => {
                            warn!("Count-up unavailable, showing {} directly: {}", target, e);
                            value.set(target);
                            None
                        }
                    }
                } else {
                    None
                };

                move || {
                    if let Some(frame_loop) = &frame_loop {
                        if frame_loop.is_running() {
                            debug!("Cancelling count-up to {} at {:.1}", target, frame_loop.value());
                        }
                    }
                    drop(frame_loop)
                }
            },
            (target, active, duration_ms),
        );
    }

    *value
}

/// Flips to true, once, when at least `threshold` of the element behind
/// `node` has been on screen.
#[hook]
pub fn use_reveal(node: NodeRef, threshold: f64) -> bool {
    let revealed = use_state(|| false);
    let already_revealed = *revealed;

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |already_revealed: &bool| {
                let observer = match node.cast::<Element>() {
                    Some(element) if !*already_revealed => {
                        let setter = revealed.setter();
                        match RevealObserver::observe(&element, threshold, move || setter.set(true)) {
                            Ok(observer) => Some(observer),
                            Err(e) => {
                                warn!("Reveal observer unavailable, showing content: {}", e);
                                revealed.set(true);
                                None
                            }
                        }
                    }
                    _ => None,
                };

                move || {
                    if let Some(observer) = &observer {
                        if !observer.is_triggered() {
                            debug!("Reveal watch torn down before the element was seen");
                        }
                    }
                    drop(observer)
                }
            },
            already_revealed,
        );
    }

    *revealed
}
