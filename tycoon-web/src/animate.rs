//! `requestAnimationFrame` driver for [`Tween`]s.

use std::cell::Cell;
use std::rc::Rc;
use tycoon_core::Tween;

/// Stops a running tween when cancelled or dropped by its owner.
#[derive(Debug, Clone, Default)]
pub struct AnimationHandle {
    cancelled: Rc<Cell<bool>>,
}

impl AnimationHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Feed `on_frame` one value per animation frame until the tween completes.
///
/// The last value delivered is always the tween's exact end value. Outside
/// the browser the end value is delivered immediately.
pub fn run_tween(tween: Tween, on_frame: impl Fn(f64) + 'static) -> AnimationHandle {
    let handle = AnimationHandle::default();
    run_tween_in(&handle, tween, on_frame);
    handle
}

/// Like [`run_tween`], but stopped by a handle shared with other tweens.
///
/// Tweens started on the same handle are not coalesced: each keeps calling
/// `on_frame` until it completes, so the most recent write wins per frame.
pub fn run_tween_in(scope: &AnimationHandle, tween: Tween, on_frame: impl Fn(f64) + 'static) {
    if scope.is_cancelled() {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    {
        browser::drive(tween, Box::new(on_frame), scope.clone());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        on_frame(tween.end);
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::AnimationHandle;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tycoon_core::{Tween, TweenClock};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    fn request_frame(slot: &FrameSlot) -> bool {
        let Some(win) = web_sys::window() else {
            return false;
        };
        slot.borrow()
            .as_ref()
            .is_some_and(|cb| win.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok())
    }

    pub(super) fn drive(tween: Tween, on_frame: Box<dyn Fn(f64)>, handle: AnimationHandle) {
        let mut clock = TweenClock::new(tween);
        let slot: FrameSlot = Rc::new(RefCell::new(None));
        let next = Rc::clone(&slot);
        *slot.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
            if handle.is_cancelled() {
                next.borrow_mut().take();
                return;
            }
            let frame = clock.tick(timestamp);
            on_frame(frame.value);
            if frame.done || !request_frame(&next) {
                // Breaks the closure's self-reference.
                next.borrow_mut().take();
            }
        }));
        if !request_frame(&slot) {
            on_frame(tween.end);
            slot.borrow_mut().take();
        }
    }
}
