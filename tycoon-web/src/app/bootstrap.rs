//! Startup work and background timers of the dashboard.

use crate::app::bridge::WebController;
use crate::app::state::AppState;
use crate::router::Route;
use std::rc::Rc;
use yew::prelude::*;

/// Initial load, welcome toast, refresh/auto-save ticker and Ctrl shortcuts.
///
/// Everything is torn down when the owning component unmounts.
#[hook]
pub fn use_bootstrap(controller: &Rc<WebController>, state: &AppState) {
    let controller = Rc::clone(controller);
    let notices = state.notices.clone();
    use_effect_with((), move |()| {
        #[cfg(target_arch = "wasm32")]
        let session = browser::start(&controller, notices);
        #[cfg(not(target_arch = "wasm32"))]
        let _ = (controller, notices);
        move || {
            #[cfg(target_arch = "wasm32")]
            session.stop();
        }
    });
}

/// Fetch the data behind a secondary view whenever it becomes active.
#[hook]
pub fn use_panel_loader(controller: &Rc<WebController>, route: &Route) {
    let controller = Rc::clone(controller);
    use_effect_with(route.clone(), move |route| {
        let route = route.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match route {
                Route::Achievements => {
                    controller.load_achievements().await;
                }
                Route::History => {
                    controller.load_history().await;
                }
                Route::Insights => {
                    controller.load_stats().await;
                    controller.load_forecast().await;
                }
                Route::Dashboard | Route::NotFound => {}
            }
        });
    });
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use crate::app::bridge::WebController;
    use crate::app::notices::{NoticeAction, NoticeStack};
    use crate::app::view::dispatch_action;
    use crate::dom;
    use std::cell::Cell;
    use std::rc::Rc;
    use tycoon_core::{Action, Feedback, Schedule, Severity, Shortcut};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use web_sys::KeyboardEvent;
    use yew::UseReducerHandle;

    const TICK_MS: i32 = 1_000;

    type KeyListener = Closure<dyn FnMut(KeyboardEvent)>;

    pub(super) struct Session {
        alive: Rc<Cell<bool>>,
        keydown: Option<KeyListener>,
    }

    impl Session {
        pub(super) fn stop(self) {
            self.alive.set(false);
            if let Some(listener) = self.keydown
                && let Ok(doc) = dom::document()
            {
                let _ = doc.remove_event_listener_with_callback(
                    "keydown",
                    listener.as_ref().unchecked_ref(),
                );
            }
        }
    }

    pub(super) fn start(
        controller: &Rc<WebController>,
        notices: UseReducerHandle<NoticeStack>,
    ) -> Session {
        let alive = Rc::new(Cell::new(true));
        spawn_initial_load(Rc::clone(controller), notices);
        spawn_ticker(Rc::clone(controller), Rc::clone(&alive));
        let keydown = install_shortcuts(controller);
        Session { alive, keydown }
    }

    fn spawn_initial_load(controller: Rc<WebController>, notices: UseReducerHandle<NoticeStack>) {
        wasm_bindgen_futures::spawn_local(async move {
            controller.refresh().await;
            let delay = i32::try_from(controller.config().welcome_delay_ms).unwrap_or(i32::MAX);
            if dom::sleep_ms(delay).await.is_ok() {
                notices.dispatch(NoticeAction::Alert(
                    Severity::Info,
                    Feedback::Key("notify.welcome"),
                ));
            }
        });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn clock_ms() -> u64 {
        dom::now_ms().max(0.0) as u64
    }

    fn spawn_ticker(controller: Rc<WebController>, alive: Rc<Cell<bool>>) {
        wasm_bindgen_futures::spawn_local(async move {
            let mut schedule = Schedule::new(controller.config());
            schedule.start(clock_ms());
            while alive.get() {
                if let Err(err) = dom::sleep_ms(TICK_MS).await {
                    dom::console_error(&format!("ticker stopped: {err}"));
                    break;
                }
                if !alive.get() {
                    break;
                }
                let due = schedule.poll(clock_ms());
                if due.refresh {
                    controller.refresh().await;
                }
                if due.save {
                    let outcome = controller.auto_save().await;
                    log::info!("auto-save: {:?}", outcome.status);
                }
            }
        });
    }

    fn install_shortcuts(controller: &Rc<WebController>) -> Option<KeyListener> {
        let doc = dom::document().ok()?;
        let controller = Rc::clone(controller);
        let listener = KeyListener::new(move |event: KeyboardEvent| {
            let Some(shortcut) = Shortcut::from_key(event.ctrl_key(), &event.key()) else {
                return;
            };
            event.prevent_default();
            dispatch_action(&controller, Action::from(shortcut));
        });
        doc.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
            .ok()?;
        Some(listener)
    }
}
