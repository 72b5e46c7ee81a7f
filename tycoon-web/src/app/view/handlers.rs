use crate::app::bridge::WebController;
use crate::app::notices::NoticeAction;
use crate::app::state::AppState;
use crate::router::Route;
use std::rc::Rc;
use tycoon_core::{Action, HireRequest};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppHandlers {
    pub task: Callback<String>,
    pub upgrade: Callback<String>,
    pub restore_energy: Callback<()>,
    pub hire: Callback<HireRequest>,
    pub open_hire: Callback<()>,
    pub close_hire: Callback<()>,
    pub end_day: Callback<()>,
    pub save: Callback<()>,
    pub load: Callback<()>,
    pub reset: Callback<()>,
    pub close_summary: Callback<()>,
    pub restart: Callback<()>,
    pub dismiss_notice: Callback<u64>,
    pub refresh_achievements: Callback<()>,
    pub lang_change: Callback<String>,
    pub navigate: Callback<Route>,
    pub go_home: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(
        state: &AppState,
        controller: &Rc<WebController>,
        on_navigate: &Callback<Route>,
    ) -> Self {
        Self {
            task: action_with(controller, Action::Task),
            upgrade: action_with(controller, Action::UpgradeDepartment),
            restore_energy: action(controller, || Action::RestoreEnergy),
            hire: build_hire(controller),
            open_hire: build_toggle_hire(state, true),
            close_hire: build_toggle_hire(state, false),
            end_day: action(controller, || Action::EndDay),
            save: action(controller, || Action::Save),
            load: action(controller, || Action::Load),
            reset: action(controller, || Action::Reset),
            close_summary: build_close_summary(state, controller),
            restart: build_restart(state, controller),
            dismiss_notice: build_dismiss_notice(state),
            refresh_achievements: build_refresh_achievements(controller),
            lang_change: build_lang_change(state),
            navigate: on_navigate.clone(),
            go_home: on_navigate.reform(|()| Route::Dashboard),
        }
    }
}

/// Ask for confirmation when the action needs it, then run it in the background.
pub fn dispatch_action(controller: &Rc<WebController>, action: Action) {
    if let Some(key) = action.confirmation_key()
        && !crate::dom::confirm(&crate::i18n::t(key))
    {
        log::debug!("{} cancelled by the user", action.name());
        return;
    }
    let controller = Rc::clone(controller);
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = controller.perform(action).await;
        log::debug!("action finished: {:?}", outcome.status);
    });
}

fn action(controller: &Rc<WebController>, make: fn() -> Action) -> Callback<()> {
    let controller = Rc::clone(controller);
    Callback::from(move |()| dispatch_action(&controller, make()))
}

fn action_with(controller: &Rc<WebController>, make: fn(String) -> Action) -> Callback<String> {
    let controller = Rc::clone(controller);
    Callback::from(move |arg: String| dispatch_action(&controller, make(arg)))
}

fn build_hire(controller: &Rc<WebController>) -> Callback<HireRequest> {
    let controller = Rc::clone(controller);
    Callback::from(move |request: HireRequest| {
        dispatch_action(&controller, Action::Hire(request));
    })
}

fn build_toggle_hire(state: &AppState, open: bool) -> Callback<()> {
    let show_hire = state.show_hire.clone();
    Callback::from(move |()| show_hire.set(open))
}

fn build_close_summary(state: &AppState, controller: &Rc<WebController>) -> Callback<()> {
    let summary = state.summary.clone();
    let controller = Rc::clone(controller);
    Callback::from(move |()| {
        summary.set(None);
        let controller = Rc::clone(&controller);
        wasm_bindgen_futures::spawn_local(async move {
            controller.refresh().await;
        });
    })
}

/// Leave the game-over summary and reset; the reset refreshes on success.
fn build_restart(state: &AppState, controller: &Rc<WebController>) -> Callback<()> {
    let summary = state.summary.clone();
    let controller = Rc::clone(controller);
    Callback::from(move |()| {
        summary.set(None);
        dispatch_action(&controller, Action::Reset);
    })
}

fn build_dismiss_notice(state: &AppState) -> Callback<u64> {
    let notices = state.notices.clone();
    Callback::from(move |id| notices.dispatch(NoticeAction::Dismiss(id)))
}

fn build_refresh_achievements(controller: &Rc<WebController>) -> Callback<()> {
    let controller = Rc::clone(controller);
    Callback::from(move |()| {
        let controller = Rc::clone(&controller);
        wasm_bindgen_futures::spawn_local(async move {
            controller.load_achievements().await;
        });
    })
}

fn build_lang_change(state: &AppState) -> Callback<String> {
    let current_language = state.current_language.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        current_language.set(crate::i18n::current_lang());
    })
}
