use crate::app::notices::NoticeStack;
use tycoon_core::{
    Achievement, ClientConfig, DashboardStats, DaySummary, Forecast, HistoryEntry, StateFrame,
};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub frame: UseStateHandle<Option<StateFrame>>,
    pub summary: UseStateHandle<Option<DaySummary>>,
    pub achievements: UseStateHandle<Option<Vec<Achievement>>>,
    pub history: UseStateHandle<Option<Vec<HistoryEntry>>>,
    pub stats: UseStateHandle<Option<DashboardStats>>,
    pub forecast: UseStateHandle<Option<Forecast>>,
    pub notices: UseReducerHandle<NoticeStack>,
    pub show_hire: UseStateHandle<bool>,
    pub current_language: UseStateHandle<String>,
}

#[hook]
pub fn use_app_state(config: &ClientConfig) -> AppState {
    let notice_config = config.clone();
    AppState {
        frame: use_state(|| None::<StateFrame>),
        summary: use_state(|| None::<DaySummary>),
        achievements: use_state(|| None::<Vec<Achievement>>),
        history: use_state(|| None::<Vec<HistoryEntry>>),
        stats: use_state(|| None::<DashboardStats>),
        forecast: use_state(|| None::<Forecast>),
        notices: use_reducer(move || NoticeStack::new(&notice_config)),
        show_hire: use_state(|| false),
        current_language: use_state(crate::i18n::current_lang),
    }
}

impl AppState {
    /// Department keys of the current snapshot, for the hiring form.
    #[must_use]
    pub fn department_keys(&self) -> Vec<String> {
        self.frame
            .as_ref()
            .map(|frame| frame.snapshot.department_keys())
            .unwrap_or_default()
    }
}
