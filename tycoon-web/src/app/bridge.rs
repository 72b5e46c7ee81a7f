//! Adapter from controller output to Yew state handles.

use crate::app::notices::NoticeAction;
use crate::app::state::AppState;
use crate::api::BrowserApi;
use tycoon_core::{
    Achievement, AchievementUnlock, Controller, DashboardStats, DashboardView, DaySummary,
    Feedback, Forecast, HistoryEntry, Severity, StateFrame,
};
use yew::prelude::*;

pub type WebController = Controller<BrowserApi, YewView>;

/// [`DashboardView`] that writes into the component tree's state.
///
/// Every handle here outlives the render it was captured in; `use_state` and
/// `use_reducer` setters stay valid for the lifetime of the component.
#[derive(Clone)]
pub struct YewView {
    frame: UseStateHandle<Option<StateFrame>>,
    summary: UseStateHandle<Option<DaySummary>>,
    achievements: UseStateHandle<Option<Vec<Achievement>>>,
    history: UseStateHandle<Option<Vec<HistoryEntry>>>,
    stats: UseStateHandle<Option<DashboardStats>>,
    forecast: UseStateHandle<Option<Forecast>>,
    notices: UseReducerHandle<crate::app::notices::NoticeStack>,
}

impl YewView {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            frame: state.frame.clone(),
            summary: state.summary.clone(),
            achievements: state.achievements.clone(),
            history: state.history.clone(),
            stats: state.stats.clone(),
            forecast: state.forecast.clone(),
            notices: state.notices.clone(),
        }
    }
}

impl DashboardView for YewView {
    fn show_state(&self, frame: &StateFrame) {
        self.frame.set(Some(frame.clone()));
    }

    fn show_summary(&self, summary: &DaySummary) {
        self.summary.set(Some(summary.clone()));
    }

    fn show_achievements(&self, achievements: &[Achievement]) {
        self.achievements.set(Some(achievements.to_vec()));
    }

    fn show_history(&self, history: &[HistoryEntry]) {
        self.history.set(Some(history.to_vec()));
    }

    fn show_stats(&self, stats: &DashboardStats) {
        self.stats.set(Some(stats.clone()));
    }

    fn show_forecast(&self, forecast: &Forecast) {
        self.forecast.set(Some(forecast.clone()));
    }

    fn notify(&self, severity: Severity, feedback: Feedback) {
        if severity == Severity::Danger {
            log::warn!("{}", crate::i18n::feedback_text(&feedback));
        }
        self.notices.dispatch(NoticeAction::Alert(severity, feedback));
    }

    fn celebrate(&self, unlock: &AchievementUnlock) {
        self.notices.dispatch(NoticeAction::Achievement {
            name: unlock.name.clone(),
            detail: unlock.description.clone(),
        });
    }
}
