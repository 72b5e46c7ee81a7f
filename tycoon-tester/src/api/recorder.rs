use std::cell::RefCell;
use tycoon_core::{
    Achievement, AchievementUnlock, DashboardStats, DashboardView, DaySummary, Feedback,
    Forecast, HistoryEntry, Severity, StateFrame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedNotice {
    pub severity: Severity,
    pub feedback: Feedback,
}

/// [`DashboardView`] that keeps everything the controller showed.
#[derive(Debug, Default)]
pub struct RecordingView {
    states: RefCell<Vec<StateFrame>>,
    summaries: RefCell<Vec<DaySummary>>,
    notices: RefCell<Vec<RecordedNotice>>,
    unlocks: RefCell<Vec<AchievementUnlock>>,
    achievements: RefCell<Option<Vec<Achievement>>>,
    history: RefCell<Option<Vec<HistoryEntry>>>,
    stats: RefCell<Option<DashboardStats>>,
    forecast: RefCell<Option<Forecast>>,
}

impl RecordingView {
    #[must_use]
    pub fn states(&self) -> Vec<StateFrame> {
        self.states.borrow().clone()
    }

    #[must_use]
    pub fn last_state(&self) -> Option<StateFrame> {
        self.states.borrow().last().cloned()
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<DaySummary> {
        self.summaries.borrow().clone()
    }

    #[must_use]
    pub fn notices(&self) -> Vec<RecordedNotice> {
        self.notices.borrow().clone()
    }

    #[must_use]
    pub fn danger_count(&self) -> usize {
        self.notices
            .borrow()
            .iter()
            .filter(|n| n.severity == Severity::Danger)
            .count()
    }

    #[must_use]
    pub fn unlocks(&self) -> Vec<AchievementUnlock> {
        self.unlocks.borrow().clone()
    }

    #[must_use]
    pub fn achievements(&self) -> Option<Vec<Achievement>> {
        self.achievements.borrow().clone()
    }

    #[must_use]
    pub fn history(&self) -> Option<Vec<HistoryEntry>> {
        self.history.borrow().clone()
    }

    #[must_use]
    pub fn stats(&self) -> Option<DashboardStats> {
        self.stats.borrow().clone()
    }

    #[must_use]
    pub fn forecast(&self) -> Option<Forecast> {
        self.forecast.borrow().clone()
    }
}

impl DashboardView for RecordingView {
    fn show_state(&self, frame: &StateFrame) {
        self.states.borrow_mut().push(frame.clone());
    }

    fn show_summary(&self, summary: &DaySummary) {
        self.summaries.borrow_mut().push(summary.clone());
    }

    fn show_achievements(&self, achievements: &[Achievement]) {
        *self.achievements.borrow_mut() = Some(achievements.to_vec());
    }

    fn show_history(&self, history: &[HistoryEntry]) {
        *self.history.borrow_mut() = Some(history.to_vec());
    }

    fn show_stats(&self, stats: &DashboardStats) {
        *self.stats.borrow_mut() = Some(stats.clone());
    }

    fn show_forecast(&self, forecast: &Forecast) {
        *self.forecast.borrow_mut() = Some(forecast.clone());
    }

    fn notify(&self, severity: Severity, feedback: Feedback) {
        log::info!("[{}] {feedback:?}", severity.as_str());
        self.notices
            .borrow_mut()
            .push(RecordedNotice { severity, feedback });
    }

    fn celebrate(&self, unlock: &AchievementUnlock) {
        self.unlocks.borrow_mut().push(unlock.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_danger_notices() {
        let view = RecordingView::default();
        view.notify(Severity::Warning, Feedback::Key("notify.rejected"));
        view.notify(Severity::Danger, Feedback::Key("error.refresh"));
        assert_eq!(view.notices().len(), 2);
        assert_eq!(view.danger_count(), 1);
        assert!(view.last_state().is_none());
    }
}
