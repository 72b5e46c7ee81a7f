//! Fetch → apply → render → notify orchestration.
//!
//! The controller owns the [`ClientState`] and talks to the outside world
//! only through two seams: an [`ApiClient`] for HTTP and a
//! [`DashboardView`] for everything the user sees. Both front-ends (the
//! wasm dashboard and the native tester) drive this same type.

use crate::api::{ActionReply, ApiClient, ApiError, ApiRequest, Endpoint, HireRequest};
use crate::config::ClientConfig;
use crate::notify::{Feedback, Severity};
use crate::records::{Achievement, DashboardStats, Forecast, HistoryEntry};
use crate::shortcuts::Shortcut;
use crate::state::{ClientState, Fences, GameStateSnapshot, Generation, StateFrame};
use crate::summary::{AchievementUnlock, DaySummary};
use serde_json::Value;
use std::cell::RefCell;

/// Rendering and feedback surface driven by the controller.
pub trait DashboardView {
    fn show_state(&self, frame: &StateFrame);
    fn show_summary(&self, summary: &DaySummary);
    fn show_achievements(&self, achievements: &[Achievement]);
    fn show_history(&self, history: &[HistoryEntry]);
    fn show_stats(&self, stats: &DashboardStats);
    fn show_forecast(&self, forecast: &Forecast);
    fn notify(&self, severity: Severity, feedback: Feedback);
    /// Achievement unlocked during the last day; shown as a longer-lived toast.
    fn celebrate(&self, unlock: &AchievementUnlock);
}

/// User-triggered mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Task(String),
    UpgradeDepartment(String),
    Hire(HireRequest),
    RestoreEnergy,
    EndDay,
    Save,
    Load,
    Reset,
}

impl From<Shortcut> for Action {
    fn from(shortcut: Shortcut) -> Self {
        match shortcut {
            Shortcut::Save => Self::Save,
            Shortcut::Load => Self::Load,
            Shortcut::EndDay => Self::EndDay,
        }
    }
}

impl Action {
    #[must_use]
    pub fn endpoint(&self, config: &ClientConfig) -> Endpoint {
        match self {
            Self::Task(task_type) => Endpoint::Task {
                task_type: task_type.clone(),
            },
            Self::UpgradeDepartment(department) => Endpoint::UpgradeDepartment {
                department: department.clone(),
            },
            Self::Hire(form) => Endpoint::Hire(form.clone()),
            Self::RestoreEnergy => Endpoint::RestoreEnergy,
            Self::EndDay => Endpoint::EndDay,
            Self::Save => Endpoint::Save,
            Self::Load => Endpoint::Load,
            Self::Reset => Endpoint::Reset(config.reset_route),
        }
    }

    /// Short identifier used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Task(_) => "task",
            Self::UpgradeDepartment(_) => "upgrade",
            Self::Hire(_) => "hire",
            Self::RestoreEnergy => "restore-energy",
            Self::EndDay => "end-day",
            Self::Save => "save",
            Self::Load => "load",
            Self::Reset => "reset",
        }
    }

    /// Saving does not change game state, so it is the one action that
    /// leaves the snapshot alone.
    #[must_use]
    pub const fn refreshes_on_success(&self) -> bool {
        !matches!(self, Self::Save)
    }

    /// Translation key of the confirmation prompt, for destructive actions.
    #[must_use]
    pub const fn confirmation_key(&self) -> Option<&'static str> {
        match self {
            Self::EndDay => Some("confirm.end_day"),
            Self::Load => Some("confirm.load"),
            Self::Reset => Some("confirm.reset"),
            _ => None,
        }
    }

    const fn is_persistence(&self) -> bool {
        matches!(self, Self::Save | Self::Load | Self::Reset)
    }

    fn success_notice(&self, message: Option<String>) -> Option<(Severity, Feedback)> {
        let notice = match self {
            Self::Save => (Severity::Success, Feedback::Key("notify.saved")),
            Self::Load => (Severity::Success, Feedback::Key("notify.loaded")),
            Self::Reset => (Severity::Info, Feedback::Key("notify.reset")),
            // The summary dialog replaces the toast when one is available.
            Self::EndDay => return message.map(|m| (Severity::Success, Feedback::Server(m))),
            _ => (
                Severity::Success,
                message.map_or(Feedback::Key("notify.done"), Feedback::Server),
            ),
        };
        Some(notice)
    }

    fn rejection_notice(&self, message: Option<String>) -> (Severity, Feedback) {
        match self {
            Self::Save => (Severity::Danger, Feedback::Key("notify.save_failed")),
            Self::Load => (Severity::Danger, Feedback::Key("notify.load_failed")),
            Self::Reset => (Severity::Danger, Feedback::Key("notify.reset_failed")),
            _ => (
                Severity::Warning,
                message.map_or(Feedback::Key("notify.rejected"), Feedback::Server),
            ),
        }
    }

    const fn transport_error_key(&self) -> &'static str {
        match self {
            Self::Task(_) => "error.task",
            Self::UpgradeDepartment(_) => "error.upgrade",
            Self::Hire(_) => "error.hire",
            Self::RestoreEnergy => "error.energy",
            Self::EndDay => "error.end_day",
            Self::Save => "error.save",
            Self::Load => "error.load",
            Self::Reset => "error.reset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStatus {
    /// Server accepted the action.
    Applied,
    /// Server answered with `success: false` or an `error`.
    Rejected,
    /// Network or decode failure.
    Failed,
    /// Rejected locally before any request was made.
    Invalid,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub status: ActionStatus,
    pub message: Option<String>,
    pub summary: Option<DaySummary>,
}

impl ActionOutcome {
    const fn bare(status: ActionStatus) -> Self {
        Self {
            status,
            message: None,
            summary: None,
        }
    }

    #[must_use]
    pub fn is_applied(&self) -> bool {
        self.status == ActionStatus::Applied
    }
}

/// Result of a read-only fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Applied,
    /// A newer response for the same resource had already been applied.
    Stale,
    Failed,
}

pub struct Controller<A, V> {
    api: A,
    view: V,
    config: ClientConfig,
    state: RefCell<ClientState>,
}

impl<A, V> Controller<A, V>
where
    A: ApiClient,
    V: DashboardView,
{
    pub fn new(api: A, view: V, config: ClientConfig) -> Self {
        Self {
            api,
            view,
            config,
            state: RefCell::new(ClientState::default()),
        }
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub const fn api(&self) -> &A {
        &self.api
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Copy of the last applied snapshot.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.state.borrow().snapshot().cloned()
    }

    fn request_for(&self, endpoint: &Endpoint) -> ApiRequest {
        let mut request = endpoint.request();
        request.path = self.config.url(&request.path);
        request
    }

    fn issue(&self, fence: fn(&mut Fences) -> &mut Generation) -> u64 {
        fence(&mut self.state.borrow_mut().fences).issue()
    }

    fn accept(&self, fence: fn(&mut Fences) -> &mut Generation, ticket: u64) -> bool {
        fence(&mut self.state.borrow_mut().fences).accept(ticket)
    }

    /// Fetch a read-only resource, parse it and hand it to `show` unless a
    /// newer response for the same resource already landed.
    async fn fetch<T>(
        &self,
        endpoint: Endpoint,
        fence: fn(&mut Fences) -> &mut Generation,
        parse: impl FnOnce(&Value) -> Result<T, ApiError>,
        show: impl FnOnce(&V, &T),
        error_key: &'static str,
    ) -> FetchStatus {
        let ticket = self.issue(fence);
        let request = self.request_for(&endpoint);
        let parsed = match self.api.send(&request).await {
            Ok(body) => parse(&body),
            Err(err) => Err(err),
        };
        match parsed {
            Ok(value) => {
                if !self.accept(fence, ticket) {
                    log::debug!("discarding stale response from {}", request.path);
                    return FetchStatus::Stale;
                }
                show(&self.view, &value);
                FetchStatus::Applied
            }
            Err(err) => {
                log::error!("fetching {} failed: {err}", request.path);
                self.view.notify(Severity::Danger, Feedback::Key(error_key));
                FetchStatus::Failed
            }
        }
    }

    /// Re-fetch `/api/state`, replace the snapshot and redraw.
    pub async fn refresh(&self) -> FetchStatus {
        let ticket = self.issue(|f| &mut f.state);
        let request = self.request_for(&Endpoint::State);
        let body = match self.api.send(&request).await {
            Ok(body) if body.is_object() => body,
            Ok(_) => {
                log::error!("{} did not return an object", request.path);
                self.view
                    .notify(Severity::Danger, Feedback::Key("error.refresh"));
                return FetchStatus::Failed;
            }
            Err(err) => {
                log::error!("refreshing dashboard failed: {err}");
                self.view
                    .notify(Severity::Danger, Feedback::Key("error.refresh"));
                return FetchStatus::Failed;
            }
        };

        let snapshot = GameStateSnapshot::from_value(&body);
        let frame = {
            let mut state = self.state.borrow_mut();
            if !state.fences.state.accept(ticket) {
                log::debug!("discarding stale state response (ticket {ticket})");
                return FetchStatus::Stale;
            }
            state.apply(snapshot)
        };
        log::debug!(
            "applied state: day {} cash {}",
            frame.snapshot.current_day,
            frame.snapshot.cash
        );
        self.view.show_state(&frame);
        FetchStatus::Applied
    }

    /// Send a mutating action and report the outcome.
    ///
    /// Success notifies and, for everything but saving, triggers exactly
    /// one refresh. Rejections and transport failures notify and leave the
    /// snapshot untouched.
    pub async fn perform(&self, action: Action) -> ActionOutcome {
        let action = match action {
            Action::Hire(form) => match form.validated() {
                Ok(form) => Action::Hire(form),
                Err(err) => {
                    log::warn!("hire form rejected: {err}");
                    self.view
                        .notify(Severity::Warning, Feedback::Key("hire.missing_fields"));
                    return ActionOutcome::bare(ActionStatus::Invalid);
                }
            },
            other => other,
        };

        let request = self.request_for(&action.endpoint(&self.config));
        let body = match self.api.send(&request).await {
            Ok(body) => body,
            Err(err) => {
                log::error!("{} failed: {err}", action.name());
                self.view
                    .notify(Severity::Danger, Feedback::Key(action.transport_error_key()));
                return ActionOutcome::bare(ActionStatus::Failed);
            }
        };

        let reply = ActionReply::from_value(body);
        if !reply.success {
            log::warn!(
                "{} rejected: {}",
                action.name(),
                reply.message.as_deref().unwrap_or("no message")
            );
            let (severity, feedback) = action.rejection_notice(reply.message.clone());
            self.view.notify(severity, feedback);
            return ActionOutcome {
                status: ActionStatus::Rejected,
                message: reply.message,
                summary: None,
            };
        }

        let summary = matches!(action, Action::EndDay)
            .then(|| DaySummary::from_reply(&reply.body, self.config.summary_depth_limit))
            .flatten();

        let notice = if summary.is_some() {
            None
        } else if matches!(action, Action::EndDay) {
            Some((
                Severity::Success,
                reply
                    .message
                    .clone()
                    .map_or(Feedback::Key("notify.day_ended"), Feedback::Server),
            ))
        } else {
            action.success_notice(reply.message.clone())
        };
        if let Some((severity, feedback)) = notice {
            self.view.notify(severity, feedback);
        }

        if action.refreshes_on_success() {
            self.refresh().await;
        }

        if let Some(summary) = &summary {
            self.view.show_summary(summary);
            for unlock in &summary.achievements {
                self.view.celebrate(unlock);
            }
        }

        if action.is_persistence() {
            log::info!("{} completed", action.name());
        }

        ActionOutcome {
            status: ActionStatus::Applied,
            message: reply.message,
            summary,
        }
    }

    /// Background save, independent of the refresh cycle.
    pub async fn auto_save(&self) -> ActionOutcome {
        log::info!("auto-saving game");
        self.perform(Action::Save).await
    }

    pub async fn load_achievements(&self) -> FetchStatus {
        self.fetch(
            Endpoint::Achievements,
            |f| &mut f.achievements,
            Achievement::list_from_body,
            |view, list: &Vec<Achievement>| view.show_achievements(list),
            "error.achievements",
        )
        .await
    }

    pub async fn load_history(&self) -> FetchStatus {
        self.fetch(
            Endpoint::History {
                count: self.config.history_window,
            },
            |f| &mut f.history,
            HistoryEntry::list_from_body,
            |view, list: &Vec<HistoryEntry>| view.show_history(list),
            "error.history",
        )
        .await
    }

    pub async fn load_stats(&self) -> FetchStatus {
        let depth = self.config.summary_depth_limit;
        self.fetch(
            Endpoint::DashboardStats,
            |f| &mut f.stats,
            |body| DashboardStats::from_body(body, depth),
            |view, stats| view.show_stats(stats),
            "error.stats",
        )
        .await
    }

    pub async fn load_forecast(&self) -> FetchStatus {
        self.fetch(
            Endpoint::Predictions,
            |f| &mut f.predictions,
            Forecast::from_body,
            |view, forecast| view.show_forecast(forecast),
            "error.predictions",
        )
        .await
    }
}
