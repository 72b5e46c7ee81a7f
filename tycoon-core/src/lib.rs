//! TaskTycoon client core
//!
//! Platform-agnostic dashboard logic for the TaskTycoon company simulation.
//! This crate decodes server payloads, tracks client state, and drives the
//! fetch/act/refresh cycle without any UI or transport dependencies.

pub mod animate;
pub mod api;
pub mod config;
pub mod controller;
pub mod format;
pub mod notify;
pub mod records;
pub mod schedule;
pub mod shortcuts;
pub mod state;
pub mod summary;

// Re-export commonly used types
pub use animate::{Frame, Tween, TweenClock};
pub use api::{
    ActionReply, ApiClient, ApiError, ApiRequest, Endpoint, HireError, HireRequest, Method,
};
pub use config::{ClientConfig, ResetRoute};
pub use controller::{
    Action, ActionOutcome, ActionStatus, Controller, DashboardView, FetchStatus,
};
pub use format::{DepartmentKind, floor_i64, format_grouped, humanize_key, number_or_zero};
pub use notify::{Feedback, Notice, NoticeBoard, NoticeKind, Severity};
pub use records::{
    Achievement, CashOutlook, DashboardStats, Forecast, HistoryEntry, Prediction, Recommendation,
    StatsSection,
};
pub use schedule::{Cadence, Due, Schedule};
pub use shortcuts::Shortcut;
pub use state::{
    ClientState, Department, DepartmentInfo, Employee, Fences, GameStateSnapshot, Generation,
    StateFrame, Trend,
};
pub use summary::{
    AchievementUnlock, DaySummary, GameOver, MiniEvent, SummaryEntry, SummaryNode,
};

/// Task types understood by `/api/task`.
pub const TASK_TYPES: [&str; 4] = ["kod_yaz", "arastir", "dinlen", "satis_gorusmesi"];
