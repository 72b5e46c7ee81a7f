//! Transient user feedback.

use crate::config::ClientConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Message text: either verbatim from the server or a translation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Server(String),
    Key(&'static str),
    /// Translation key with a single `{name}` argument.
    KeyWithName(&'static str, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Alert,
    Achievement,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub severity: Severity,
    pub feedback: Feedback,
    /// Secondary line, used by achievement toasts.
    pub detail: Option<String>,
    pub ttl_ms: u32,
}

/// Stack of visible notices.
///
/// No deduplication and no cap; each notice lives until dismissed or its
/// TTL passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    next_id: u64,
    items: Vec<Notice>,
    alert_ttl_ms: u32,
    achievement_ttl_ms: u32,
}

impl NoticeBoard {
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            next_id: 0,
            items: Vec::new(),
            alert_ttl_ms: config.alert_ttl_ms,
            achievement_ttl_ms: config.achievement_ttl_ms,
        }
    }

    /// Add an alert and return its id.
    pub fn alert(&mut self, severity: Severity, feedback: Feedback) -> u64 {
        let ttl = self.alert_ttl_ms;
        self.push(NoticeKind::Alert, severity, feedback, None, ttl)
    }

    pub fn achievement(&mut self, name: String, detail: Option<String>) -> u64 {
        let ttl = self.achievement_ttl_ms;
        self.push(
            NoticeKind::Achievement,
            Severity::Success,
            Feedback::KeyWithName("notify.achievement", name),
            detail,
            ttl,
        )
    }

    fn push(
        &mut self,
        kind: NoticeKind,
        severity: Severity,
        feedback: Feedback,
        detail: Option<String>,
        ttl_ms: u32,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice {
            id,
            kind,
            severity,
            feedback,
            detail,
            ttl_ms,
        });
        id
    }

    /// Remove a notice; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    #[must_use]
    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Notice> {
        self.items.last()
    }
}
