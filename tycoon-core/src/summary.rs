//! Day-end summary model.
//!
//! The backend returns an arbitrarily nested object when a day ends. A few
//! well-known keys get their own presentation; everything else is turned
//! into a [`SummaryNode`] tree that the view renders generically.

use crate::format::scalar_text;
use serde_json::Value;

/// Generic rendering tree for a JSON value of unknown shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryNode {
    /// `null`; rendered as a muted placeholder.
    Missing,
    Scalar(String),
    List(Vec<SummaryNode>),
    Map(Vec<SummaryEntry>),
    /// Nesting went past the configured depth limit.
    Truncated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub key: String,
    pub value: SummaryNode,
}

impl SummaryNode {
    #[must_use]
    pub fn from_value(value: &Value, depth_limit: usize) -> Self {
        Self::build(value, depth_limit)
    }

    fn build(value: &Value, remaining: usize) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::Array(items) => {
                if remaining == 0 {
                    return Self::Truncated;
                }
                Self::List(items.iter().map(|v| Self::build(v, remaining - 1)).collect())
            }
            Value::Object(map) => {
                if remaining == 0 {
                    return Self::Truncated;
                }
                Self::Map(
                    map.iter()
                        .map(|(key, v)| SummaryEntry {
                            key: key.clone(),
                            value: Self::build(v, remaining - 1),
                        })
                        .collect(),
                )
            }
            scalar => Self::Scalar(scalar_text(scalar)),
        }
    }

    /// Every scalar reachable from this node, depth first.
    #[must_use]
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Self::Scalar(text) => out.push(text),
            Self::List(items) => items.iter().for_each(|n| n.collect_leaves(out)),
            Self::Map(entries) => entries.iter().for_each(|e| e.value.collect_leaves(out)),
            Self::Missing | Self::Truncated => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOver {
    pub headline: Option<String>,
    pub reason: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiniEvent {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementUnlock {
    pub name: String,
    pub description: Option<String>,
}

/// Parsed `day_summary` payload.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DaySummary {
    pub bankruptcy: Option<String>,
    pub game_over: Option<GameOver>,
    pub mini_event: Option<MiniEvent>,
    pub achievements: Vec<AchievementUnlock>,
    /// Keys not consumed by a dedicated block, in server order.
    pub entries: Vec<SummaryEntry>,
    /// Set when the server sent a plain string instead of an object.
    pub text: Option<String>,
}

pub const BANKRUPTCY_KEY: &str = "bankruptcy_message";
pub const GAME_OVER_KEY: &str = "game_over";
pub const MINI_EVENT_KEY: &str = "mini_event";
pub const ACHIEVEMENTS_KEY: &str = "new_achievements";

const SPECIAL_KEYS: [&str; 4] = [BANKRUPTCY_KEY, GAME_OVER_KEY, MINI_EVENT_KEY, ACHIEVEMENTS_KEY];

fn text_field(map: &serde_json::Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| map.get(*k).and_then(Value::as_str))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn non_empty_str(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn parse_game_over(value: &Value) -> Option<GameOver> {
    match value {
        Value::Object(map) => Some(GameOver {
            headline: text_field(map, &["headline", "title"]),
            reason: text_field(map, &["reason"]),
            description: text_field(map, &["description", "desc"]),
        }),
        Value::Bool(true) => Some(GameOver {
            headline: None,
            reason: None,
            description: None,
        }),
        Value::String(reason) if !reason.trim().is_empty() => Some(GameOver {
            headline: None,
            reason: Some(reason.trim().to_string()),
            description: None,
        }),
        _ => None,
    }
}

fn parse_mini_event(value: &Value) -> Option<MiniEvent> {
    match value {
        Value::Object(map) => text_field(map, &["name", "title"]).map(|name| MiniEvent {
            name,
            description: text_field(map, &["description", "desc"]),
        }),
        other => non_empty_str(other).map(|name| MiniEvent {
            name,
            description: None,
        }),
    }
}

fn parse_achievements(value: &Value) -> Vec<AchievementUnlock> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match item {
            Value::Object(map) => {
                text_field(map, &["name", "id"]).map(|name| AchievementUnlock {
                    name,
                    description: text_field(map, &["description", "desc"]),
                })
            }
            other => non_empty_str(other).map(|name| AchievementUnlock {
                name,
                description: None,
            }),
        })
        .collect()
}

impl DaySummary {
    /// Split a summary object into its dedicated blocks and the generic rest.
    #[must_use]
    pub fn from_value(value: &Value, depth_limit: usize) -> Self {
        let Value::Object(map) = value else {
            return Self {
                text: match value {
                    Value::Null => None,
                    other => Some(scalar_text(other)),
                },
                ..Self::default()
            };
        };

        let entries = map
            .iter()
            .filter(|(key, _)| !SPECIAL_KEYS.contains(&key.as_str()))
            .map(|(key, v)| SummaryEntry {
                key: key.clone(),
                value: SummaryNode::from_value(v, depth_limit),
            })
            .collect();

        Self {
            bankruptcy: map.get(BANKRUPTCY_KEY).and_then(non_empty_str),
            game_over: map.get(GAME_OVER_KEY).and_then(parse_game_over),
            mini_event: map.get(MINI_EVENT_KEY).and_then(parse_mini_event),
            achievements: map
                .get(ACHIEVEMENTS_KEY)
                .map(parse_achievements)
                .unwrap_or_default(),
            entries,
            text: None,
        }
    }

    /// Pick the summary out of an end-day reply.
    ///
    /// Looks at `day_summary`, then `summary`, then `message`. Achievements
    /// announced next to the summary rather than inside it are merged in.
    #[must_use]
    pub fn from_reply(reply: &Value, depth_limit: usize) -> Option<Self> {
        let source = ["day_summary", "summary", "message"]
            .iter()
            .find_map(|k| reply.get(*k).filter(|v| !v.is_null()))?;
        let mut summary = Self::from_value(source, depth_limit);
        if summary.achievements.is_empty()
            && let Some(extra) = reply.get(ACHIEVEMENTS_KEY)
        {
            summary.achievements = parse_achievements(extra);
        }
        Some(summary)
    }

    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }
}
