//! Read-only panels fetched on demand: achievements, day history,
//! aggregated dashboard stats and the cash forecast.

use crate::api::ApiError;
use crate::format::floor_i64;
use crate::summary::SummaryNode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Find the list either at `key` or as the bare body.
fn list_field<'a>(body: &'a Value, key: &str, path: &str) -> Result<&'a Vec<Value>, ApiError> {
    body.get(key)
        .and_then(Value::as_array)
        .or_else(|| body.as_array())
        .ok_or_else(|| ApiError::shape(path, format!("expected `{key}` array")))
}

fn decode_list<T: DeserializeOwned>(items: &[Value], path: &str) -> Result<Vec<T>, ApiError> {
    items
        .iter()
        .map(|item| T::deserialize(item).map_err(|err| ApiError::shape(path, err.to_string())))
        .collect()
}

fn text(value: &Value, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|k| value.get(*k).and_then(Value::as_str))
        .unwrap_or_default()
        .to_string()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AchievementWire {
    id: Option<String>,
    name: Option<String>,
    #[serde(alias = "desc")]
    description: Option<String>,
    unlocked: Option<bool>,
    #[serde(alias = "unlocked_timestamp")]
    unlocked_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "AchievementWire")]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub unlocked: bool,
    /// ISO-8601 timestamp when the server records one.
    pub unlocked_at: Option<String>,
}

impl From<AchievementWire> for Achievement {
    fn from(wire: AchievementWire) -> Self {
        let id = wire.id.or_else(|| wire.name.clone()).unwrap_or_default();
        Self {
            name: wire.name.unwrap_or_else(|| id.clone()),
            id,
            description: wire.description.unwrap_or_default(),
            unlocked: wire.unlocked.unwrap_or(wire.unlocked_at.is_some()),
            unlocked_at: wire.unlocked_at,
        }
    }
}

impl Achievement {
    /// Parse the `/api/achievements` body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Shape`] if no achievement list is present or an
    /// entry has the wrong field types.
    pub fn list_from_body(body: &Value) -> Result<Vec<Self>, ApiError> {
        const PATH: &str = "/api/achievements";
        decode_list(list_field(body, "achievements", PATH)?, PATH)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HistoryWire {
    day: f64,
    #[serde(alias = "start_cash")]
    starting_cash: f64,
    #[serde(alias = "end_cash")]
    ending_cash: f64,
    net_change: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "HistoryWire")]
pub struct HistoryEntry {
    pub day: i64,
    pub starting_cash: f64,
    pub ending_cash: f64,
    pub net_change: f64,
}

impl From<HistoryWire> for HistoryEntry {
    fn from(wire: HistoryWire) -> Self {
        Self {
            day: floor_i64(wire.day),
            starting_cash: wire.starting_cash,
            ending_cash: wire.ending_cash,
            net_change: wire
                .net_change
                .unwrap_or(wire.ending_cash - wire.starting_cash),
        }
    }
}

impl HistoryEntry {
    /// Parse the `/api/history` body; order is kept (most recent last).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Shape`] if no history list is present or an entry
    /// has the wrong field types.
    pub fn list_from_body(body: &Value) -> Result<Vec<Self>, ApiError> {
        const PATH: &str = "/api/history";
        decode_list(list_field(body, "history", PATH)?, PATH)
    }
}

/// One titled block of `/api/dashboard/stats`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSection {
    pub key: String,
    pub node: SummaryNode,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub sections: Vec<StatsSection>,
    pub runway_days: Option<f64>,
    pub net_daily_flow: Option<f64>,
}

impl DashboardStats {
    /// # Errors
    ///
    /// Returns [`ApiError::Shape`] when the body is not an object or the
    /// server flagged the request as failed.
    pub fn from_body(body: &Value, depth_limit: usize) -> Result<Self, ApiError> {
        const PATH: &str = "/api/dashboard/stats";
        let map = body
            .as_object()
            .ok_or_else(|| ApiError::shape(PATH, "expected an object"))?;
        if map.get("success").and_then(Value::as_bool) == Some(false) {
            let reason = text(body, &["error", "message"]);
            return Err(ApiError::shape(PATH, reason));
        }
        let overview = body.get("financial_overview");
        Ok(Self {
            sections: map
                .iter()
                .filter(|(k, _)| !matches!(k.as_str(), "success" | "error" | "message"))
                .map(|(k, v)| StatsSection {
                    key: k.clone(),
                    node: SummaryNode::from_value(v, depth_limit),
                })
                .collect(),
            runway_days: overview
                .and_then(|o| o.get("runway_days"))
                .and_then(Value::as_f64),
            net_daily_flow: overview
                .and_then(|o| o.get("net_daily_flow"))
                .and_then(Value::as_f64),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum CashOutlook {
    Healthy,
    #[default]
    Warning,
    Critical,
}

impl From<String> for CashOutlook {
    fn from(status: String) -> Self {
        match status.as_str() {
            "healthy" => Self::Healthy,
            "critical" => Self::Critical,
            _ => Self::Warning,
        }
    }
}

impl CashOutlook {
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Healthy => "predictions.healthy",
            Self::Warning => "predictions.warning",
            Self::Critical => "predictions.critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct Prediction {
    pub day: i64,
    pub estimated_cash: f64,
    pub income: f64,
    pub expenses: f64,
    pub net_flow: f64,
    pub status: CashOutlook,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Forecast {
    pub predictions: Vec<Prediction>,
    pub recommendations: Vec<Recommendation>,
}

impl Forecast {
    /// # Errors
    ///
    /// Returns [`ApiError::Shape`] if the predictions list is missing or an
    /// entry has the wrong field types.
    pub fn from_body(body: &Value) -> Result<Self, ApiError> {
        const PATH: &str = "/api/dashboard/predictions";
        let predictions = decode_list(list_field(body, "predictions", PATH)?, PATH)?;
        let recommendations = match body.get("recommendations").and_then(Value::as_array) {
            Some(list) => decode_list(list, PATH)?,
            None => Vec::new(),
        };
        Ok(Self {
            predictions,
            recommendations,
        })
    }

    /// Days until the forecast first turns critical.
    #[must_use]
    pub fn first_critical_day(&self) -> Option<i64> {
        self.predictions
            .iter()
            .find(|p| p.status == CashOutlook::Critical)
            .map(|p| p.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn achievements_accept_desc_and_wrapped_or_bare_lists() {
        let wrapped = json!({
            "success": true,
            "achievements": [
                { "id": "first", "name": "First Task", "desc": "Do a task", "unlocked": true },
                { "id": "rich", "name": "Rich", "desc": "1M" }
            ]
        });
        let list = Achievement::list_from_body(&wrapped).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].description, "Do a task");
        assert!(list[0].unlocked);
        assert!(!list[1].unlocked);

        let bare = json!([{ "name": "Solo", "unlocked_at": "2025-01-01T00:00:00Z" }]);
        let list = Achievement::list_from_body(&bare).unwrap();
        assert_eq!(list[0].id, "Solo");
        assert!(list[0].unlocked);

        assert!(Achievement::list_from_body(&json!({ "success": true })).is_err());
    }

    #[test]
    fn history_derives_net_change_when_missing() {
        let body = json!({ "history": [
            { "day": 1, "starting_cash": 1000, "ending_cash": 900 },
            { "day": 2, "starting_cash": 900, "ending_cash": 1100, "net_change": 200 }
        ]});
        let list = HistoryEntry::list_from_body(&body).unwrap();
        assert!((list[0].net_change + 100.0).abs() < f64::EPSILON);
        assert_eq!(list[1].day, 2);
    }

    #[test]
    fn stats_keep_section_order_and_shortcuts() {
        let body = json!({
            "success": true,
            "financial_overview": { "runway_days": 12, "net_daily_flow": -40 },
            "employee_stats": { "total_employees": 3 }
        });
        let stats = DashboardStats::from_body(&body, 32).unwrap();
        let keys: Vec<_> = stats.sections.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["financial_overview", "employee_stats"]);
        assert_eq!(stats.runway_days, Some(12.0));
        assert_eq!(stats.net_daily_flow, Some(-40.0));

        let failed = json!({ "success": false, "error": "boom" });
        assert!(DashboardStats::from_body(&failed, 32).is_err());
    }

    #[test]
    fn forecast_flags_first_critical_day() {
        let body = json!({
            "predictions": [
                { "day": 1, "estimated_cash": 50, "status": "warning" },
                { "day": 2, "estimated_cash": 0, "status": "critical" }
            ],
            "recommendations": [{ "type": "warning", "title": "Cash", "message": "Low", "action": "Work" }]
        });
        let forecast = Forecast::from_body(&body).unwrap();
        assert_eq!(forecast.first_critical_day(), Some(2));
        assert_eq!(forecast.recommendations[0].kind, "warning");
        assert_eq!(forecast.predictions[0].status, CashOutlook::Warning);
        assert!(forecast.predictions[0].income.abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_outlook_reads_as_warning() {
        let body = json!({ "predictions": [{ "day": 3, "status": "mystery" }] });
        let forecast = Forecast::from_body(&body).unwrap();
        assert_eq!(forecast.predictions[0].status, CashOutlook::Warning);
        assert!(forecast.recommendations.is_empty());
    }

    #[test]
    fn achievement_timestamp_alias_and_bad_types() {
        let body = json!([{ "id": "veteran", "unlocked_timestamp": "2025-02-01" }]);
        let list = Achievement::list_from_body(&body).unwrap();
        assert_eq!(list[0].name, "veteran");
        assert_eq!(list[0].unlocked_at.as_deref(), Some("2025-02-01"));
        assert!(list[0].unlocked);

        let explicit = json!([{ "id": "x", "unlocked": false, "unlocked_at": "2025-02-01" }]);
        assert!(!Achievement::list_from_body(&explicit).unwrap()[0].unlocked);

        let broken = json!({ "achievements": [{ "name": 42 }] });
        assert!(matches!(
            Achievement::list_from_body(&broken),
            Err(ApiError::Shape { .. })
        ));
    }

    #[test]
    fn history_accepts_short_cash_names() {
        let body = json!([{ "day": 4, "start_cash": 500, "end_cash": 650 }]);
        let list = HistoryEntry::list_from_body(&body).unwrap();
        assert!((list[0].starting_cash - 500.0).abs() < f64::EPSILON);
        assert!((list[0].net_change - 150.0).abs() < f64::EPSILON);
    }
}
