//! Backend endpoint table, request/response envelopes and the transport seam.

use crate::config::ResetRoute;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A single HTTP call against the game backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: None,
        }
    }

    #[must_use]
    pub fn post_json(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
        }
    }
}

/// Failures that happen before an application-level reply could be read.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {path} failed: {reason}")]
    Transport { path: String, reason: String },
    #[error("response from {path} is not valid JSON: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected response shape from {path}: {reason}")]
    Shape { path: String, reason: String },
}

impl ApiError {
    #[must_use]
    pub fn transport(path: &str, reason: impl Into<String>) -> Self {
        Self::Transport {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn decode(path: &str, source: serde_json::Error) -> Self {
        Self::Decode {
            path: path.to_string(),
            source,
        }
    }

    #[must_use]
    pub fn shape(path: &str, reason: impl Into<String>) -> Self {
        Self::Shape {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}

/// Transport abstraction for talking to the backend.
///
/// Implementations must return the parsed JSON body for any response that
/// carries one, including non-2xx statuses; the controller decides what an
/// `error` or `success: false` body means. Only network failures and
/// unparseable bodies become [`ApiError`]s.
#[allow(async_fn_in_trait)]
pub trait ApiClient {
    /// Perform the request and return the decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the body is not JSON.
    async fn send(&self, request: &ApiRequest) -> Result<Value, ApiError>;
}

impl<T: ApiClient + ?Sized> ApiClient for std::rc::Rc<T> {
    async fn send(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        (**self).send(request).await
    }
}

/// Body of `POST /api/employees/hire`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HireRequest {
    pub name: String,
    pub position: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HireError {
    #[error("hire form field `{0}` is empty")]
    MissingField(&'static str),
}

impl HireRequest {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            department: department.into(),
        }
    }

    /// Trimmed copy of the form, rejected when any field is blank.
    ///
    /// # Errors
    ///
    /// Returns the first empty field in form order.
    pub fn validated(&self) -> Result<Self, HireError> {
        let name = self.name.trim();
        let position = self.position.trim();
        let department = self.department.trim();
        if name.is_empty() {
            return Err(HireError::MissingField("name"));
        }
        if position.is_empty() {
            return Err(HireError::MissingField("position"));
        }
        if department.is_empty() {
            return Err(HireError::MissingField("department"));
        }
        Ok(Self::new(name, position, department))
    }
}

/// Every backend route the dashboard talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    State,
    Task { task_type: String },
    UpgradeDepartment { department: String },
    Hire(HireRequest),
    RestoreEnergy,
    EndDay,
    Save,
    Load,
    Reset(ResetRoute),
    DashboardStats,
    Predictions,
    Achievements,
    History { count: u32 },
}

impl Endpoint {
    #[must_use]
    pub fn request(&self) -> ApiRequest {
        match self {
            Self::State => ApiRequest::get("/api/state"),
            Self::Task { task_type } => {
                ApiRequest::post_json("/api/task", json!({ "task_type": task_type }))
            }
            Self::UpgradeDepartment { department } => {
                ApiRequest::post(format!("/api/department/{department}/upgrade"))
            }
            Self::Hire(form) => ApiRequest::post_json(
                "/api/employees/hire",
                json!({
                    "name": form.name,
                    "position": form.position,
                    "department": form.department,
                }),
            ),
            Self::RestoreEnergy => ApiRequest::post("/api/energy/restore"),
            Self::EndDay => ApiRequest::post("/api/day/end"),
            Self::Save => ApiRequest::post("/api/state/save"),
            Self::Load => ApiRequest::post("/api/state/load"),
            Self::Reset(route) => ApiRequest::post(route.path()),
            Self::DashboardStats => ApiRequest::get("/api/dashboard/stats"),
            Self::Predictions => ApiRequest::get("/api/dashboard/predictions"),
            Self::Achievements => ApiRequest::get("/api/achievements"),
            Self::History { count } => ApiRequest::get(format!("/api/history?n={count}")),
        }
    }
}

/// The `{success, message}` envelope returned by mutating endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionReply {
    pub success: bool,
    pub message: Option<String>,
    pub body: Value,
}

impl ActionReply {
    /// Interpret a reply body.
    ///
    /// An explicit `success` flag wins. Without one, a body carrying an
    /// `error` field is a rejection and anything else counts as success.
    #[must_use]
    pub fn from_value(body: Value) -> Self {
        let error = body.get("error").and_then(Value::as_str).map(str::to_string);
        let success = body
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(error.is_none());
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or(error)
            .filter(|m| !m.trim().is_empty());
        Self {
            success,
            message,
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_documented_routes() {
        let task = Endpoint::Task {
            task_type: "kod_yaz".into(),
        }
        .request();
        assert_eq!(task.method, Method::Post);
        assert_eq!(task.path, "/api/task");
        assert_eq!(task.body, Some(json!({ "task_type": "kod_yaz" })));

        let upgrade = Endpoint::UpgradeDepartment {
            department: "engLevel".into(),
        }
        .request();
        assert_eq!(upgrade.path, "/api/department/engLevel/upgrade");
        assert!(upgrade.body.is_none());

        assert_eq!(
            Endpoint::History { count: 7 }.request().path,
            "/api/history?n=7"
        );
        assert_eq!(
            Endpoint::Reset(ResetRoute::ResetAll).request().path,
            "/api/reset_all"
        );
        assert_eq!(Endpoint::State.request().method, Method::Get);
    }

    #[test]
    fn hire_body_carries_all_fields() {
        let req = Endpoint::Hire(HireRequest::new("Ada", "Engineer", "engLevel")).request();
        assert_eq!(
            req.body,
            Some(json!({ "name": "Ada", "position": "Engineer", "department": "engLevel" }))
        );
    }

    #[test]
    fn hire_validation_reports_first_blank_field() {
        let blank_position = HireRequest::new("Ada", "  ", "engLevel");
        assert_eq!(
            blank_position.validated(),
            Err(HireError::MissingField("position"))
        );
        let ok = HireRequest::new(" Ada ", "Engineer", "engLevel")
            .validated()
            .unwrap();
        assert_eq!(ok.name, "Ada");
    }

    #[test]
    fn reply_without_flag_uses_error_field() {
        let rejected = ActionReply::from_value(json!({ "error": "Yetersiz enerji" }));
        assert!(!rejected.success);
        assert_eq!(rejected.message.as_deref(), Some("Yetersiz enerji"));

        let bare_state = ActionReply::from_value(json!({ "cash": 10 }));
        assert!(bare_state.success);
        assert!(bare_state.message.is_none());

        let explicit = ActionReply::from_value(json!({ "success": false, "message": "no" }));
        assert!(!explicit.success);
        assert_eq!(explicit.message.as_deref(), Some("no"));
    }
}
