//! Native transport and recording view for driving the dashboard controller
//! against a live backend.

mod recorder;

pub use recorder::{RecordedNotice, RecordingView};

use anyhow::{Context, Result};
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::Duration;
use tycoon_core::{ApiClient, ApiError, ApiRequest, ClientConfig, Controller, Method};

pub type ApiController = Controller<HttpApi, RecordingView>;

/// `reqwest`-backed [`ApiClient`]; request paths arrive fully prefixed.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
}

impl HttpApi {
    /// Build a client with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("building HTTP client")?;
        Ok(Self { client })
    }
}

impl ApiClient for HttpApi {
    async fn send(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.path),
            Method::Post => self.client.post(&request.path),
        };
        let builder = match &request.body {
            Some(body) => builder.json(body),
            None => builder,
        };
        let response = builder
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| ApiError::transport(&request.path, err.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::transport(&request.path, err.to_string()))?;
        log::debug!("{} {} -> {status}", request.method.as_str(), request.path);
        match serde_json::from_str(&text) {
            Ok(value) => Ok(value),
            Err(err) if status.is_success() => Err(ApiError::decode(&request.path, err)),
            Err(_) => Err(ApiError::transport(
                &request.path,
                format!("HTTP {status} without a JSON body"),
            )),
        }
    }
}

/// Fresh controller pointed at `api_url`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn new_controller(api_url: &str, timeout: Duration) -> Result<ApiController> {
    let config = ClientConfig::default().with_api_base(api_url);
    Ok(Controller::new(
        HttpApi::new(timeout)?,
        RecordingView::default(),
        config,
    ))
}
