//! `fetch`-backed transport for the dashboard controller.

use serde_json::Value;
use tycoon_core::{ApiClient, ApiError, ApiRequest};

/// Same-origin JSON client built on `window.fetch`.
///
/// Non-2xx responses are still decoded: the backend reports rejections
/// (`{"success": false, ...}`) with 4xx codes and the controller needs the
/// body to tell a rejection from a transport failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserApi;

#[cfg(target_arch = "wasm32")]
impl ApiClient for BrowserApi {
    async fn send(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        use crate::dom::{fetch_response, response_json};

        let body = request.body.as_ref().map(Value::to_string);
        let response = fetch_response(&request.path, request.method.as_str(), body.as_deref())
            .await
            .map_err(|err| ApiError::transport(&request.path, err.to_string()))?;
        let status = response.status();
        let js = match response_json(&response).await {
            Ok(js) => js,
            Err(err) if response.ok() => {
                return Err(ApiError::transport(&request.path, err.to_string()));
            }
            Err(_) => {
                return Err(ApiError::transport(
                    &request.path,
                    format!("HTTP {status} without a JSON body"),
                ));
            }
        };
        let value: Value = serde_wasm_bindgen::from_value(js)
            .map_err(|err| ApiError::shape(&request.path, err.to_string()))?;
        log::debug!("{} {} -> {status}", request.method.as_str(), request.path);
        Ok(value)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ApiClient for BrowserApi {
    async fn send(&self, request: &ApiRequest) -> Result<Value, ApiError> {
        Err(ApiError::transport(
            &request.path,
            "fetch is only available in the browser",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn host_transport_reports_failure() {
        let err = block_on(BrowserApi.send(&ApiRequest::get("/api/state")))
            .expect_err("no fetch on host");
        assert!(matches!(err, ApiError::Transport { .. }));
        assert!(err.to_string().contains("/api/state"));
    }
}
