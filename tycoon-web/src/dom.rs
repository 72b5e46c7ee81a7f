use js_sys::{Function, Promise};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Request, RequestInit, Response, Storage, Window};

/// Failures surfaced by the browser helpers.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("`window` is not available in this context")]
    NoWindow,
    #[error("`document` is not available in this context")]
    NoDocument,
    #[error("{0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        Self::Js(js_error_message(&value))
    }
}

/// Retrieve the global `window` object.
///
/// # Errors
/// Returns [`DomError::NoWindow`] outside of a browser context.
pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Retrieve the document object for DOM interactions.
///
/// # Errors
/// Returns an error when no window or document is reachable.
pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

pub fn console_info(message: &str) {
    web_sys::console::info_1(&JsValue::from(message));
}

/// High-resolution clock in milliseconds, `0.0` when unavailable.
#[must_use]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|win| win.performance())
        .map_or(0.0, |perf| perf.now())
}

/// Blocking `window.confirm`; anything but an explicit yes counts as no.
#[must_use]
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|win| win.confirm_with_message(message).map_err(DomError::from))
        .unwrap_or(false)
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), DomError> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve = resolve_slot.ok_or_else(|| DomError::Js("timer promise unresolvable".into()))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Issue a fetch and return the browser `Response`, whatever its status.
///
/// # Errors
/// Returns an error if the request cannot be built or the network call fails.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(
    url: &str,
    method: &str,
    json_body: Option<&str>,
) -> Result<Response, DomError> {
    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = json_body {
        init.set_body(&JsValue::from_str(body));
    }
    let request = Request::new_with_str_and_init(url, &init)?;
    request.headers().set("Accept", "application/json")?;
    if json_body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }
    let resp_value = JsFuture::from(window()?.fetch_with_request(&request)).await?;
    Ok(resp_value.dyn_into::<Response>()?)
}

/// Read a response body as parsed JSON.
///
/// # Errors
/// Returns an error when the body is not valid JSON.
#[allow(clippy::future_not_send)]
pub async fn response_json(response: &Response) -> Result<JsValue, DomError> {
    Ok(JsFuture::from(response.json()?).await?)
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, DomError> {
    window()?
        .local_storage()?
        .ok_or_else(|| DomError::Js("localStorage unavailable".into()))
}
