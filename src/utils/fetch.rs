//! Network fetching utilities with timeout support.
//!
//! Provides the browser [`Network`] used by the `curl` and `ping` probes and
//! the promise/timeout race it is built on.

use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Promise};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::network::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;
use crate::core::probe::{HttpReply, Method, Network};

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout.
///
/// The timeout promise resolves to `undefined`, so a promise that itself
/// resolves to `undefined` is reported as [`RaceResult::TimedOut`] too.
///
/// # Arguments
/// * `promise` - The promise to race against timeout
/// * `timeout_ms` - Timeout duration in milliseconds
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Create timeout promise that resolves to undefined
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    // Race the promises
    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) => {
            if result.is_undefined() {
                RaceResult::TimedOut
            } else {
                RaceResult::Completed(result)
            }
        }
        Err(e) => RaceResult::Error(js_error_message(&e)),
    }
}

/// Best-effort message of a rejected promise value.
fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| "Unknown error".to_string())
}

// =============================================================================
// Browser Network
// =============================================================================

/// [`Network`] backed by `window.fetch`, gloo timers and `performance.now()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNetwork;

impl Network for BrowserNetwork {
    /// Fetch with CORS mode, raced against `FETCH_TIMEOUT_MS`.
    ///
    /// Any HTTP status counts as a reply; only transport failures are errors.
    async fn request(&self, method: Method, url: &str) -> Result<HttpReply, FetchError> {
        let window = web_sys::window().ok_or(FetchError::NoWindow)?;

        let opts = RequestInit::new();
        opts.set_method(method.as_str());
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts)
            .map_err(|_| FetchError::RequestCreationFailed)?;

        let fetch_promise = window.fetch_with_request(&request);

        match race_with_timeout(fetch_promise, FETCH_TIMEOUT_MS).await {
            RaceResult::TimedOut => Err(FetchError::Timeout),
            RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
            RaceResult::Completed(result) => {
                let resp: Response = result.dyn_into().map_err(|_| FetchError::InvalidContent)?;
                let content_type = resp.headers().get("content-type").ok().flatten();

                let body = match method {
                    Method::Head => String::new(),
                    Method::Get => {
                        let text = resp.text().map_err(|_| FetchError::ResponseReadFailed)?;
                        JsFuture::from(text)
                            .await
                            .map_err(|_| FetchError::ResponseReadFailed)?
                            .as_string()
                            .ok_or(FetchError::InvalidContent)?
                    }
                };

                Ok(HttpReply {
                    status: resp.status(),
                    status_text: resp.status_text(),
                    content_type,
                    body,
                })
            }
        }
    }

    async fn sleep(&self, ms: u32) {
        TimeoutFuture::new(ms).await;
    }

    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }
}
