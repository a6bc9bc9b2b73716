//! HTTP helpers for JSON APIs with consistent timeouts and error handling. The
//! auth client uses these helpers to avoid duplicating request setup and to
//! enforce a predictable timeout policy. The helpers do not store secrets or
//! tokens; they only attach headers provided by callers.

use super::errors::AppError;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::to_string;
use web_sys::AbortController;

/// Default request timeout (milliseconds) applied to all HTTP helpers.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Posts JSON with custom headers and expects no meaningful response body.
pub async fn post_json_with_headers<B: Serialize>(
    url: &str,
    body: &B,
    headers: &[(String, String)],
) -> Result<(), AppError> {
    let response = send_json(Request::post(url), body, headers).await?;
    handle_empty_response(response).await
}

/// Posts JSON with custom headers and parses a JSON response.
pub async fn post_json_with_headers_response<B: Serialize, T: DeserializeOwned>(
    url: &str,
    body: &B,
    headers: &[(String, String)],
) -> Result<T, AppError> {
    let response = send_json(Request::post(url), body, headers).await?;
    handle_json_response(response).await
}

/// Puts JSON with custom headers and expects no meaningful response body.
pub async fn put_json_with_headers<B: Serialize>(
    url: &str,
    body: &B,
    headers: &[(String, String)],
) -> Result<(), AppError> {
    let response = send_json(Request::put(url), body, headers).await?;
    handle_empty_response(response).await
}

/// Encodes the body and sends it with the shared headers and timeout.
async fn send_json<B: Serialize>(
    builder: RequestBuilder,
    body: &B,
    headers: &[(String, String)],
) -> Result<Response, AppError> {
    let payload = to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    send_with_timeout(move |signal| {
        let mut builder = builder
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal));

        for (name, value) in headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        builder
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Parses JSON responses and surfaces HTTP errors with the backend message.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(error_from_response(response).await)
    }
}

/// Accepts any success response and returns HTTP errors with the backend message.
async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

async fn error_from_response(response: Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    AppError::from_response(status, &body)
}
