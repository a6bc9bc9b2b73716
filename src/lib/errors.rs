use serde_json::Value;
use thiserror::Error;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Keys the auth backend uses for human-readable error text, in preference order.
const MESSAGE_KEYS: [&str; 4] = ["msg", "message", "error_description", "error"];

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Builds an HTTP error from a non-success response body, keeping only the
    /// backend's message.
    pub fn from_response(status: u16, body: &str) -> Self {
        AppError::Http {
            status,
            message: extract_error_message(body),
        }
    }

    /// Text shown to the user. Backend rejections are passed through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Http { message, .. } => message.clone(),
            _ => self.to_string(),
        }
    }
}

/// Pulls the human-readable message out of a JSON error body, falling back to
/// the trimmed raw body.
pub fn extract_error_message(body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|value| {
        MESSAGE_KEYS.iter().find_map(|key| {
            value
                .get(key)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|message| !message.is_empty())
                .map(str::to_string)
        })
    });

    sanitize_body(from_json.as_deref().unwrap_or(body))
}

/// Trims and truncates error text for display.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
