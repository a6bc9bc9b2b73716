//! Recovery session handed over by the password-reset email link. The backend
//! redirects to `/reset-password#access_token=…&type=recovery` (or
//! `#error=…&error_description=…` when the link is unusable); the reset screen
//! parses that fragment once and passes the session explicitly to
//! `update_password`.

use secrecy::{ExposeSecret, SecretString};
use url::form_urlencoded;

/// Bearer credentials for the password update. Debug output is redacted.
#[derive(Debug)]
pub struct ResetSession {
    access_token: SecretString,
    refresh_token: Option<SecretString>,
}

impl ResetSession {
    pub fn new(access_token: &str, refresh_token: Option<&str>) -> Self {
        Self {
            access_token: SecretString::from(access_token.to_string()),
            refresh_token: refresh_token.map(|token| SecretString::from(token.to_string())),
        }
    }

    pub fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    pub fn has_refresh_token(&self) -> bool {
        self.refresh_token.is_some()
    }
}

impl Clone for ResetSession {
    fn clone(&self) -> Self {
        Self::new(
            self.access_token.expose_secret(),
            self.refresh_token
                .as_ref()
                .map(|token| token.expose_secret()),
        )
    }
}

#[derive(Debug)]
pub enum ResetFragment {
    Session(ResetSession),
    /// The backend rejected the link; carries its description verbatim.
    Error(String),
    Empty,
}

/// Parses a URL fragment (with or without the leading `#`).
pub fn parse_reset_fragment(fragment: &str) -> ResetFragment {
    let trimmed = fragment.trim().trim_start_matches('#');
    if trimmed.is_empty() {
        return ResetFragment::Empty;
    }

    let mut access_token = None;
    let mut refresh_token = None;
    let mut error = None;
    let mut error_description = None;
    for (key, value) in form_urlencoded::parse(trimmed.as_bytes()) {
        let value = value.trim().to_string();
        if value.is_empty() {
            continue;
        }
        match key.as_ref() {
            "access_token" => access_token = Some(value),
            "refresh_token" => refresh_token = Some(value),
            "error" => error = Some(value),
            "error_description" => error_description = Some(value),
            _ => {}
        }
    }

    if let Some(message) = error_description.or(error) {
        return ResetFragment::Error(message);
    }
    match access_token {
        Some(token) => ResetFragment::Session(ResetSession::new(&token, refresh_token.as_deref())),
        None => ResetFragment::Empty,
    }
}
