//! Request and response types for the hosted auth API. Request payloads carry
//! passwords, so they are serialized straight into the request body and never
//! logged.

use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct CredentialsRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct RecoverRequest<'a> {
    pub email: &'a str,
}

#[derive(Serialize)]
pub struct UpdatePasswordRequest<'a> {
    pub password: &'a str,
}

/// Password-grant response. Only the user block is kept; the tokens are left
/// to the backend's own session handling.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub user: UserPayload,
}

#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Signed-in user summary kept in app state. Contains no secrets.
pub struct UserSession {
    pub user_id: String,
    pub email: String,
}

impl TokenResponse {
    /// Converts the response into app state, using the submitted email when the
    /// backend omits it.
    pub fn into_session(self, submitted_email: &str) -> UserSession {
        UserSession {
            user_id: self.user.id,
            email: self
                .user
                .email
                .unwrap_or_else(|| submitted_email.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CredentialsRequest, RecoverRequest, TokenResponse, UpdatePasswordRequest};
    use serde_json::json;

    #[test]
    fn request_bodies_match_the_api() {
        let credentials = CredentialsRequest {
            email: "a@b.co",
            password: "secret1",
        };
        assert_eq!(
            serde_json::to_value(&credentials).ok(),
            Some(json!({"email": "a@b.co", "password": "secret1"}))
        );
        assert_eq!(
            serde_json::to_value(RecoverRequest { email: "a@b.co" }).ok(),
            Some(json!({"email": "a@b.co"}))
        );
        assert_eq!(
            serde_json::to_value(UpdatePasswordRequest { password: "n3wpass" }).ok(),
            Some(json!({"password": "n3wpass"}))
        );
    }

    #[test]
    fn token_response_keeps_only_the_user() {
        let body = json!({
            "access_token": "eyJhbGciOi...",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "r3fr3sh",
            "user": {
                "id": "8c1f6a3e-0d1b-4a55-9a7e-1f0d2c3b4a59",
                "aud": "authenticated",
                "email": "asha@example.com"
            }
        });
        let response: TokenResponse = serde_json::from_value(body).expect("token response");
        let session = response.into_session("ignored@example.com");
        assert_eq!(session.user_id, "8c1f6a3e-0d1b-4a55-9a7e-1f0d2c3b4a59");
        assert_eq!(session.email, "asha@example.com");
    }

    #[test]
    fn token_response_falls_back_to_submitted_email() {
        let body = json!({ "user": { "id": "u-1" } });
        let response: TokenResponse = serde_json::from_value(body).expect("token response");
        assert_eq!(response.into_session("asha@example.com").email, "asha@example.com");
    }
}
