//! Client for the hosted auth API (Supabase GoTrue). Every request carries the
//! public anon key; the password update is authorized with the recovery
//! session instead. Passwords and tokens go straight into the request and are
//! never logged.

use crate::{
    app_lib::{
        AppError,
        api::{post_json_with_headers, post_json_with_headers_response, put_json_with_headers},
        config::AppConfig,
        endpoint,
    },
    features::auth::{
        backend::AuthBackend,
        session::ResetSession,
        types::{
            CredentialsRequest, RecoverRequest, TokenResponse, UpdatePasswordRequest, UserSession,
        },
    },
};
use secrecy::{ExposeSecret, SecretString};

#[derive(Clone)]
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.supabase_url.clone(),
            anon_key: config.anon_key.clone(),
        }
    }

    fn ensure_configured(&self) -> Result<(), AppError> {
        if self.base_url.trim().is_empty() || self.anon_key.trim().is_empty() {
            return Err(AppError::Config(
                "Auth service is not configured.".to_string(),
            ));
        }
        Ok(())
    }

    /// `apikey` plus a bearer token; the anon key doubles as bearer when no
    /// user session is involved.
    fn headers(&self, bearer: Option<&str>) -> Vec<(String, String)> {
        let bearer = bearer.unwrap_or(self.anon_key.as_str());
        vec![
            ("apikey".to_string(), self.anon_key.clone()),
            ("Authorization".to_string(), format!("Bearer {bearer}")),
        ]
    }
}

impl AuthBackend for SupabaseClient {
    async fn create_account(&self, email: &str, password: &SecretString) -> Result<(), AppError> {
        self.ensure_configured()?;
        let request = CredentialsRequest {
            email,
            password: password.expose_secret(),
        };
        post_json_with_headers(
            &endpoint::signup_url(&self.base_url),
            &request,
            &self.headers(None),
        )
        .await
    }

    async fn authenticate(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<UserSession, AppError> {
        self.ensure_configured()?;
        let request = CredentialsRequest {
            email,
            password: password.expose_secret(),
        };
        let response: TokenResponse = post_json_with_headers_response(
            &endpoint::password_grant_url(&self.base_url),
            &request,
            &self.headers(None),
        )
        .await?;
        Ok(response.into_session(email))
    }

    async fn request_password_reset(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), AppError> {
        self.ensure_configured()?;
        post_json_with_headers(
            &endpoint::recover_url(&self.base_url, redirect_to),
            &RecoverRequest { email },
            &self.headers(None),
        )
        .await
    }

    async fn update_password(
        &self,
        session: Option<&ResetSession>,
        new_password: &SecretString,
    ) -> Result<(), AppError> {
        self.ensure_configured()?;
        let bearer = session.map(|session| session.access_token().expose_secret());
        put_json_with_headers(
            &endpoint::user_url(&self.base_url),
            &UpdatePasswordRequest {
                password: new_password.expose_secret(),
            },
            &self.headers(bearer),
        )
        .await
    }
}
