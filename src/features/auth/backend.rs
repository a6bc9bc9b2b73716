//! The four remote operations the account screens depend on. The browser build
//! talks to the hosted API through [`super::client::SupabaseClient`]; tests use
//! in-process fakes.

use crate::{
    app_lib::AppError,
    features::auth::{session::ResetSession, types::UserSession},
};
use secrecy::SecretString;

#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    /// Registers an account; the backend emails a confirmation link.
    async fn create_account(&self, email: &str, password: &SecretString) -> Result<(), AppError>;

    async fn authenticate(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<UserSession, AppError>;

    /// Asks the backend to email a reset link pointing at `redirect_to`.
    async fn request_password_reset(&self, email: &str, redirect_to: &str)
    -> Result<(), AppError>;

    /// Sets a new password for the account behind `session`. Without a session
    /// the request still goes out and the backend decides.
    async fn update_password(
        &self,
        session: Option<&ResetSession>,
        new_password: &SecretString,
    ) -> Result<(), AppError>;
}
