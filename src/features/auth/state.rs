//! Auth session state and context for the frontend. Sign-in stores the user
//! summary here so any view can tell whether someone is signed in. Only
//! non-sensitive metadata is kept; tokens stay with the backend.

use crate::features::auth::types::UserSession;
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<Option<UserSession>>,
}

impl AuthContext {
    /// Builds a context around the provided session signal.
    fn new(session: RwSignal<Option<UserSession>>) -> Self {
        Self { session }
    }

    /// Updates the in-memory session after sign-in.
    pub fn set_session(&self, session: UserSession) {
        self.session.set(Some(session));
    }

    /// Email of the signed-in user, if any.
    pub fn signed_in_email(&self) -> Option<String> {
        self.session.with(|session| session.as_ref().map(|user| user.email.clone()))
    }
}

/// Provides the auth context for the app.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(None);
    provide_context(AuthContext::new(session));

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let session = RwSignal::new(None);
        AuthContext::new(session)
    })
}
