pub(crate) mod paths;

#[cfg(target_arch = "wasm32")]
mod auth_form;
#[cfg(target_arch = "wasm32")]
mod forgot_password;
#[cfg(target_arch = "wasm32")]
mod landing;
#[cfg(target_arch = "wasm32")]
mod not_found;
#[cfg(target_arch = "wasm32")]
mod reset_password;
#[cfg(target_arch = "wasm32")]
mod signin;
#[cfg(target_arch = "wasm32")]
mod signup;

#[cfg(target_arch = "wasm32")]
pub(crate) use forgot_password::ForgotPasswordPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use landing::LandingPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use not_found::NotFoundPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use reset_password::ResetPasswordPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use signin::SignInPage;
#[cfg(target_arch = "wasm32")]
pub(crate) use signup::SignUpPage;

#[cfg(target_arch = "wasm32")]
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use leptos_router::components::{Route, Routes};
#[cfg(target_arch = "wasm32")]
use leptos_router::path;

/// Fixed route table; no guards, the backend enforces access.
#[cfg(target_arch = "wasm32")]
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LandingPage />
            <Route path=path!("/signup") view=SignUpPage />
            <Route path=path!("/signin") view=SignInPage />
            <Route path=path!("/forgot-password") view=ForgotPasswordPage />
            <Route path=path!("/reset-password") view=ResetPasswordPage />
        </Routes>
    }
}
