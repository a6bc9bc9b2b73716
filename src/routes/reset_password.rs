//! Password reset route. The emailed recovery link lands here with the session
//! in the URL fragment; the fragment is read once on mount and then removed
//! from the address bar so the token does not linger in history.

use super::{
    auth_form::{FlowField, PasswordToggle, is_submitting, password_input_type},
    paths,
};
use crate::{
    app_lib::config::AppConfig,
    components::{Alert, AlertKind, AuthCard, Button, Spinner},
    features::{
        auth::{
            client::SupabaseClient,
            flow::{self, AuthFlow, Screen},
            session::{ResetFragment, parse_reset_fragment},
            validation::Field,
        },
        notifications::{NotificationKind, Notify, use_notifier},
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;
use wasm_bindgen::JsValue;

/// Renders the new-password form bound to the recovery session, if any.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let notifier = use_notifier();
    let backend = SupabaseClient::from_config(&AppConfig::load());

    let session = match take_reset_fragment() {
        ResetFragment::Session(session) => Some(session),
        ResetFragment::Error(message) => {
            log::warn!("password reset link rejected by the auth service");
            notifier.notify(NotificationKind::Error, message);
            None
        }
        ResetFragment::Empty => None,
    };
    let has_session = session.is_some();

    let flow = RwSignal::new(AuthFlow::new(Screen::ResetPassword).with_reset_session(session));
    let show_password = RwSignal::new(false);
    let submitting = is_submitting(flow);

    let update_action = Action::new_local(move |_: &()| {
        let backend = backend.clone();
        async move { flow::submit(&flow, &backend, &notifier).await }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        update_action.dispatch(());
    };

    view! {
        <AuthCard title="Reset Password" subtitle="Enter your new password below">
            {(!has_session)
                .then(|| {
                    view! {
                        <div class="mb-4">
                            <Alert
                                kind=AlertKind::Info
                                message="Open this page from the password reset link in your email."
                                    .to_string()
                            />
                        </div>
                    }
                })}
            <form class="space-y-5" novalidate on:submit=on_submit>
                <FlowField
                    flow=flow
                    field=Field::Password
                    input_type=password_input_type(show_password)
                    label="New Password"
                    placeholder="Enter new password"
                    autocomplete="new-password"
                >
                    <PasswordToggle shown=show_password />
                </FlowField>
                <FlowField
                    flow=flow
                    field=Field::ConfirmPassword
                    input_type=password_input_type(show_password)
                    label="Confirm Password"
                    placeholder="Confirm new password"
                    autocomplete="new-password"
                />

                <Button button_type="submit" disabled=submitting>
                    {move || if submitting.get() { "Updating..." } else { "Update Password" }}
                </Button>
                {move || {
                    submitting
                        .get()
                        .then_some(view! { <div class="flex justify-center"><Spinner /></div> })
                }}
            </form>

            <p class="mt-6 text-center text-sm text-gray-600">
                <A href=paths::SIGN_IN {..} class="font-medium text-blue-600 hover:underline">
                    "Back to sign in"
                </A>
            </p>
        </AuthCard>
    }
}

/// Reads the recovery fragment and strips it from the current history entry.
fn take_reset_fragment() -> ResetFragment {
    let Some(window) = web_sys::window() else {
        return ResetFragment::Empty;
    };
    let hash = window.location().hash().unwrap_or_default();
    let fragment = parse_reset_fragment(&hash);

    if !hash.is_empty() {
        let cleared = window.history().and_then(|history| {
            history.replace_state_with_url(&JsValue::NULL, "", Some(paths::RESET_PASSWORD))
        });
        if cleared.is_err() {
            log::debug!("could not clear the reset link fragment");
        }
    }

    if let ResetFragment::Session(session) = &fragment {
        log::debug!(
            "recovery session received (refresh token: {})",
            session.has_refresh_token()
        );
    }
    fragment
}
