//! Sign-up route. Validates the draft locally, creates the account with the
//! hosted auth API, and asks the user to confirm their email. The name is
//! collected and validated here but not sent with the account request.

use super::{
    auth_form::{FlowField, PasswordToggle, is_submitting, password_input_type},
    paths,
};
use crate::{
    app_lib::config::AppConfig,
    components::{AuthCard, Button, Spinner},
    features::{
        auth::{
            client::SupabaseClient,
            flow::{self, AuthFlow, Screen},
            validation::Field,
        },
        notifications::use_notifier,
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;

/// Renders the sign-up form and drives account creation.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let notifier = use_notifier();
    let backend = SupabaseClient::from_config(&AppConfig::load());
    let flow = RwSignal::new(AuthFlow::new(Screen::SignUp));
    let show_password = RwSignal::new(false);
    let submitting = is_submitting(flow);

    let signup_action = Action::new_local(move |_: &()| {
        let backend = backend.clone();
        async move { flow::submit(&flow, &backend, &notifier).await }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        signup_action.dispatch(());
    };

    view! {
        <AuthCard title="Create Account" subtitle="Join MediSense to simplify ECG reports">
            <form class="space-y-4" novalidate on:submit=on_submit>
                <FlowField
                    flow=flow
                    field=Field::Name
                    input_type="text"
                    placeholder="Enter Your Name"
                    autocomplete="name"
                />
                <FlowField
                    flow=flow
                    field=Field::Email
                    input_type="email"
                    placeholder="Email address"
                    autocomplete="email"
                />
                <FlowField
                    flow=flow
                    field=Field::Password
                    input_type=password_input_type(show_password)
                    placeholder="Enter Password"
                    autocomplete="new-password"
                >
                    <PasswordToggle shown=show_password />
                </FlowField>
                <FlowField
                    flow=flow
                    field=Field::ConfirmPassword
                    input_type=password_input_type(show_password)
                    placeholder="Confirm Password"
                    autocomplete="new-password"
                >
                    <PasswordToggle shown=show_password />
                </FlowField>

                <Button button_type="submit" disabled=submitting>
                    {move || if submitting.get() { "Creating Account..." } else { "Sign Up" }}
                </Button>
                {move || {
                    submitting
                        .get()
                        .then_some(view! { <div class="flex justify-center"><Spinner /></div> })
                }}
            </form>

            <p class="mt-6 text-center text-sm text-gray-600">
                "Already have an account? "
                <A href=paths::SIGN_IN {..} class="font-medium text-blue-600 hover:underline">
                    "Sign in"
                </A>
            </p>
        </AuthCard>
    }
}
