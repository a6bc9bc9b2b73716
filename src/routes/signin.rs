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
            flow::{self, AuthFlow, RemoteReply, Screen, SubmitOutcome},
            state::use_auth,
            validation::Field,
        },
        notifications::use_notifier,
    },
};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;

/// Renders the sign-in form. A successful sign-in stores the user in the auth
/// context and stays on the page.
#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth();
    let notifier = use_notifier();
    let backend = SupabaseClient::from_config(&AppConfig::load());
    let flow = RwSignal::new(AuthFlow::new(Screen::SignIn));
    let show_password = RwSignal::new(false);
    let submitting = is_submitting(flow);

    let signin_action = Action::new_local(move |_: &()| {
        let backend = backend.clone();
        async move {
            let outcome = flow::submit(&flow, &backend, &notifier).await;
            if let SubmitOutcome::Succeeded(RemoteReply::SignedIn(session)) = &outcome {
                auth.set_session(session.clone());
            }
            outcome
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        signin_action.dispatch(());
    };

    view! {
        <AuthCard title="Welcome Back" subtitle="Sign in to continue using MediSense">
            <form class="space-y-4" novalidate on:submit=on_submit>
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
                    autocomplete="current-password"
                >
                    <PasswordToggle shown=show_password />
                </FlowField>

                <div class="flex justify-end">
                    <A
                        href=paths::FORGOT_PASSWORD
                        {..}
                        class="text-sm text-blue-600 hover:underline"
                    >
                        "Forgot password?"
                    </A>
                </div>

                <Button button_type="submit" disabled=submitting>
                    {move || if submitting.get() { "Signing in..." } else { "Sign In" }}
                </Button>
                {move || {
                    submitting
                        .get()
                        .then_some(view! { <div class="flex justify-center"><Spinner /></div> })
                }}
            </form>

            <p class="mt-6 text-center text-sm text-gray-600">
                "Don’t have an account? "
                <A href=paths::SIGN_UP {..} class="font-medium text-blue-600 hover:underline">
                    "Sign up"
                </A>
            </p>
        </AuthCard>
    }
}
