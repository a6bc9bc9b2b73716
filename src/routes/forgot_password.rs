use super::{
    auth_form::{FlowField, is_submitting},
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

/// Renders the reset-link request form. The emailed link always points at the
/// configured reset redirect.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let notifier = use_notifier();
    let config = AppConfig::load();
    let backend = SupabaseClient::from_config(&config);
    let flow = RwSignal::new(
        AuthFlow::new(Screen::ForgotPassword).with_reset_redirect(config.reset_redirect_url),
    );
    let submitting = is_submitting(flow);

    let reset_action = Action::new_local(move |_: &()| {
        let backend = backend.clone();
        async move { flow::submit(&flow, &backend, &notifier).await }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        reset_action.dispatch(());
    };

    view! {
        <AuthCard
            title="Forgot Password"
            subtitle="Enter your email and we’ll send you a reset link"
        >
            <form class="space-y-5" novalidate on:submit=on_submit>
                <FlowField
                    flow=flow
                    field=Field::Email
                    input_type="email"
                    label="Email address"
                    placeholder="you@example.com"
                    autocomplete="email"
                />

                <Button button_type="submit" disabled=submitting>
                    {move || if submitting.get() { "Sending..." } else { "Send Reset Link" }}
                </Button>
                {move || {
                    submitting
                        .get()
                        .then_some(view! { <div class="flex justify-center"><Spinner /></div> })
                }}

                <p class="mt-4 text-center text-sm text-gray-600">
                    "Remember your password? "
                    <A href=paths::SIGN_IN {..} class="font-medium text-blue-600 hover:underline">
                        "Sign in"
                    </A>
                </p>
            </form>
        </AuthCard>
    }
}
