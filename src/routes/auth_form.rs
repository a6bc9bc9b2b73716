//! Form plumbing shared by the account screens: binds inputs to the screen's
//! [`AuthFlow`] and exposes its submitting state to the view.

use crate::features::auth::{
    flow::{AuthFlow, FlowCell},
    validation::Field,
};
use leptos::prelude::*;

/// Once the screen unmounts the signal is disposed and the flow is gone.
impl FlowCell for RwSignal<AuthFlow> {
    fn with_flow<R>(&self, f: impl FnOnce(&mut AuthFlow) -> R) -> Option<R> {
        self.try_update(f)
    }
}

pub fn is_submitting(flow: RwSignal<AuthFlow>) -> Signal<bool> {
    Signal::derive(move || flow.with(AuthFlow::is_submitting))
}

/// Input bound to one draft field. The error shows once the field is touched
/// or a submit was attempted.
#[component]
pub fn FlowField(
    flow: RwSignal<AuthFlow>,
    field: Field,
    #[prop(into)] input_type: Signal<&'static str>,
    placeholder: &'static str,
    #[prop(optional)] label: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let value = move || flow.with(|flow| flow.draft().value(field).to_string());
    let error = move || flow.with(|flow| flow.visible_error(field));

    view! {
        <div>
            {label.map(|label| {
                view! {
                    <label class="mb-1 block text-sm font-medium text-gray-700" for=field.id()>
                        {label}
                    </label>
                }
            })}
            <div class="relative">
                <input
                    id=field.id()
                    name=field.id()
                    type=move || input_type.get()
                    placeholder=placeholder
                    autocomplete=autocomplete.unwrap_or("off")
                    class="w-full rounded-lg border border-gray-300 px-4 py-2 focus:outline-none focus:ring-2 focus:ring-blue-500"
                    prop:value=value
                    on:input=move |event| {
                        flow.update(|flow| flow.set_field(field, event_target_value(&event)));
                    }
                    on:blur=move |_| flow.update(|flow| flow.touch(field))
                />
                {children.map(|children| children())}
            </div>
            {move || {
                error().map(|message| view! { <p class="mt-1 text-sm text-red-500">{message}</p> })
            }}
        </div>
    }
}

/// Eye button that flips password inputs between hidden and visible.
#[component]
pub fn PasswordToggle(shown: RwSignal<bool>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="absolute right-2 top-2 text-gray-500"
            aria-label=move || if shown.get() { "Hide password" } else { "Show password" }
            on:click=move |_| shown.update(|shown| *shown = !*shown)
        >
            {move || if shown.get() { "🙈" } else { "👁" }}
        </button>
    }
}

/// Input type for password fields given the toggle state.
pub fn password_input_type(shown: RwSignal<bool>) -> Signal<&'static str> {
    Signal::derive(move || if shown.get() { "text" } else { "password" })
}
