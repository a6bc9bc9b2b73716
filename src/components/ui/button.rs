use leptos::prelude::*;

#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");

    view! {
        <button
            type=button_type
            class="w-full rounded-lg bg-blue-600 py-2 font-semibold text-white transition duration-300 hover:bg-blue-700 focus:outline-none focus:ring-4 focus:ring-blue-300"
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-50=move || disabled.get()
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}
