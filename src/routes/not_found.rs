//! Fallback page for paths outside the route table.

use super::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center px-4 text-center">
            <div class="relative">
                <h1 class="select-none text-9xl font-black text-gray-100">"404"</h1>
                <p class="absolute left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 whitespace-nowrap text-2xl font-bold text-gray-900">
                    "Page not found"
                </p>
            </div>

            <div class="mt-4 space-y-6">
                <p class="mx-auto max-w-sm text-gray-500">
                    "The page you requested does not exist."
                </p>
                <div class="flex flex-col items-center justify-center gap-4 sm:flex-row">
                    <A
                        href=paths::LANDING
                        {..}
                        class="inline-flex items-center rounded-lg bg-blue-600 px-5 py-2.5 text-sm font-medium text-white hover:bg-blue-700"
                    >
                        "Go Home"
                    </A>
                    <button
                        type="button"
                        on:click=move |_| go_back()
                        class="inline-flex items-center rounded-lg border border-gray-200 bg-white px-5 py-2.5 text-sm font-medium text-gray-900 hover:bg-gray-100 hover:text-blue-600"
                    >
                        "Go Back"
                    </button>
                </div>
            </div>
        </div>
    }
}

fn go_back() {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        return;
    };
    if history.back().is_err() {
        log::debug!("history navigation unavailable");
    }
}
