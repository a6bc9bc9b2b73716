use leptos::prelude::*;

/// Centered card used by every account screen.
#[component]
pub fn AuthCard(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-blue-50 to-blue-100 px-4">
            <div class="w-full max-w-md rounded-2xl bg-white p-8 shadow-lg">
                <div class="mb-6 text-center">
                    <h1 class="text-2xl font-bold text-gray-800">{title}</h1>
                    <p class="mt-1 text-sm text-gray-500">{subtitle}</p>
                </div>
                {children()}
            </div>
        </div>
    }
}
