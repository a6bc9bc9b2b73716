//! Public landing page: product overview, capabilities and workflow, with
//! entry points into the account screens.

use super::paths;
use crate::{app_lib::build_info, features::auth::state::use_auth};
use leptos::prelude::*;
use leptos_router::components::A;

const FEATURES: [(&str, &str); 3] = [
    (
        "ECG Intelligence",
        "AI analysis detects abnormalities in ECG reports quickly and accurately.",
    ),
    (
        "Patient-Friendly Summaries",
        "Transforms complex medical terminology into clear explanations.",
    ),
    (
        "Data Security",
        "Built with modern security standards to protect sensitive medical data.",
    ),
];

const WORKFLOW: [(&str, &str); 6] = [
    (
        "Upload ECG",
        "Patients or doctors upload ECG and medical data securely.",
    ),
    (
        "AI Analysis",
        "Our AI engine interprets the data and highlights key insights.",
    ),
    (
        "View Summary",
        "Receive a clear, easy-to-understand medical summary.",
    ),
    (
        "Graphs & Trends",
        "Visual representation of your health metrics over time.",
    ),
    (
        "Diet Suggestions",
        "Personalized diet recommendations based on analysis.",
    ),
    (
        "Doctor Recommendations",
        "Receive expert suggestions for next steps in care.",
    ),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = use_auth();
    let signed_in_email = move || auth.signed_in_email();

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-800">
            <nav class="sticky top-0 z-40 border-b border-gray-200 bg-white/90 backdrop-blur">
                <div class="mx-auto flex max-w-7xl items-center justify-between px-6 py-4">
                    <A href=paths::LANDING {..} class="text-2xl font-bold text-blue-600">
                        "MediSense"
                    </A>
                    <div class="flex items-center gap-6 text-sm font-medium">
                        <a href="#features" class="hover:text-blue-600">"Features"</a>
                        <a href="#workflow" class="hover:text-blue-600">"Workflow"</a>
                        {move || match signed_in_email() {
                            Some(email) => {
                                view! {
                                    <span class="text-gray-500">"Signed in as " {email}</span>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <A href=paths::SIGN_IN {..} class="hover:text-blue-600">
                                        "Sign In"
                                    </A>
                                    <A
                                        href=paths::SIGN_UP
                                        {..}
                                        class="rounded-lg bg-blue-600 px-4 py-2 text-white hover:bg-blue-700"
                                    >
                                        "Get Started"
                                    </A>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
            </nav>

            <section class="mx-auto max-w-7xl px-6 py-20">
                <h1 class="text-4xl font-bold leading-tight md:text-5xl">
                    "Intelligent Healthcare" <br />
                    <span class="text-blue-600">"Insights with AI"</span>
                </h1>
                <p class="mt-6 max-w-2xl text-lg leading-relaxed">
                    "MediSense empowers patients and clinicians by transforming ECG reports and medical data into clear, actionable insights using AI."
                </p>
                <div class="mt-8 flex flex-wrap gap-4">
                    <A
                        href=paths::SIGN_UP
                        {..}
                        class="rounded-lg bg-blue-600 px-6 py-3 font-medium text-white hover:bg-blue-700"
                    >
                        "Start Free"
                    </A>
                    <a
                        href="#features"
                        class="rounded-lg border border-blue-600 px-6 py-3 font-medium text-blue-600 hover:bg-blue-50"
                    >
                        "Explore Features"
                    </a>
                </div>
            </section>

            <section id="features" class="bg-white py-20">
                <div class="mx-auto max-w-7xl px-6">
                    <h2 class="text-center text-3xl font-bold">"Core Capabilities"</h2>
                    <p class="mt-4 text-center text-gray-600">
                        "Simplifying medical understanding while maintaining clinical accuracy."
                    </p>
                    <div class="mt-14 grid gap-8 sm:grid-cols-2 md:grid-cols-3">
                        {FEATURES
                            .iter()
                            .map(|(title, text)| {
                                view! {
                                    <div class="rounded-2xl border border-gray-200 p-8 shadow-sm">
                                        <h3 class="text-xl font-semibold text-blue-600">{*title}</h3>
                                        <p class="mt-3 leading-relaxed">{*text}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </section>

            <section id="workflow" class="py-20">
                <div class="mx-auto max-w-7xl px-6">
                    <h2 class="text-center text-3xl font-bold">"How MediSense Works"</h2>
                    <p class="mt-4 text-center text-gray-600">
                        "Step-by-step workflow for personalized healthcare insights."
                    </p>
                    <ol class="mt-14 grid gap-8 sm:grid-cols-2 md:grid-cols-3">
                        {WORKFLOW
                            .iter()
                            .enumerate()
                            .map(|(index, (title, desc))| {
                                view! {
                                    <li class="rounded-2xl bg-white p-8 shadow-sm">
                                        <span class="flex h-10 w-10 items-center justify-center rounded-full bg-blue-600 font-bold text-white">
                                            {index + 1}
                                        </span>
                                        <h3 class="mt-4 text-lg font-semibold">{*title}</h3>
                                        <p class="mt-2 text-gray-600">{*desc}</p>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ol>
                </div>
            </section>

            <section class="bg-blue-600 py-16 text-center text-white">
                <h2 class="text-3xl font-bold">"Ready to experience smarter healthcare?"</h2>
                <p class="mt-4">"Join MediSense and take control of your medical understanding."</p>
                <A
                    href=paths::SIGN_UP
                    {..}
                    class="mt-8 inline-block rounded-lg bg-white px-6 py-3 font-medium text-blue-600 hover:bg-blue-50"
                >
                    "Get Started"
                </A>
            </section>

            <footer class="border-t border-gray-200 py-8 text-center text-sm text-gray-500">
                <p>"AI-powered medical insight platform designed for clarity, accuracy, and trust."</p>
                <p class="mt-2">
                    "© MediSense · build " {build_info::git_commit_hash()}
                </p>
            </footer>
        </div>
    }
}
