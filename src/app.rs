use crate::components::Toaster;
use crate::features::{auth::state::AuthProvider, notifications::NotificationProvider};
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <NotificationProvider>
            <AuthProvider>
                <Toaster />
                <Router>
                    <AppRoutes />
                </Router>
            </AuthProvider>
        </NotificationProvider>
    }
}
