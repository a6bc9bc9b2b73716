//! Top-right stack of transient notifications, newest last.

use super::alert::{Alert, AlertKind};
use crate::features::notifications::{Notification, NotificationKind, use_notifier};
use leptos::prelude::*;

impl From<NotificationKind> for AlertKind {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Success => AlertKind::Success,
            NotificationKind::Error => AlertKind::Error,
        }
    }
}

/// Renders every queued notification until it expires or is dismissed.
#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = use_notifier();
    let notifications = notifier.notifications();

    view! {
        <div class="fixed right-4 top-4 z-50 flex w-80 flex-col gap-2" aria-live="polite">
            <For
                each=move || notifications.get()
                key=|notification| notification.id
                children=move |notification: Notification| {
                    let id = notification.id;
                    view! {
                        <div class="relative shadow-lg">
                            <Alert
                                kind=AlertKind::from(notification.kind)
                                message=notification.message
                            />
                            <button
                                type="button"
                                class="absolute right-2 top-2 text-sm text-gray-500 hover:text-gray-800"
                                aria-label="Dismiss"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
