//! Reactive notification store shared through Leptos context. Expiry is driven
//! by one timer per notification, so entries disappear independently.

use super::queue::{Notification, NotificationId, NotificationKind, NotificationQueue, Notify};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<NotificationQueue>,
}

impl Notifier {
    fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::new()),
        }
    }

    /// Snapshot of the visible notifications in insertion order.
    pub fn notifications(&self) -> Signal<Vec<Notification>> {
        let queue = self.queue;
        Signal::derive(move || queue.with(|queue| queue.items().to_vec()))
    }

    pub fn dismiss(&self, id: NotificationId) {
        self.queue.update(|queue| {
            queue.remove(id);
        });
    }
}

impl Notify for Notifier {
    fn notify(&self, kind: NotificationKind, message: String) {
        let Some((id, ttl)) = self.queue.try_update(|queue| {
            let id = queue.push(kind, message);
            let ttl = queue.items().last().map(|item| item.ttl).unwrap_or_default();
            (id, ttl)
        }) else {
            return;
        };

        let queue = self.queue;
        let millis = u32::try_from(ttl.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            // The signal is gone once the app is torn down.
            let _ = queue.try_update(|queue| queue.remove(id));
        })
        .forget();
    }
}

/// Creates the app-wide notification queue.
#[component]
pub fn NotificationProvider(children: Children) -> impl IntoView {
    provide_context(Notifier::new());

    view! { {children()} }
}

/// Returns the app notifier or a detached one when rendered outside the provider.
pub fn use_notifier() -> Notifier {
    use_context::<Notifier>().unwrap_or_else(Notifier::new)
}
