//! App-wide notification channel. Screens report outcomes through [`Notify`];
//! the toaster renders whatever is queued. The queue is created once by
//! `NotificationProvider` at app start and only changes through push, expire
//! and dismiss.

mod queue;
#[cfg(target_arch = "wasm32")]
mod store;

pub(crate) use queue::{NotificationKind, Notify};
#[cfg(test)]
pub(crate) use queue::NotificationQueue;
#[cfg(target_arch = "wasm32")]
pub(crate) use queue::Notification;
#[cfg(target_arch = "wasm32")]
pub(crate) use store::{NotificationProvider, use_notifier};
