use std::time::Duration;

/// How long a notification stays visible unless dismissed.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(3_000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    pub ttl: Duration,
}

/// Fire-and-forget sink for user feedback.
pub trait Notify {
    fn notify(&self, kind: NotificationKind, message: String);
}

/// Insertion-ordered list of visible notifications.
#[derive(Clone, Debug, Default)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification with the default display duration.
    pub fn push(&mut self, kind: NotificationKind, message: String) -> NotificationId {
        self.push_with_ttl(kind, message, DISPLAY_DURATION)
    }

    pub fn push_with_ttl(
        &mut self,
        kind: NotificationKind,
        message: String,
        ttl: Duration,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.items.push(Notification {
            id,
            kind,
            message,
            ttl,
        });
        id
    }

    /// Removes one notification, leaving the order of the rest intact. Used for
    /// both expiry and early dismissal; unknown ids are ignored.
    pub fn remove(&mut self, id: NotificationId) -> Option<Notification> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

#[cfg(test)]
impl Notify for std::cell::RefCell<NotificationQueue> {
    fn notify(&self, kind: NotificationKind, message: String) {
        self.borrow_mut().push(kind, message);
    }
}
