use std::collections::VecDeque;
use std::time::Duration;

/// Maximum number of toasts on screen at once.
pub const TOAST_LIMIT: usize = 1;
/// How long a toast stays up before it is dismissed automatically.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Displays a transient message to the user. Fire-and-forget.
pub trait Notifier {
    fn show(&self, notification: Notification);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Bounded list of visible toasts, newest first.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
    limit: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_limit(TOAST_LIMIT)
    }
}

impl ToastQueue {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 0,
            limit: limit.max(1),
        }
    }

    /// Adds a toast and returns its id, evicting the oldest ones past the limit.
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push_front(Toast { id, notification });
        self.toasts.truncate(self.limit);
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_respects_limit() {
        let mut queue = ToastQueue::with_limit(2);
        queue.push(Notification::success("one", ""));
        queue.push(Notification::success("two", ""));
        queue.push(Notification::success("three", ""));

        let titles: Vec<&str> = queue.iter().map(|t| t.notification.title.as_str()).collect();
        assert_eq!(titles, vec!["three", "two"]);
    }

    #[test]
    fn test_default_limit_keeps_latest_only() {
        let mut queue = ToastQueue::default();
        queue.push(Notification::success("first", ""));
        queue.push(Notification::error("second", "boom"));

        assert_eq!(queue.len(), 1);
        let toast = queue.iter().next().unwrap();
        assert_eq!(toast.notification.title, "second");
        assert_eq!(toast.notification.kind, NotificationKind::Error);
    }

    #[test]
    fn test_ids_increase() {
        let mut queue = ToastQueue::with_limit(3);
        let a = queue.push(Notification::success("a", ""));
        let b = queue.push(Notification::success("b", ""));
        queue.dismiss(a);
        let c = queue.push(Notification::success("c", ""));
        assert!(a < b && b < c);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::with_limit(3);
        let a = queue.push(Notification::success("a", ""));
        let b = queue.push(Notification::success("b", ""));

        // unknown id is a no-op
        queue.dismiss(42);
        assert_eq!(queue.len(), 2);

        queue.dismiss(a);
        let ids: Vec<u64> = queue.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![b]);

        queue.dismiss(b);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_zero_limit_still_shows_one() {
        let mut queue = ToastQueue::with_limit(0);
        queue.push(Notification::success("only", ""));
        assert_eq!(queue.len(), 1);
    }
}
