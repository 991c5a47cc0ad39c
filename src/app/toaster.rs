use std::time::Duration;

use leptos::prelude::*;

use crate::toast::{Notification, NotificationKind, Notifier, Toast, ToastQueue, TOAST_DURATION};

/// Page-wide toast state, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }
}

impl Toaster {
    pub fn provide() -> Self {
        let toaster = Self::default();
        provide_context(toaster);
        toaster
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    /// Toasts currently on screen, newest first.
    pub fn visible(&self) -> Vec<Toast> {
        self.queue.with(|q| q.iter().cloned().collect())
    }

    #[cfg(feature = "hydrate")]
    fn dismiss_after(&self, id: u64, delay: Duration) {
        let queue = self.queue;
        set_timeout(
            move || {
                queue.try_update(|q| q.dismiss(id));
            },
            delay,
        );
    }

    // Timers only exist in the browser.
    #[cfg(not(feature = "hydrate"))]
    fn dismiss_after(&self, _id: u64, _delay: Duration) {}
}

impl Notifier for Toaster {
    fn show(&self, notification: Notification) {
        let Some(id) = self.queue.try_update(|q| q.push(notification)) else {
            return;
        };
        self.dismiss_after(id, TOAST_DURATION);
    }
}

#[component]
pub fn ToastViewport() -> impl IntoView {
    let toaster = expect_context::<Toaster>();

    view! {
        <ol
            class="fixed bottom-0 right-0 z-[100] flex w-full flex-col gap-2 p-4 sm:max-w-sm"
            aria-live="polite"
        >
            <For
                each=move || toaster.visible()
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard toast toaster /> }
            />
        </ol>
    }
}

#[component]
fn ToastCard(toast: Toast, toaster: Toaster) -> impl IntoView {
    let Toast { id, notification } = toast;
    let border = match notification.kind {
        NotificationKind::Success => "border-primary/30",
        NotificationKind::Error => "border-red-500/50",
    };

    view! {
        <li
            role="status"
            class=format!(
                "glass-card relative flex items-start justify-between gap-4 p-4 pr-8 shadow-lg border {border}",
            )
        >
            <div class="grid gap-1">
                <div class="text-sm font-semibold">{notification.title}</div>
                <div class="text-sm text-muted-foreground">{notification.description}</div>
            </div>
            <button
                type="button"
                class="absolute right-2 top-2 text-muted-foreground hover:text-foreground"
                aria-label="Close"
                on:click=move |_| toaster.dismiss(id)
            >
                "✕"
            </button>
        </li>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_show_replaces_previous_toast() {
        let owner = Owner::new();
        owner.set();

        let toaster = Toaster::default();
        assert!(toaster.visible().is_empty());

        toaster.show(Notification::success("first", ""));
        toaster.show(Notification::error("second", "boom"));

        let visible = toaster.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].notification.title, "second");
        assert_eq!(visible[0].notification.kind, NotificationKind::Error);

        toaster.dismiss(visible[0].id);
        assert!(toaster.visible().is_empty());
    }

    #[test]
    fn test_provide_shares_one_queue() {
        let owner = Owner::new();
        owner.set();

        let provided = Toaster::provide();
        provided.show(Notification::success("hello", ""));

        let found = expect_context::<Toaster>();
        assert_eq!(found.visible(), provided.visible());
    }
}
