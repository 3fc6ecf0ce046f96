//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::ClientConfig;
use crate::models::Task;
use crate::store::AppStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "notification notification-success",
            NotificationKind::Error => "notification notification-error",
        }
    }
}

/// The single transient message slot
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Sequence number, so an old timer never clears a newer message
    pub seq: u32,
    pub kind: NotificationKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Fetched data and view state
    pub store: AppStore,
    config: StoredValue<ClientConfig>,
    next_seq: StoredValue<u32>,
    /// Current notification - read
    pub notification: ReadSignal<Option<Notification>>,
    /// Current notification - write
    set_notification: WriteSignal<Option<Notification>>,
    /// Raw text of the search box (the store keeps the lowercase form) - read
    pub search_input: ReadSignal<String>,
    /// Raw text of the search box - write
    set_search_input: WriteSignal<String>,
    /// Task open in the edit modal (None = closed) - read
    pub editing: ReadSignal<Option<Task>>,
    /// Task open in the edit modal (None = closed) - write
    set_editing: WriteSignal<Option<Task>>,
}

impl AppContext {
    pub fn new(store: AppStore, config: ClientConfig) -> Self {
        let (notification, set_notification) = signal(None);
        let (editing, set_editing) = signal(None);
        let (search_input, set_search_input) = signal(String::new());
        Self {
            store,
            config: StoredValue::new(config),
            next_seq: StoredValue::new(0),
            notification,
            set_notification,
            search_input,
            set_search_input,
            editing,
            set_editing,
        }
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    /// Replace the current notification and schedule its expiry
    pub fn notify(&self, kind: NotificationKind, message: impl Into<String>) {
        let seq = self.next_seq.get_value();
        self.next_seq.set_value(seq.wrapping_add(1));
        self.set_notification.set(Some(Notification { seq, kind, message: message.into() }));

        let timeout_ms = self.config.with_value(|c| c.notification_timeout_ms);
        let ctx = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(timeout_ms).await;
            ctx.dismiss_if(seq);
        });
    }

    pub fn dismiss_notification(&self) {
        self.set_notification.set(None);
    }

    fn dismiss_if(&self, seq: u32) {
        if expires(self.notification.get_untracked().as_ref(), seq) {
            self.set_notification.set(None);
        }
    }

    pub fn set_search_input(&self, text: String) {
        self.set_search_input.set(text);
    }

    /// Closed -> Open, pre-filled from the cached task
    pub fn open_editor(&self, task: Task) {
        self.set_editing.set(Some(task));
    }

    /// Open -> Closed
    pub fn close_editor(&self) {
        self.set_editing.set(None);
    }
}

/// A timer scheduled for `seq` only clears that same notification
fn expires(current: Option<&Notification>, seq: u32) -> bool {
    current.is_some_and(|n| n.seq == seq)
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_notification(seq: u32) -> Notification {
        Notification {
            seq,
            kind: NotificationKind::Success,
            message: "Task created successfully!".to_string(),
        }
    }

    #[test]
    fn test_newer_notification_survives_old_timer() {
        let current = make_notification(4);
        assert!(!expires(Some(&current), 3));
    }

    #[test]
    fn test_matching_notification_expires() {
        let current = make_notification(4);
        assert!(expires(Some(&current), 4));
    }

    #[test]
    fn test_dismissed_notification_stays_dismissed() {
        assert!(!expires(None, 0));
    }
}
