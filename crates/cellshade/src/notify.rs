//! Notification side channel.
//!
//! In the deployed add-in this is a diagnostic surface, not a modal dialog:
//! a header plus a message. It is pluggable so hosts with a real notification
//! UI can route it there.

/// Sink for user-facing diagnostic notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, header: &str, message: &str);
}

/// Default notifier: one structured warn line per notification.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, header: &str, message: &str) {
        tracing::warn!(header, message, "notification");
    }
}
