//! Ribbon command dispatcher.

use std::sync::Arc;

use cellshade_host::Host;

use crate::action::Action;
use crate::event::{CommandEvent, CompletionGuard};
use crate::executor;
use crate::notify::{LogNotifier, Notifier};
use crate::palette::Palette;

/// Maps ribbon actions to handlers and enforces the completion contract.
///
/// `dispatch` never returns an error: mutation failures are logged, surfaced
/// through the [`Notifier`], and swallowed, and the event is completed on
/// every path. The host only ever observes "completed".
pub struct Ribbon {
    host: Arc<dyn Host>,
    palette: Palette,
    notifier: Arc<dyn Notifier>,
}

impl Ribbon {
    /// Create a dispatcher with the default palette and log-backed notifier.
    pub fn new(host: Arc<dyn Host>) -> Self {
        Self {
            host,
            palette: Palette::default(),
            notifier: Arc::new(LogNotifier),
        }
    }

    /// Replace the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Replace the notification channel.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Handle one command event for `action`.
    ///
    /// Completion is signaled exactly once whether the mutation succeeds,
    /// fails, or goes through the clear fallback.
    pub async fn dispatch(&self, action: Action, event: CommandEvent) {
        let _guard = CompletionGuard::new(event);

        tracing::info!(%action, "ribbon command");

        let result = match self.palette.color_for(action) {
            Some(color) => executor::apply_fill(self.host.as_ref(), color).await,
            None => executor::clear_fill(self.host.as_ref()).await,
        };

        if let Err(err) = result {
            tracing::warn!(%action, error = %err, "ribbon command failed");
            self.notifier
                .notify("Command failed", &format!("{action}: {err}"));
        }
    }

    /// Handle one command event by its manifest wire name.
    ///
    /// Unknown names are reported through the notifier; the event is still
    /// completed.
    pub async fn dispatch_named(&self, name: &str, event: CommandEvent) {
        match name.parse::<Action>() {
            Ok(action) => self.dispatch(action, event).await,
            Err(err) => {
                let _guard = CompletionGuard::new(event);
                tracing::warn!(name, "unknown ribbon command");
                self.notifier.notify("Unknown command", &err.to_string());
            }
        }
    }
}
