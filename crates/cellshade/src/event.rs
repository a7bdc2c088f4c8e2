//! Command events and the exactly-once completion contract.
//!
//! Failing to signal completion is a protocol violation against the host:
//! the host considers the command hung. [`CompletionGuard`] makes the signal
//! structural — it fires when the guard drops, on every exit path of the
//! handler, so no error branch can forget it.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// A transient handle representing one user-triggered command.
///
/// Carries no payload; its only obligation is to be acknowledged exactly
/// once. `complete` consumes the event, so a second signal is impossible by
/// construction.
#[derive(Debug)]
pub struct CommandEvent {
    signals: Arc<AtomicU32>,
}

impl CommandEvent {
    /// Create an event paired with the probe the host side holds.
    pub fn new() -> (CommandEvent, CompletionProbe) {
        let signals = Arc::new(AtomicU32::new(0));
        (
            CommandEvent {
                signals: signals.clone(),
            },
            CompletionProbe { signals },
        )
    }

    /// Signal completion back to the host.
    pub fn complete(self) {
        self.signals.fetch_add(1, Ordering::SeqCst);
        tracing::debug!("command event completed");
    }
}

/// Host-side view of a [`CommandEvent`]'s completion signal.
#[derive(Debug, Clone)]
pub struct CompletionProbe {
    signals: Arc<AtomicU32>,
}

impl CompletionProbe {
    /// Whether completion has been signaled.
    pub fn completed(&self) -> bool {
        self.count() > 0
    }

    /// Number of completion signals observed. The contract is exactly one.
    pub fn count(&self) -> u32 {
        self.signals.load(Ordering::SeqCst)
    }
}

/// RAII wrapper that signals completion when dropped.
///
/// Take ownership of the event at the top of a handler; whatever path the
/// handler exits through, the drop fires the signal.
#[derive(Debug)]
pub struct CompletionGuard {
    event: Option<CommandEvent>,
}

impl CompletionGuard {
    pub fn new(event: CommandEvent) -> Self {
        Self { event: Some(event) }
    }
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        if let Some(event) = self.event.take() {
            event.complete();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_complete_signals_once() {
        let (event, probe) = CommandEvent::new();
        assert!(!probe.completed());
        event.complete();
        assert_eq!(probe.count(), 1);
    }

    #[test]
    fn test_guard_signals_on_drop() {
        let (event, probe) = CommandEvent::new();
        {
            let _guard = CompletionGuard::new(event);
            assert!(!probe.completed());
        }
        assert_eq!(probe.count(), 1);
    }

    #[test]
    fn test_guard_signals_on_early_exit() {
        let (event, probe) = CommandEvent::new();
        let run = || -> Result<(), &'static str> {
            let _guard = CompletionGuard::new(event);
            Err("mutation failed")?;
            Ok(())
        };
        assert!(run().is_err());
        assert_eq!(probe.count(), 1);
    }
}
