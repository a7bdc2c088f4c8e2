//! # cellshade
//!
//! Ribbon fill commands for a spreadsheet add-in: fill the current selection
//! with a preset color, or clear its fill.
//!
//! The host fires a command event; the [`Ribbon`] dispatcher resolves the
//! action and runs the batched mutation executor against the remote object
//! model behind the [`cellshade_host::Host`] seam. Every handler signals
//! completion back to the host exactly once, on every exit path — the host
//! never observes a rejected command.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use cellshade::prelude::*;
//! use cellshade_host::MemoryHost;
//!
//! # async fn example() {
//! let host = Arc::new(MemoryHost::new());
//! host.set_selection(Selection::parse("A1:B2").unwrap());
//!
//! let ribbon = Ribbon::new(host.clone());
//! let (event, probe) = CommandEvent::new();
//! ribbon.dispatch(Action::FillYellow, event).await;
//!
//! assert!(probe.completed());
//! # }
//! ```

pub mod action;
pub mod event;
pub mod executor;
pub mod notify;
pub mod palette;
pub mod prelude;
pub mod ribbon;

pub use action::{Action, UnknownAction};
pub use event::{CommandEvent, CompletionGuard, CompletionProbe};
pub use executor::ExecutorError;
pub use notify::{LogNotifier, Notifier};
pub use palette::Palette;
pub use ribbon::Ribbon;
