//! Prelude module - common imports for cellshade users
//!
//! ```rust
//! use cellshade::prelude::*;
//! ```

pub use crate::{
    Action,
    CommandEvent,
    CompletionGuard,
    CompletionProbe,
    ExecutorError,
    LogNotifier,
    Notifier,
    Palette,
    Ribbon,
};

pub use cellshade_core::{CellAddress, Color, FillState, Region, Selection};
pub use cellshade_host::{FillOp, Host, HostError, SelectionHandle};
