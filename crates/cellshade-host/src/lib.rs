//! Host object-model seam for cellshade.
//!
//! The add-in never talks to a spreadsheet host directly; it consumes the
//! [`Host`] trait, which models the small surface the ribbon commands need:
//! fetch the current selection as a handle, stage fill mutations against the
//! whole (possibly multi-region) handle, and flush all staged mutations to
//! the host in one batched round trip.
//!
//! A real binding (COM automation, a remote protocol socket, a JS interop
//! layer) would implement [`Host`] out of tree. [`MemoryHost`] is the
//! in-process reference implementation used by tests and the demo CLI; it
//! honors the same batch semantics and can inject the failure modes a live
//! host exhibits.

pub mod error;
pub mod memory;

pub use error::{HostError, HostResult};
pub use memory::MemoryHost;

use async_trait::async_trait;
use cellshade_core::{Color, Selection};

/// One staged fill mutation against a selection handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOp {
    /// Set a solid fill color on every cell of the selection
    SetColor(Color),
    /// Clear the fill via the host's direct clear operation
    Clear,
    /// Clear the fill by setting the fill pattern to the explicit "none" pattern
    PatternNone,
}

impl std::fmt::Display for FillOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FillOp::SetColor(c) => write!(f, "setColor({c})"),
            FillOp::Clear => write!(f, "clear"),
            FillOp::PatternNone => write!(f, "patternNone"),
        }
    }
}

/// An opaque handle to the selection as it existed when fetched.
///
/// The handle covers the whole multi-region selection; mutations staged
/// against it apply to every region without enumerating them.
#[derive(Debug, Clone)]
pub struct SelectionHandle {
    selection: Selection,
}

impl SelectionHandle {
    pub fn new(selection: Selection) -> Self {
        Self { selection }
    }

    /// The selection snapshot this handle covers
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// A1-style address list, for diagnostics
    pub fn address(&self) -> String {
        self.selection.to_string()
    }
}

/// The host object-model surface consumed by the ribbon commands.
///
/// Batch semantics: `queue` stages a mutation without touching the host
/// document; `flush` transmits everything staged since the last flush in one
/// round trip and waits for acknowledgment. If the flush fails, none of the
/// staged mutations are guaranteed applied and the queue is dropped — callers
/// must not assume partial application.
#[async_trait]
pub trait Host: Send + Sync {
    /// Fetch the current selection fresh from the host.
    ///
    /// Callers must not cache the returned handle across command invocations.
    fn current_selection(&self) -> HostResult<SelectionHandle>;

    /// Stage a fill mutation against the whole selection handle.
    ///
    /// Hosts may reject an op eagerly; in particular some reject
    /// [`FillOp::Clear`] on multi-area handles.
    fn queue(&self, handle: &SelectionHandle, op: FillOp) -> HostResult<()>;

    /// Transmit all staged mutations in one batched round trip.
    async fn flush(&self) -> HostResult<()>;
}
