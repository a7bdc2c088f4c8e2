//! Batched mutation executor.
//!
//! Translates "fill the selection with color C" or "clear the selection's
//! fill" into the minimum number of round trips against the host: the whole
//! multi-region selection handle takes one staged mutation plus one flush.
//! The selection is fetched fresh on every call and never cached.

use cellshade_core::Color;
use cellshade_host::{FillOp, Host, HostError};
use thiserror::Error;

/// Errors surfaced by the executor.
///
/// `Apply` covers the read and mutation-staging steps, `Flush` the batched
/// round trip. Both stop at the handler boundary; nothing propagates to the
/// host.
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// Reading the selection or staging the mutation failed
    #[error("Apply failed: {0}")]
    Apply(#[source] HostError),

    /// Synchronizing the staged batch with the host failed
    #[error("Flush failed: {0}")]
    Flush(#[source] HostError),

    /// Both the direct clear and the pattern-based fallback failed
    #[error("Clear failed: {primary} (pattern fallback also failed: {fallback})")]
    ClearFailed {
        primary: Box<ExecutorError>,
        fallback: Box<ExecutorError>,
    },
}

/// Fill every cell of the current selection with `color`.
///
/// One staged mutation against the whole selection handle, one flush. No
/// retry: any error propagates to the caller.
pub async fn apply_fill(host: &dyn Host, color: Color) -> Result<(), ExecutorError> {
    let handle = host.current_selection().map_err(ExecutorError::Apply)?;
    tracing::debug!(selection = %handle.address(), %color, "applying fill");

    host.queue(&handle, FillOp::SetColor(color))
        .map_err(ExecutorError::Apply)?;
    host.flush().await.map_err(ExecutorError::Flush)
}

/// Clear the fill of every cell of the current selection.
///
/// The direct clear operation runs first. If the host rejects it — at the
/// staging step or at flush — exactly one fallback runs as a fresh
/// operation: re-fetch the selection and set the fill pattern to the
/// explicit "none" pattern. If the fallback also fails, both errors are
/// returned and no further retry is attempted.
pub async fn clear_fill(host: &dyn Host) -> Result<(), ExecutorError> {
    let primary = match clear_direct(host).await {
        Ok(()) => return Ok(()),
        Err(e) => e,
    };

    tracing::warn!(error = %primary, "direct clear failed, trying pattern fallback");

    match clear_via_pattern(host).await {
        Ok(()) => Ok(()),
        Err(fallback) => Err(ExecutorError::ClearFailed {
            primary: Box::new(primary),
            fallback: Box::new(fallback),
        }),
    }
}

async fn clear_direct(host: &dyn Host) -> Result<(), ExecutorError> {
    let handle = host.current_selection().map_err(ExecutorError::Apply)?;
    tracing::debug!(selection = %handle.address(), "clearing fill");

    host.queue(&handle, FillOp::Clear)
        .map_err(ExecutorError::Apply)?;
    host.flush().await.map_err(ExecutorError::Flush)
}

async fn clear_via_pattern(host: &dyn Host) -> Result<(), ExecutorError> {
    let handle = host.current_selection().map_err(ExecutorError::Apply)?;
    tracing::debug!(selection = %handle.address(), "clearing fill via none pattern");

    host.queue(&handle, FillOp::PatternNone)
        .map_err(ExecutorError::Apply)?;
    host.flush().await.map_err(ExecutorError::Flush)
}
