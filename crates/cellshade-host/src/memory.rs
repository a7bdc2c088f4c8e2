//! In-process reference host with batch semantics and fault injection.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use cellshade_core::{CellAddress, FillState, Selection};

use crate::error::{HostError, HostResult};
use crate::{FillOp, Host, SelectionHandle};

#[derive(Default)]
struct MemoryHostState {
    grid: HashMap<CellAddress, FillState>,
    selection: Option<Selection>,
    queue: Vec<(Selection, FillOp)>,
    reject_clear: bool,
    fail_flushes: u32,
    flush_count: u64,
}

/// An in-memory spreadsheet host.
///
/// Mutations staged via [`Host::queue`] are held in an internal queue and
/// applied to the grid atomically when [`Host::flush`] is called, mirroring
/// how a remote host batches property writes into one round trip. Failure
/// modes observed against live hosts can be injected: rejecting the direct
/// clear operation, and failing the next N flushes (which drops the staged
/// queue without applying it).
pub struct MemoryHost {
    state: Mutex<MemoryHostState>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MemoryHostState::default()),
        }
    }

    /// Set the current selection, as the user would by clicking and dragging.
    pub fn set_selection(&self, selection: Selection) {
        self.state.lock().unwrap().selection = Some(selection);
    }

    /// Fill state of a single cell (default: no fill).
    pub fn fill_of(&self, addr: CellAddress) -> FillState {
        self.state
            .lock()
            .unwrap()
            .grid
            .get(&addr)
            .copied()
            .unwrap_or_default()
    }

    /// All cells that currently have a solid fill, in unspecified order.
    pub fn filled_cells(&self) -> Vec<(CellAddress, FillState)> {
        self.state
            .lock()
            .unwrap()
            .grid
            .iter()
            .filter(|(_, fill)| !fill.is_none())
            .map(|(addr, fill)| (*addr, *fill))
            .collect()
    }

    /// Make the host reject [`FillOp::Clear`] at queue time, as some hosts do
    /// for multi-area selection handles.
    pub fn reject_clear(&self) {
        self.state.lock().unwrap().reject_clear = true;
    }

    /// Make the next `n` flushes fail, dropping whatever was staged.
    pub fn fail_next_flushes(&self, n: u32) {
        self.state.lock().unwrap().fail_flushes = n;
    }

    /// Number of flush round trips performed so far (failed ones included).
    pub fn flush_count(&self) -> u64 {
        self.state.lock().unwrap().flush_count
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Host for MemoryHost {
    fn current_selection(&self) -> HostResult<SelectionHandle> {
        let state = self.state.lock().unwrap();
        match &state.selection {
            Some(sel) => Ok(SelectionHandle::new(sel.clone())),
            None => Err(HostError::NoSelection),
        }
    }

    fn queue(&self, handle: &SelectionHandle, op: FillOp) -> HostResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.reject_clear && op == FillOp::Clear {
            return Err(HostError::rejected(
                op,
                "clear is not supported on this selection handle",
            ));
        }
        tracing::debug!(selection = %handle.address(), %op, "staged mutation");
        state.queue.push((handle.selection().clone(), op));
        Ok(())
    }

    async fn flush(&self) -> HostResult<()> {
        let mut state = self.state.lock().unwrap();
        state.flush_count += 1;
        let staged = std::mem::take(&mut state.queue);

        if state.fail_flushes > 0 {
            state.fail_flushes -= 1;
            tracing::debug!(dropped = staged.len(), "flush failed, queue dropped");
            return Err(HostError::flush("host did not acknowledge the batch"));
        }

        for (selection, op) in &staged {
            for addr in selection.cells() {
                let fill = match op {
                    FillOp::SetColor(c) => FillState::Solid(*c),
                    FillOp::Clear | FillOp::PatternNone => FillState::None,
                };
                if fill.is_none() {
                    state.grid.remove(&addr);
                } else {
                    state.grid.insert(addr, fill);
                }
            }
        }

        tracing::debug!(applied = staged.len(), "flushed batch");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellshade_core::{Color, Region};
    use pretty_assertions::assert_eq;

    fn select(host: &MemoryHost, s: &str) {
        host.set_selection(Selection::parse(s).unwrap());
    }

    #[tokio::test]
    async fn test_queue_then_flush_applies_batch() {
        let host = MemoryHost::new();
        select(&host, "A1:B2");

        let handle = host.current_selection().unwrap();
        host.queue(&handle, FillOp::SetColor(Color::YELLOW)).unwrap();

        // Nothing applied until the flush round trip
        assert_eq!(host.fill_of(CellAddress::new(0, 0)), FillState::None);

        host.flush().await.unwrap();
        for addr in Region::parse("A1:B2").unwrap().cells() {
            assert_eq!(host.fill_of(addr), FillState::Solid(Color::YELLOW));
        }
        assert_eq!(host.flush_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_flush_drops_queue() {
        let host = MemoryHost::new();
        select(&host, "A1");
        host.fail_next_flushes(1);

        let handle = host.current_selection().unwrap();
        host.queue(&handle, FillOp::SetColor(Color::ORANGE)).unwrap();
        assert!(host.flush().await.is_err());

        // The staged mutation is gone; a later successful flush is a no-op
        host.flush().await.unwrap();
        assert_eq!(host.fill_of(CellAddress::new(0, 0)), FillState::None);
    }

    #[tokio::test]
    async fn test_reject_clear_is_eager() {
        let host = MemoryHost::new();
        select(&host, "A1:A2,C1:C2");
        host.reject_clear();

        let handle = host.current_selection().unwrap();
        let err = host.queue(&handle, FillOp::Clear).unwrap_err();
        assert!(matches!(err, HostError::Rejected { .. }));

        // The pattern-based technique still goes through
        host.queue(&handle, FillOp::PatternNone).unwrap();
        host.flush().await.unwrap();
    }

    #[test]
    fn test_no_selection() {
        let host = MemoryHost::new();
        assert!(matches!(
            host.current_selection(),
            Err(HostError::NoSelection)
        ));
    }
}
