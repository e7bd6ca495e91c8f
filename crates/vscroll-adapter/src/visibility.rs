#![forbid(unsafe_code)]

//! Visible-edge tracking.
//!
//! One forward pass over the buffer decides which buffered row is the first
//! to cross the viewport's visible-top bound and which is the first to cross
//! (or end at) the visible-bottom bound. Wrappers sharing a vertical offset
//! form one row and are coalesced: only the row's first wrapper is tested,
//! and the row's height is accumulated once.
//!
//! The results are cached view state on the adapter, written here and only
//! here. Reads never recompute; between re-adjustments the cached values may
//! legitimately go stale.

use vscroll_core::effect::{Effect, VisibilityEdge};
use vscroll_core::viewport::Viewport;
use vscroll_core::wrapper::Wrapper;

use crate::adapter::Adapter;

/// Snapshot of one visible-edge row, captured at scan time.
#[derive(Debug, Clone)]
pub struct VisibleRow<T, H, C> {
    item: T,
    handle: Option<H>,
    context: Option<C>,
}

impl<T, H, C> VisibleRow<T, H, C> {
    fn capture(wrapper: &Wrapper<T, H, C>) -> Self
    where
        T: Clone,
        H: Clone,
        C: Clone,
    {
        Self {
            item: wrapper.item().clone(),
            handle: wrapper.handle().cloned(),
            context: wrapper.context().cloned(),
        }
    }

    /// The item occupying this edge row.
    #[must_use]
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Render handle of the edge row, if it was bound at scan time.
    #[must_use]
    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    /// Context of the edge row, if it was bound at scan time.
    #[must_use]
    pub fn context(&self) -> Option<&C> {
        self.context.as_ref()
    }
}

impl<T, H, C> Adapter<T, H, C> {
    /// Recompute the top/bottom visible rows from live geometry.
    ///
    /// Scans the buffer front to back and stops as soon as both edges are
    /// found, so the cost is bounded by the distance from the buffer start
    /// to the bottom visible row, not the window length. Wrappers without a
    /// bound handle have no geometry yet and are skipped.
    // Offsets are compared exactly: wrappers of one row share the same
    // layout-computed offset bit for bit.
    #[allow(clippy::float_cmp)]
    pub fn calculate_properties<V>(&mut self, viewport: &V)
    where
        V: Viewport<H>,
        T: Clone,
        H: Clone,
        C: Clone,
    {
        #[cfg(feature = "tracing")]
        let _span =
            tracing::trace_span!("calculate_properties", len = self.buffer().len()).entered();

        let len = self.buffer().len();
        let mut row_top: Option<f64> = None;
        let mut top_height = 0.0_f64;
        let mut top_done = false;
        let mut bottom_done = false;

        for i in 0..len {
            let mut new_top = None;
            let mut new_bottom = None;
            {
                let Some(wrapper) = self.buffer().get(i) else {
                    break;
                };
                let Some(handle) = wrapper.handle() else {
                    continue;
                };
                let item_top = viewport.offset_top(handle);

                if row_top != Some(item_top) {
                    // New row: test the boundary crossings against the row's
                    // bottom edge.
                    let item_height = viewport.outer_height(handle);
                    let edge = viewport.top_data_pos() + top_height + item_height;

                    if !top_done && edge > viewport.top_visible_pos() {
                        top_done = true;
                        new_top = Some(VisibleRow::capture(wrapper));
                    }

                    if !bottom_done
                        && (edge >= viewport.bottom_visible_pos()
                            || (i == len - 1 && self.buffer().eof()))
                    {
                        bottom_done = true;
                        new_bottom = Some(VisibleRow::capture(wrapper));
                    }

                    top_height += item_height;
                }
                row_top = Some(item_top);
            }

            if let Some(row) = new_top {
                self.set_visibility(VisibilityEdge::Top, row);
            }
            if let Some(row) = new_bottom {
                self.set_visibility(VisibilityEdge::Bottom, row);
            }
            if top_done && bottom_done {
                break;
            }
        }
    }

    /// Assign one visible-edge property: cache the row snapshot and notify
    /// the host through the effect channel.
    fn set_visibility(&mut self, edge: VisibilityEdge, row: VisibleRow<T, H, C>) {
        #[cfg(feature = "tracing")]
        tracing::trace!(?edge, "visibility edge re-assigned");
        match edge {
            VisibilityEdge::Top => self.top = Some(row),
            VisibilityEdge::Bottom => self.bottom = Some(row),
        }
        self.push_effect(Effect::VisibilityChanged(edge));
    }

    /// Item of the topmost visible row, from the last scan.
    #[must_use]
    pub fn top_visible(&self) -> Option<&T> {
        self.top.as_ref().map(VisibleRow::item)
    }

    /// Render handle of the topmost visible row, from the last scan.
    #[must_use]
    pub fn top_visible_handle(&self) -> Option<&H> {
        self.top.as_ref().and_then(VisibleRow::handle)
    }

    /// Context of the topmost visible row, from the last scan.
    #[must_use]
    pub fn top_visible_context(&self) -> Option<&C> {
        self.top.as_ref().and_then(VisibleRow::context)
    }

    /// Item of the bottommost visible row, from the last scan.
    #[must_use]
    pub fn bottom_visible(&self) -> Option<&T> {
        self.bottom.as_ref().map(VisibleRow::item)
    }

    /// Render handle of the bottommost visible row, from the last scan.
    #[must_use]
    pub fn bottom_visible_handle(&self) -> Option<&H> {
        self.bottom.as_ref().and_then(VisibleRow::handle)
    }

    /// Context of the bottommost visible row, from the last scan.
    #[must_use]
    pub fn bottom_visible_context(&self) -> Option<&C> {
        self.bottom.as_ref().and_then(VisibleRow::context)
    }
}
