#![forbid(unsafe_code)]

//! Outbound requests from the adapter to the host runtime.
//!
//! The adapter is synchronous and never awaits its collaborators. Anything
//! asynchronous or host-owned (window re-adjustment, reload, edge clipping)
//! is queued as an [`Effect`] and drained by the host, which keeps the
//! control-surface mutations and their follow-up work strictly ordered: all
//! reconciler mutations of one batch land before the single trailing
//! [`Effect::Adjust`].

/// Which visible-edge property changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEdge {
    /// Topmost visible row.
    Top,
    /// Bottommost visible row.
    Bottom,
}

/// A fire-and-forget request toward the host runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Run a window re-adjustment: apply pending wrapper tags, recycle or
    /// evict, and possibly kick off fetch-more.
    Adjust,
    /// Discard the window and rebuild, optionally from a new start index.
    Reload {
        /// Logical index to restart from; `None` keeps the configured start.
        start_index: Option<i64>,
    },
    /// Clip now-offscreen rows at the top viewport edge.
    ClipTop,
    /// Clip now-offscreen rows at the bottom viewport edge.
    ClipBottom,
    /// The `is_loading` flag changed; mirror it onto bound host state.
    LoadingChanged(bool),
    /// The `disabled` flag changed; mirror it onto bound host state.
    DisabledChanged(bool),
    /// A visible-edge property was re-assigned by the visibility scan.
    VisibilityChanged(VisibilityEdge),
}
