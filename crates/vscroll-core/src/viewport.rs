#![forbid(unsafe_code)]

//! Viewport measurement seam.
//!
//! The adapter never measures anything itself; it asks an implementation of
//! [`Viewport`] for per-handle geometry and for the visible scroll bounds.
//! All measurements are in pixel space (`f64`), matching the host's layout
//! engine. Edge clipping is requested through the effect channel, not through
//! this trait, so the measurement surface stays read-only.

/// Read-only geometry source keyed by render handles.
///
/// `H` is the opaque render handle stored on bound wrappers. Implementations
/// typically wrap the host's layout tree; tests use flat synthetic layouts.
pub trait Viewport<H> {
    /// Pixel position of the buffer's first rendered row.
    fn top_data_pos(&self) -> f64;

    /// Upper bound of the currently visible area.
    fn top_visible_pos(&self) -> f64;

    /// Lower bound of the currently visible area.
    fn bottom_visible_pos(&self) -> f64;

    /// Vertical offset of a rendered wrapper.
    ///
    /// Wrappers sharing an offset form one visual row and are coalesced by
    /// the visibility scan.
    fn offset_top(&self, handle: &H) -> f64;

    /// Outer height of a rendered wrapper, margins included.
    fn outer_height(&self, handle: &H) -> f64;
}
