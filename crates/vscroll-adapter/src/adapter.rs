#![forbid(unsafe_code)]

//! Adapter facade and batch update coordination.
//!
//! The [`Adapter`] is the programmatic control surface over the windowed
//! buffer. Mutations funnel through it, and everything the host runtime must
//! do in response (re-adjust the window, clip edges, reload) comes back out
//! as [`Effect`]s on a drainable queue rather than as direct calls, so the
//! adapter never awaits its collaborators and a batch's mutations always
//! complete before the follow-up work is requested.

use std::collections::VecDeque;

use vscroll_core::buffer::Buffer;
use vscroll_core::effect::Effect;
use vscroll_core::wrapper::Wrapper;

use crate::error::AdapterError;
use crate::reconcile::apply_update;
use crate::visibility::VisibleRow;

/// One `apply_updates` request, decided at the call site.
pub enum Updates<'a, T, H, C> {
    /// Visit every currently buffered item with a transform.
    ///
    /// The transform receives the item, its bound context, and its bound
    /// render handle, and returns the replacement list for that item:
    /// `None` means "no change", `Some(vec![])` removes the item, and any
    /// other list is reconciled around it. The visit list is frozen at call
    /// start, so a transform that inserts or removes items cannot affect
    /// which wrappers are visited.
    Transform(&'a mut dyn FnMut(&T, Option<&C>, Option<&H>) -> Option<Vec<T>>),
    /// Replace the item at one logical index with a run of items.
    ///
    /// `index` is the raw value supplied by the host binding; non-integral
    /// values are rejected with [`AdapterError::InvalidIndex`]. An integral
    /// index outside the current window is silently ignored: the window may
    /// have shifted since the caller captured the index.
    Replace {
        /// Logical index of the item to replace.
        index: f64,
        /// Replacement list.
        items: Vec<T>,
    },
}

impl<'a, T, H, C> Updates<'a, T, H, C> {
    /// Index-mode request from an already-integral index.
    #[must_use]
    pub fn replace(index: i64, items: Vec<T>) -> Self {
        Self::Replace {
            index: index as f64,
            items,
        }
    }
}

/// Control surface over a windowed buffer of rendered items.
pub struct Adapter<T, H, C> {
    buffer: Buffer<T, H, C>,
    loading: bool,
    disabled: bool,
    pub(crate) top: Option<VisibleRow<T, H, C>>,
    pub(crate) bottom: Option<VisibleRow<T, H, C>>,
    effects: VecDeque<Effect>,
}

impl<T, H, C> Default for Adapter<T, H, C> {
    fn default() -> Self {
        Self::new(Buffer::default())
    }
}

impl<T, H, C> Adapter<T, H, C> {
    /// Wrap an existing buffer.
    #[must_use]
    pub fn new(buffer: Buffer<T, H, C>) -> Self {
        Self {
            buffer,
            loading: false,
            disabled: false,
            top: None,
            bottom: None,
            effects: VecDeque::new(),
        }
    }

    /// The underlying windowed buffer.
    #[must_use]
    pub fn buffer(&self) -> &Buffer<T, H, C> {
        &self.buffer
    }

    /// Mutable access for the host runtime (binding handles, committing
    /// adjustments, maintaining feed bounds).
    pub fn buffer_mut(&mut self) -> &mut Buffer<T, H, C> {
        &mut self.buffer
    }

    /// Whether the window currently starts at the beginning of the feed.
    #[must_use]
    pub fn is_bof(&self) -> bool {
        self.buffer.bof()
    }

    /// Whether the window currently ends at the end of the feed.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.buffer.eof()
    }

    /// Whether the window holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Whether a load is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Runtime hook: record load state and mirror it to the host.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
        self.push_effect(Effect::LoadingChanged(loading));
    }

    /// Whether the adapter is disabled.
    #[must_use]
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable the adapter.
    ///
    /// Disabling is declarative: the host checks the flag when draining
    /// effects, and in-flight work is never interrupted. Re-enabling
    /// requests an immediate window re-adjustment to catch up.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.push_effect(Effect::DisabledChanged(disabled));
        if !disabled {
            self.push_effect(Effect::Adjust);
        }
    }

    /// Request a full reload of the window.
    pub fn reload(&mut self) {
        self.push_effect(Effect::Reload { start_index: None });
    }

    /// Request a full reload starting from a new logical index.
    pub fn reload_from(&mut self, start_index: i64) {
        self.push_effect(Effect::Reload {
            start_index: Some(start_index),
        });
    }

    /// Append items after the window, then request re-adjustment and edge
    /// clipping, in that order.
    pub fn append(&mut self, items: impl IntoIterator<Item = T>) {
        self.buffer.append(items);
        self.push_adjust_and_clip();
    }

    /// Prepend items before the window, then request re-adjustment and edge
    /// clipping, in that order.
    pub fn prepend(&mut self, items: impl IntoIterator<Item = T>) {
        self.buffer.prepend(items);
        self.push_adjust_and_clip();
    }

    /// Apply a batch update and request a single trailing re-adjustment.
    ///
    /// Both modes route each affected wrapper through the reconciler; see
    /// [`Updates`] for the per-mode contract. The re-adjustment is requested
    /// exactly once, after every reconciler edit of the batch has landed —
    /// never per wrapper.
    ///
    /// # Errors
    ///
    /// [`AdapterError::InvalidIndex`] when an index-mode request carries a
    /// non-integral index. Nothing is mutated and no re-adjustment is
    /// requested in that case.
    pub fn apply_updates(&mut self, updates: Updates<'_, T, H, C>) -> Result<(), AdapterError>
    where
        T: PartialEq,
    {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("apply_updates", len = self.buffer.len()).entered();

        match updates {
            Updates::Transform(transform) => {
                for id in self.buffer.snapshot() {
                    let new_items = {
                        let Some(index) = self.buffer.index_of(id) else {
                            continue;
                        };
                        let Some(wrapper) = self.buffer.get(index) else {
                            continue;
                        };
                        transform(wrapper.item(), wrapper.context(), wrapper.handle())
                    };
                    if let Some(new_items) = new_items {
                        apply_update(&mut self.buffer, id, new_items);
                    }
                }
            }
            Updates::Replace { index, items } => {
                let Some(index) = integral_index(index) else {
                    return Err(AdapterError::InvalidIndex(index));
                };
                let buffer_index = index - self.buffer.first_index();
                if buffer_index >= 0 && (buffer_index as usize) < self.buffer.len() {
                    if let Some(id) = self.buffer.get(buffer_index as usize).map(Wrapper::id) {
                        apply_update(&mut self.buffer, id, items);
                    }
                }
            }
        }

        self.push_effect(Effect::Adjust);
        Ok(())
    }

    /// Next queued host request, if any.
    pub fn poll_effect(&mut self) -> Option<Effect> {
        self.effects.pop_front()
    }

    /// Drain all queued host requests, in emission order.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        self.effects.drain(..).collect()
    }

    pub(crate) fn push_effect(&mut self, effect: Effect) {
        #[cfg(feature = "tracing")]
        tracing::trace!(?effect, "effect queued");
        self.effects.push_back(effect);
    }

    fn push_adjust_and_clip(&mut self) {
        self.push_effect(Effect::Adjust);
        self.push_effect(Effect::ClipTop);
        self.push_effect(Effect::ClipBottom);
    }
}

/// Accept only values that are some integer exactly.
fn integral_index(index: f64) -> Option<i64> {
    const MIN: f64 = i64::MIN as f64;
    const MAX: f64 = i64::MAX as f64;
    if index.is_finite() && index.fract() == 0.0 && (MIN..=MAX).contains(&index) {
        Some(index as i64)
    } else {
        None
    }
}
