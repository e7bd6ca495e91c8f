#![forbid(unsafe_code)]

//! Windowed item buffer.
//!
//! The buffer is a contiguous window onto a conceptually unbounded item
//! sequence. `first` is the logical index of slot 0; the window's end is
//! `first + len`. The feed bounds (`bof`/`eof`) are host-maintained flags
//! saying no more items exist before/after the window.
//!
//! Fetching and rendering live in the host runtime; this type only stores
//! wrappers and keeps the window bookkeeping consistent under positional
//! mutation.

use crate::wrapper::{Op, Wrapper, WrapperId};

/// Ordered window of [`Wrapper`]s with feed-bound flags.
#[derive(Debug, Clone)]
pub struct Buffer<T, H, C> {
    wrappers: Vec<Wrapper<T, H, C>>,
    first: i64,
    bof: bool,
    eof: bool,
    next_id: u64,
}

impl<T, H, C> Default for Buffer<T, H, C> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<T, H, C> Buffer<T, H, C> {
    /// Create an empty buffer whose first slot has logical index `first`.
    #[must_use]
    pub fn new(first: i64) -> Self {
        Self {
            wrappers: Vec::new(),
            first,
            bof: false,
            eof: false,
            next_id: 0,
        }
    }

    /// Number of buffered wrappers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.wrappers.len()
    }

    /// Whether the window is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }

    /// Logical index of buffer slot 0.
    #[must_use]
    pub fn first_index(&self) -> i64 {
        self.first
    }

    /// Whether the beginning of the feed has been reached.
    #[must_use]
    pub fn bof(&self) -> bool {
        self.bof
    }

    /// Whether the end of the feed has been reached.
    #[must_use]
    pub fn eof(&self) -> bool {
        self.eof
    }

    /// Host hook: record that no items exist before the window.
    pub fn set_bof(&mut self, bof: bool) {
        self.bof = bof;
    }

    /// Host hook: record that no items exist after the window.
    pub fn set_eof(&mut self, eof: bool) {
        self.eof = eof;
    }

    /// Wrapper at buffer slot `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Wrapper<T, H, C>> {
        self.wrappers.get(index)
    }

    /// Mutable wrapper at buffer slot `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Wrapper<T, H, C>> {
        self.wrappers.get_mut(index)
    }

    /// Current slot of the wrapper with the given id, if still buffered.
    #[must_use]
    pub fn index_of(&self, id: WrapperId) -> Option<usize> {
        self.wrappers.iter().position(|w| w.id() == id)
    }

    /// Ids of all buffered wrappers, in window order.
    ///
    /// This is the frozen visit list for batch transforms: mutations during
    /// the pass must not change which wrappers are visited.
    #[must_use]
    pub fn snapshot(&self) -> Vec<WrapperId> {
        self.wrappers.iter().map(Wrapper::id).collect()
    }

    /// Iterate the buffered wrappers in window order.
    pub fn iter(&self) -> impl Iterator<Item = &Wrapper<T, H, C>> {
        self.wrappers.iter()
    }

    /// Insert a new item at buffer slot `position`, tagged [`Op::Insert`].
    ///
    /// `first_edge` marks an insertion at the window's top edge: the window
    /// is treated as extending upward (`first` decremented) so the logical
    /// indices of the existing wrappers are preserved. Positions past the end
    /// are clamped to an append.
    ///
    /// Returns the id of the new wrapper.
    pub fn insert(&mut self, position: usize, item: T, first_edge: bool) -> WrapperId {
        let position = position.min(self.wrappers.len());
        let id = self.allocate_id();
        let mut wrapper = Wrapper::new(id, item);
        wrapper.set_op(Op::Insert);
        self.wrappers.insert(position, wrapper);
        if first_edge {
            self.first -= 1;
        }
        id
    }

    /// Append items after the window's last slot.
    pub fn append(&mut self, items: impl IntoIterator<Item = T>) {
        for item in items {
            let id = self.allocate_id();
            self.wrappers.push(Wrapper::new(id, item));
        }
    }

    /// Prepend items before the window's first slot, preserving their order.
    ///
    /// `first` moves up by the number of items so the existing wrappers keep
    /// their logical indices.
    pub fn prepend(&mut self, items: impl IntoIterator<Item = T>) {
        let mut count = 0i64;
        for (offset, item) in items.into_iter().enumerate() {
            let id = self.allocate_id();
            self.wrappers.insert(offset, Wrapper::new(id, item));
            count += 1;
        }
        self.first -= count;
    }

    /// Attach a render handle and context to the wrapper with the given id.
    ///
    /// Returns `false` when the id is stale (wrapper already evicted).
    pub fn bind(&mut self, id: WrapperId, handle: H, context: C) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.wrappers[index].bind(handle, context);
                true
            }
            None => false,
        }
    }

    /// Apply pending mutation tags: splice out `Remove`-tagged wrappers and
    /// clear the tags on survivors.
    ///
    /// This is the window-mutation half of the host's re-adjustment; geometry
    /// work (padding, clipping, fetch-more) stays with the host. Returns the
    /// evicted wrappers in window order.
    pub fn commit_adjustment(&mut self) -> Vec<Wrapper<T, H, C>> {
        let mut removed = Vec::new();
        let mut kept = Vec::with_capacity(self.wrappers.len());
        for mut wrapper in self.wrappers.drain(..) {
            if wrapper.op() == Op::Remove {
                removed.push(wrapper);
            } else {
                wrapper.clear_ops();
                kept.push(wrapper);
            }
        }
        self.wrappers = kept;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            removed = removed.len(),
            kept = self.wrappers.len(),
            "buffer adjustment committed"
        );
        removed
    }

    fn allocate_id(&mut self) -> WrapperId {
        let id = WrapperId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(buffer: &Buffer<&'static str, (), ()>) -> Vec<&'static str> {
        buffer.iter().map(|w| *w.item()).collect()
    }

    #[test]
    fn append_keeps_first_index() {
        let mut buffer: Buffer<&str, (), ()> = Buffer::new(1);
        buffer.append(["a", "b", "c"]);
        assert_eq!(items(&buffer), vec!["a", "b", "c"]);
        assert_eq!(buffer.first_index(), 1);
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn prepend_moves_first_index_up() {
        let mut buffer: Buffer<&str, (), ()> = Buffer::new(1);
        buffer.append(["c"]);
        buffer.prepend(["a", "b"]);
        assert_eq!(items(&buffer), vec!["a", "b", "c"]);
        assert_eq!(buffer.first_index(), -1);
    }

    #[test]
    fn insert_tags_wrapper_and_clamps_position() {
        let mut buffer: Buffer<&str, (), ()> = Buffer::new(0);
        buffer.append(["a", "c"]);
        buffer.insert(1, "b", false);
        buffer.insert(99, "d", false);
        assert_eq!(items(&buffer), vec!["a", "b", "c", "d"]);
        assert_eq!(buffer.get(1).map(Wrapper::op), Some(Op::Insert));
        assert_eq!(buffer.get(0).map(Wrapper::op), Some(Op::None));
        assert_eq!(buffer.first_index(), 0);
    }

    #[test]
    fn first_edge_insert_extends_window_upward() {
        let mut buffer: Buffer<&str, (), ()> = Buffer::new(5);
        buffer.append(["b"]);
        buffer.insert(0, "a", true);
        assert_eq!(items(&buffer), vec!["a", "b"]);
        assert_eq!(buffer.first_index(), 4);
    }

    #[test]
    fn index_of_tracks_positional_shifts() {
        let mut buffer: Buffer<&str, (), ()> = Buffer::new(0);
        buffer.append(["a", "b"]);
        let id = buffer.get(1).map(Wrapper::id).unwrap();
        buffer.insert(0, "x", false);
        assert_eq!(buffer.index_of(id), Some(2));
    }

    #[test]
    fn snapshot_is_frozen_against_later_mutation() {
        let mut buffer: Buffer<&str, (), ()> = Buffer::new(0);
        buffer.append(["a", "b"]);
        let snapshot = buffer.snapshot();
        buffer.insert(0, "x", false);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(buffer.index_of(snapshot[0]), Some(1));
        assert_eq!(buffer.index_of(snapshot[1]), Some(2));
    }

    #[test]
    fn commit_adjustment_splices_removed_and_clears_tags() {
        let mut buffer: Buffer<&str, (), ()> = Buffer::new(0);
        buffer.append(["a", "b", "c"]);
        buffer.get_mut(1).unwrap().set_op(Op::Remove);
        buffer.get_mut(1).unwrap().set_aux_op(Op::Replace);
        buffer.insert(3, "d", false);

        let removed = buffer.commit_adjustment();
        assert_eq!(removed.len(), 1);
        assert_eq!(*removed[0].item(), "b");
        assert_eq!(items(&buffer), vec!["a", "c", "d"]);
        assert!(buffer.iter().all(|w| w.op() == Op::None));
    }

    #[test]
    fn bind_reports_stale_ids() {
        let mut buffer: Buffer<&str, u32, &str> = Buffer::new(0);
        buffer.append(["a"]);
        let id = buffer.get(0).map(Wrapper::id).unwrap();
        assert!(buffer.bind(id, 7, "ctx"));
        assert_eq!(buffer.get(0).and_then(Wrapper::handle), Some(&7));

        buffer.get_mut(0).unwrap().set_op(Op::Remove);
        buffer.commit_adjustment();
        assert!(!buffer.bind(id, 8, "ctx"));
    }

    #[test]
    fn ids_are_not_reused_across_evictions() {
        let mut buffer: Buffer<&str, (), ()> = Buffer::new(0);
        buffer.append(["a"]);
        let first_id = buffer.get(0).map(Wrapper::id).unwrap();
        buffer.get_mut(0).unwrap().set_op(Op::Remove);
        buffer.commit_adjustment();
        buffer.append(["b"]);
        let second_id = buffer.get(0).map(Wrapper::id).unwrap();
        assert_ne!(first_id, second_id);
    }
}
