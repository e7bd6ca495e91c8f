#![forbid(unsafe_code)]

//! Buffered item wrappers.
//!
//! A [`Wrapper`] pairs one logical item with its render handle, per-item
//! context, and a pending mutation tag. Wrappers are created by the buffer
//! and tagged by the reconciler; the host's window re-adjustment consumes the
//! tags and decides whether a wrapper is spliced out or recycled.

/// Stable identity token for a wrapper.
///
/// Assigned by the buffer at creation and never reused within one buffer.
/// The reconciler and snapshot iteration address wrappers by id rather than
/// by position, so positional shifts during a pass cannot retarget them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WrapperId(pub(crate) u64);

impl WrapperId {
    /// Raw id value, for host-side bookkeeping (e.g. keyed render caches).
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Pending mutation tag on a wrapper.
///
/// Written by the buffer (`Insert` on creation via positional insert) and the
/// reconciler (`Remove`/`Replace`); cleared when the window re-adjustment
/// commits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Op {
    /// No mutation pending.
    #[default]
    None,
    /// Newly inserted, not yet rendered into the window.
    Insert,
    /// Scheduled for removal at the next re-adjustment.
    Remove,
    /// Superseded by other items (auxiliary tag only).
    Replace,
}

/// One buffered slot: a logical item plus its render state.
///
/// `T` is the caller-owned item (identity decided by its `PartialEq`), `H`
/// the opaque render handle used only for geometry lookups, and `C` an opaque
/// per-item context passed through untouched.
#[derive(Debug, Clone)]
pub struct Wrapper<T, H, C> {
    id: WrapperId,
    item: T,
    handle: Option<H>,
    context: Option<C>,
    op: Op,
    aux_op: Op,
}

impl<T, H, C> Wrapper<T, H, C> {
    pub(crate) fn new(id: WrapperId, item: T) -> Self {
        Self {
            id,
            item,
            handle: None,
            context: None,
            op: Op::None,
            aux_op: Op::None,
        }
    }

    /// Stable identity of this wrapper.
    #[must_use]
    pub fn id(&self) -> WrapperId {
        self.id
    }

    /// The wrapped item.
    #[must_use]
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Render handle, if the host has bound one.
    #[must_use]
    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    /// Per-item context, if the host has bound one.
    #[must_use]
    pub fn context(&self) -> Option<&C> {
        self.context.as_ref()
    }

    /// Pending mutation tag.
    #[must_use]
    pub fn op(&self) -> Op {
        self.op
    }

    /// Auxiliary tag; `Replace` marks a removal that supersedes rather than
    /// deletes, which the position-0 re-adjustment path must treat specially.
    #[must_use]
    pub fn aux_op(&self) -> Op {
        self.aux_op
    }

    /// Tag this wrapper with a pending mutation.
    pub fn set_op(&mut self, op: Op) {
        self.op = op;
    }

    /// Set the auxiliary tag.
    pub fn set_aux_op(&mut self, op: Op) {
        self.aux_op = op;
    }

    /// Attach the render handle and context produced by the host render step.
    pub fn bind(&mut self, handle: H, context: C) {
        self.handle = Some(handle);
        self.context = Some(context);
    }

    pub(crate) fn clear_ops(&mut self) {
        self.op = Op::None;
        self.aux_op = Op::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_wrapper_is_untagged_and_unbound() {
        let w: Wrapper<i32, (), ()> = Wrapper::new(WrapperId(7), 42);
        assert_eq!(w.id().raw(), 7);
        assert_eq!(*w.item(), 42);
        assert_eq!(w.op(), Op::None);
        assert_eq!(w.aux_op(), Op::None);
        assert!(w.handle().is_none());
        assert!(w.context().is_none());
    }

    #[test]
    fn bind_attaches_handle_and_context() {
        let mut w: Wrapper<&str, u32, &str> = Wrapper::new(WrapperId(0), "a");
        w.bind(99, "ctx");
        assert_eq!(w.handle(), Some(&99));
        assert_eq!(w.context(), Some(&"ctx"));
    }

    #[test]
    fn clear_ops_resets_both_tags() {
        let mut w: Wrapper<i32, (), ()> = Wrapper::new(WrapperId(1), 1);
        w.set_op(Op::Remove);
        w.set_aux_op(Op::Replace);
        w.clear_ops();
        assert_eq!(w.op(), Op::None);
        assert_eq!(w.aux_op(), Op::None);
    }
}
