#![forbid(unsafe_code)]

//! Replacement-list reconciliation.
//!
//! Given one wrapper and a candidate replacement list, produce a minimal
//! edit: tag the wrapper for removal when its item is gone, and insert the
//! net-new items so they land in the replacement list's relative order
//! around the surviving wrapper.
//!
//! The algorithm is deliberately a two-pass, reverse-order walk. Do not
//! rewrite it as a single forward pass: the position bookkeeping differs for
//! replacement lists containing the current item more than once, and the
//! tests below pin the reverse-walk behavior.

use vscroll_core::buffer::Buffer;
use vscroll_core::wrapper::{Op, WrapperId};

/// Reconcile one wrapper against a replacement list.
///
/// Rules:
/// - A stale `id` (wrapper already evicted) is a no-op.
/// - If no element of `new_items` equals the wrapper's item, the wrapper is
///   tagged [`Op::Remove`]; when `new_items` is non-empty it is additionally
///   marked `aux_op = Replace` to distinguish "superseded" from "deleted"
///   (the window's position-0 edge handling needs that distinction).
/// - Net-new elements are inserted starting one slot past the wrapper,
///   walking the list in reverse at a fixed insertion point, which lands
///   them in their original relative order. Every element equal to the
///   wrapper's item consumes the reserved slot (the insertion point moves up
///   by one) instead of being inserted again.
///
/// The caller is responsible for triggering a window re-adjustment after a
/// batch of these edits.
pub fn apply_update<T, H, C>(buffer: &mut Buffer<T, H, C>, id: WrapperId, new_items: Vec<T>)
where
    T: PartialEq,
{
    let Some(mut index) = buffer.index_of(id) else {
        return;
    };

    let survives = match buffer.get(index) {
        Some(wrapper) => new_items.iter().rev().any(|candidate| candidate == wrapper.item()),
        None => return,
    };
    if !survives {
        if let Some(wrapper) = buffer.get_mut(index) {
            wrapper.set_op(Op::Remove);
            if !new_items.is_empty() {
                wrapper.set_aux_op(Op::Replace);
            }
        }
    }

    // One past the wrapper's slot; signed because duplicate matches can
    // consume more reserved slots than exist above the insertion point.
    let mut position = index as i64 + 1;
    for new_item in new_items.into_iter().rev() {
        let matches = buffer.get(index).is_some_and(|w| *w.item() == new_item);
        if matches {
            position -= 1;
        } else {
            let slot = position.max(0) as usize;
            buffer.insert(slot, new_item, position == 0);
            if slot <= index {
                index += 1;
            }
        }
    }
}
