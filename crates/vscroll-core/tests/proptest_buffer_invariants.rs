#![forbid(unsafe_code)]

//! Property-based invariants for the windowed buffer.
//!
//! For any sequence of window mutations:
//!
//! 1. The buffer's item order matches a plain-vector model.
//! 2. `first_index` moves only when the window extends upward.
//! 3. Wrapper ids stay unique and `index_of` agrees with iteration order.

use proptest::prelude::*;
use std::collections::HashSet;
use vscroll_core::{Buffer, Op, Wrapper};

#[derive(Debug, Clone)]
enum Mutation {
    Append(Vec<u32>),
    Prepend(Vec<u32>),
    Insert { position: usize, item: u32, first_edge: bool },
    RemoveAndCommit { position: usize },
}

fn mutation() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        prop::collection::vec(any::<u32>(), 0..4).prop_map(Mutation::Append),
        prop::collection::vec(any::<u32>(), 0..4).prop_map(Mutation::Prepend),
        (0usize..16, any::<u32>(), any::<bool>())
            .prop_map(|(position, item, first_edge)| Mutation::Insert {
                position,
                item,
                first_edge
            }),
        (0usize..16).prop_map(|position| Mutation::RemoveAndCommit { position }),
    ]
}

proptest! {
    #[test]
    fn window_bookkeeping_matches_model(mutations in prop::collection::vec(mutation(), 0..24)) {
        let mut buffer: Buffer<u32, (), ()> = Buffer::new(1);
        let mut model: Vec<u32> = Vec::new();
        let mut model_first: i64 = 1;

        for mutation in mutations {
            match mutation {
                Mutation::Append(items) => {
                    model.extend(items.iter().copied());
                    buffer.append(items);
                }
                Mutation::Prepend(items) => {
                    model_first -= items.len() as i64;
                    for (i, item) in items.iter().enumerate() {
                        model.insert(i, *item);
                    }
                    buffer.prepend(items);
                }
                Mutation::Insert { position, item, first_edge } => {
                    let clamped = position.min(model.len());
                    model.insert(clamped, item);
                    if first_edge {
                        model_first -= 1;
                    }
                    buffer.insert(position, item, first_edge);
                }
                Mutation::RemoveAndCommit { position } => {
                    if position < model.len() {
                        model.remove(position);
                        buffer.get_mut(position).unwrap().set_op(Op::Remove);
                        let removed = buffer.commit_adjustment();
                        prop_assert_eq!(removed.len(), 1);
                    }
                }
            }
        }

        let items: Vec<u32> = buffer.iter().map(|w| *w.item()).collect();
        prop_assert_eq!(&items, &model);
        prop_assert_eq!(buffer.first_index(), model_first);
        prop_assert_eq!(buffer.len(), model.len());
        prop_assert_eq!(buffer.is_empty(), model.is_empty());

        let ids: Vec<_> = buffer.iter().map(Wrapper::id).collect();
        let unique: HashSet<_> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len());
        for (slot, id) in ids.into_iter().enumerate() {
            prop_assert_eq!(buffer.index_of(id), Some(slot));
        }

        // After a commit, no tags survive.
        buffer.commit_adjustment();
        prop_assert!(buffer.iter().all(|w| w.op() == Op::None && w.aux_op() == Op::None));
    }
}
