//! Open-set strategies.
//!
//! Both strategies return a minimum-`f` open node on every pop and are fully
//! deterministic. They may break `f` ties differently, so they can return
//! different paths of equal cost.

use std::collections::BinaryHeap;

use crate::node::{Node, NodeRef};

/// How the open set is stored and searched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FrontierKind {
    /// Unordered list, linear scan for the minimum. The first node found with
    /// the lowest `f` wins; removal swaps the last entry into the hole.
    #[default]
    Scan,
    /// Binary heap with lazy deletion of superseded entries.
    Heap,
}

pub(crate) enum Frontier {
    Scan(Vec<usize>),
    Heap(BinaryHeap<NodeRef>),
}

impl Frontier {
    pub(crate) fn new(kind: FrontierKind) -> Self {
        match kind {
            FrontierKind::Scan => Self::Scan(Vec::new()),
            FrontierKind::Heap => Self::Heap(BinaryHeap::new()),
        }
    }

    /// Offer a node whose `f` was just lowered.
    ///
    /// The scan list holds each index at most once, so a node that is already
    /// open is not added again. The heap always takes a fresh entry; the old
    /// one is skipped on pop.
    pub(crate) fn offer(&mut self, idx: usize, f: i32, already_open: bool) {
        match self {
            Self::Scan(list) => {
                if !already_open {
                    list.push(idx);
                }
            }
            Self::Heap(heap) => heap.push(NodeRef { idx, f }),
        }
    }

    /// Take an open node with the lowest `f`.
    pub(crate) fn pop_min(&mut self, nodes: &[Node]) -> Option<usize> {
        match self {
            Self::Scan(list) => {
                let first = *list.first()?;
                let mut best = 0;
                let mut best_f = nodes[first].f();
                for (i, &idx) in list.iter().enumerate().skip(1) {
                    let f = nodes[idx].f();
                    if f < best_f {
                        best = i;
                        best_f = f;
                    }
                }
                Some(list.swap_remove(best))
            }
            Self::Heap(heap) => {
                while let Some(entry) = heap.pop() {
                    let node = &nodes[entry.idx];
                    if node.open && node.f() == entry.f {
                        return Some(entry.idx);
                    }
                }
                None
            }
        }
    }
}
