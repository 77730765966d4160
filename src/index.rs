//! Forward-chain indexing.
//!
//! [`ChainIndex`] assigns consecutive integers `0..n` to the nodes reached
//! by following `next` from a list's `head`. The integers are the node
//! numbers written into a document, so the index doubles as the emission
//! order.
//!
//! The walk stops at the end of the chain or at the first node already in
//! the index. Cycles are detected by handle identity, never by payload.
//!
//! ## Examples
//!
//! ```rust
//! use randlist::{ChainIndex, LinkedList};
//!
//! let mut list = LinkedList::new();
//! let a = list.push_back("a");
//! let b = list.push_back("b");
//! list.set_next(b, Some(a));
//!
//! let index = ChainIndex::build(&list);
//! assert_eq!(index.len(), 2);
//! assert_eq!(index.get(b), Some(1));
//! ```

use crate::list::{LinkedList, NodeId};
use indexmap::IndexSet;

/// Bijection between forward-chain nodes and their positions.
///
/// Thin wrapper around [`IndexSet`]: insertion order is chain order and a
/// node's position in the set is its index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainIndex(IndexSet<NodeId>);

impl ChainIndex {
    /// Indexes the forward chain of `list`.
    ///
    /// An empty list yields an empty index. A `next` handle that does not
    /// belong to `list` ends the walk like an absent one.
    #[must_use]
    pub fn build(list: &LinkedList) -> Self {
        let mut set = IndexSet::with_capacity(list.len());
        let mut cursor = list.head();
        while let Some(id) = cursor {
            let Some(node) = list.get(id) else { break };
            if !set.insert(id) {
                break;
            }
            cursor = node.next;
        }
        ChainIndex(set)
    }

    /// Returns the index assigned to `id`, or `None` if it is off the chain.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<usize> {
        self.0.get_index_of(&id)
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.0.contains(&id)
    }

    /// Returns the node holding index `i`.
    #[must_use]
    pub fn node(&self, i: usize) -> Option<NodeId> {
        self.0.get_index(i).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Nodes in index order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_yields_empty_index() {
        let index = ChainIndex::build(&LinkedList::new());
        assert!(index.is_empty());
    }

    #[test]
    fn test_indices_follow_next_not_arena_order() {
        let mut list = LinkedList::new();
        let c = list.insert("c");
        let a = list.insert("a");
        let b = list.insert("b");
        list.set_head(Some(a));
        list.set_next(a, Some(b));
        list.set_next(b, Some(c));

        let index = ChainIndex::build(&list);
        assert_eq!(index.get(a), Some(0));
        assert_eq!(index.get(b), Some(1));
        assert_eq!(index.get(c), Some(2));
        assert_eq!(index.node(2), Some(c));
    }

    #[test]
    fn test_self_loop_indexed_once() {
        let mut list = LinkedList::new();
        let a = list.push_back("a");
        list.set_next(a, Some(a));

        let index = ChainIndex::build(&list);
        assert_eq!(index.iter().collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn test_prev_and_rand_targets_are_not_indexed() {
        let mut list = LinkedList::new();
        let a = list.push_back("a");
        let behind = list.insert("behind");
        let aside = list.insert("aside");
        list.set_prev(a, Some(behind));
        list.set_rand(a, Some(aside));

        let index = ChainIndex::build(&list);
        assert_eq!(index.len(), 1);
        assert!(!index.contains(behind));
        assert!(!index.contains(aside));
    }
}
