//! The doubly-linked list with random references.
//!
//! Nodes live in an arena owned by [`LinkedList`] and refer to each other
//! through [`NodeId`] handles. All three relations (`prev`, `next`, `rand`)
//! are plain handles, so cycles and aliasing need no shared ownership:
//! identity is handle equality.
//!
//! ## Examples
//!
//! ```rust
//! use randlist::LinkedList;
//!
//! let mut list = LinkedList::new();
//! let a = list.push_back("a");
//! let b = list.push_back("b");
//! list.set_rand(a, Some(b));
//!
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.next(a), Some(b));
//! assert_eq!(list.prev(b), Some(a));
//! assert_eq!(list.forward().count(), 2);
//! ```

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{self, Serialize, Serializer};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A handle to a node inside a [`LinkedList`].
///
/// Handles are only meaningful for the list that created them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn from_index(index: usize) -> Self {
        NodeId(index)
    }

    /// Position of the node in its list's arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One list node: a byte payload and three optional links.
///
/// The payload is a plain byte string; it need not be UTF-8.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    pub data: Vec<u8>,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
    pub rand: Option<NodeId>,
}

impl Node {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Node {
            data: data.into(),
            ..Default::default()
        }
    }

    /// The payload as text, or `None` if it is not valid UTF-8.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.data).ok()
    }
}

/// A doubly-linked list whose nodes also carry an arbitrary `rand` link.
///
/// `head` and `tail` are tracked explicitly; the forward chain is whatever
/// following `next` from `head` yields, which may loop.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkedList {
    nodes: Vec<Node>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl LinkedList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        LinkedList {
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Assembles a list from an already-linked arena.
    pub(crate) fn from_parts(nodes: Vec<Node>) -> Self {
        let head = (!nodes.is_empty()).then_some(NodeId(0));
        let tail = nodes.len().checked_sub(1).map(NodeId);
        LinkedList { nodes, head, tail }
    }

    /// Number of nodes in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    #[must_use]
    pub fn tail(&self) -> Option<NodeId> {
        self.tail
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Iterates over every node in the arena, linked or not.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Allocates a node with no links. It joins the forward chain only once
    /// something points at it.
    pub fn insert(&mut self, data: impl Into<Vec<u8>>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(data));
        id
    }

    /// Appends a node after `tail`, linking `prev`/`next` both ways.
    ///
    /// On an empty list the new node becomes both `head` and `tail`.
    pub fn push_back(&mut self, data: impl Into<Vec<u8>>) -> NodeId {
        let id = self.insert(data);
        match self.tail {
            Some(tail) => {
                self[tail].next = Some(id);
                self[id].prev = Some(tail);
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    pub fn set_head(&mut self, head: Option<NodeId>) {
        self.head = head;
    }

    pub fn set_tail(&mut self, tail: Option<NodeId>) {
        self.tail = tail;
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this list.
    pub fn set_prev(&mut self, id: NodeId, prev: Option<NodeId>) {
        self[id].prev = prev;
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this list.
    pub fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        self[id].next = next;
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this list.
    pub fn set_rand(&mut self, id: NodeId, rand: Option<NodeId>) {
        self[id].rand = rand;
    }

    pub fn data(&self, id: NodeId) -> Option<&[u8]> {
        self.get(id).map(|n| n.data.as_slice())
    }

    /// The payload of `id` as text. `None` if `id` is foreign or the
    /// payload is not UTF-8.
    pub fn text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(Node::text)
    }

    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev)
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next)
    }

    pub fn rand(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.rand)
    }

    /// Walks the forward chain from `head`.
    ///
    /// Stops when `next` is absent, dangling, or points back at a node
    /// already yielded, so every node is produced at most once even when
    /// the chain loops.
    pub fn forward(&self) -> Forward<'_> {
        Forward {
            list: self,
            cursor: self.head,
            seen: vec![false; self.nodes.len()],
        }
    }
}

impl Index<NodeId> for LinkedList {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for LinkedList {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}

/// Iterator over a list's forward chain. See [`LinkedList::forward`].
pub struct Forward<'a> {
    list: &'a LinkedList,
    cursor: Option<NodeId>,
    seen: Vec<bool>,
}

impl<'a> Iterator for Forward<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.cursor?;
        let seen = self.seen.get_mut(id.0)?;
        if *seen {
            self.cursor = None;
            return None;
        }
        *seen = true;
        self.cursor = self.list[id].next;
        Some(id)
    }
}

/// Console report: one line per forward-chain node, then the node count.
///
/// ```text
/// #0 data=a prev=null next=1 rand=1
/// #1 data=b prev=0 next=null rand=null
/// count=2
/// ```
impl fmt::Display for LinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = crate::index::ChainIndex::build(self);
        let show = |link: Option<NodeId>| match link {
            None => "null".to_string(),
            Some(id) => index
                .get(id)
                .map_or_else(|| "?".to_string(), |i| i.to_string()),
        };
        for (i, id) in index.iter().enumerate() {
            let node = &self[id];
            writeln!(
                f,
                "#{} data={} prev={} next={} rand={}",
                i,
                String::from_utf8_lossy(&node.data),
                show(node.prev),
                show(node.next),
                show(node.rand)
            )?;
        }
        write!(f, "count={}", self.len())
    }
}

impl Serialize for LinkedList {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let document = crate::to_string(self).map_err(ser::Error::custom)?;
        serializer.serialize_str(&document)
    }
}

impl<'de> Deserialize<'de> for LinkedList {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = String::deserialize(deserializer)?;
        crate::from_str(&document).map_err(de::Error::custom)
    }
}
