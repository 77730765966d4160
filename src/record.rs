//! Parsed-but-unlinked records.

use crate::list::Node;

/// One record as read from a document, before its references are resolved.
///
/// `node` already carries its payload; `prev`, `next` and `rand` hold the
/// raw field text, either `null` or a decimal index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRecord {
    pub node: Node,
    pub prev: String,
    pub next: String,
    pub rand: String,
}

impl RawRecord {
    pub fn new(data: Vec<u8>, prev: String, next: String, rand: String) -> Self {
        RawRecord {
            node: Node::new(data),
            prev,
            next,
            rand,
        }
    }
}
