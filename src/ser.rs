//! Document emission.
//!
//! [`Serializer`] flattens a [`LinkedList`] into the bracketed record form:
//!
//! ```text
//! [{Data='a',Prev=null,Next=1,Rand=1},{Data='b',Prev=0,Next=null,Rand=null}]
//! ```
//!
//! The whole list is rendered into an in-memory buffer before anything
//! reaches a writer, so a list that cannot be represented leaves the sink
//! untouched.
//!
//! ## Usage
//!
//! Most users should use the functions in the crate root:
//!
//! ```rust
//! use randlist::{to_string, LinkedList};
//!
//! let mut list = LinkedList::new();
//! let a = list.push_back("only");
//! list.set_rand(a, Some(a));
//!
//! assert_eq!(
//!     to_string(&list).unwrap(),
//!     "[{Data='only',Prev=null,Next=null,Rand=0}]"
//! );
//! ```

use crate::de::QUOTE;
use crate::error::Field;
use crate::index::ChainIndex;
use crate::list::{LinkedList, NodeId};
use crate::{Error, Result};
use tracing::{debug, trace};

/// Renders lists into the document form.
///
/// A serializer can be reused; each [`Serializer::serialize_list`] call
/// appends one document to the buffer.
pub struct Serializer {
    output: Vec<u8>,
}

/// [`Error::UnrepresentableData`] reason for payloads holding `'`.
pub(crate) const QUOTED_DATA: &str = "contains the quote character (')";

/// [`Error::UnrepresentableData`] reason for string output of byte payloads.
pub(crate) const NOT_UTF8: &str = "is not valid UTF-8";

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer {
    pub fn new() -> Self {
        Serializer {
            output: Vec::with_capacity(256),
        }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.output
    }

    /// Appends the document form of `list` to the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrepresentableReference`] if `head` is not a node of
    /// `list` or a `prev`, `next` or `rand` link points at a node outside
    /// the forward chain, and
    /// [`Error::UnrepresentableData`] if a payload contains `'`. On error the
    /// buffer is left as it was before the call.
    pub fn serialize_list(&mut self, list: &LinkedList) -> Result<()> {
        if let Some(head) = list.head() {
            if list.get(head).is_none() {
                return Err(Error::UnrepresentableReference {
                    node: head,
                    field: Field::Head,
                });
            }
        }
        let index = ChainIndex::build(list);
        debug!(nodes = index.len(), "serializing list");

        let mark = self.output.len();
        let result = self.write_document(list, &index);
        if result.is_err() {
            self.output.truncate(mark);
        }
        result
    }

    fn write_document(&mut self, list: &LinkedList, index: &ChainIndex) -> Result<()> {
        self.output.push(b'[');
        for (i, id) in index.iter().enumerate() {
            if i > 0 {
                self.output.push(b',');
            }
            self.write_record(list, index, id)?;
        }
        self.output.push(b']');
        Ok(())
    }

    fn write_record(&mut self, list: &LinkedList, index: &ChainIndex, id: NodeId) -> Result<()> {
        let node = &list[id];
        if node.data.contains(&QUOTE) {
            return Err(Error::UnrepresentableData {
                node: id,
                reason: QUOTED_DATA,
            });
        }
        trace!(node = id.index(), len = node.data.len(), "writing record");

        self.output.extend_from_slice(b"{Data='");
        self.output.extend_from_slice(&node.data);
        self.output.push(QUOTE);
        self.write_reference(index, id, Field::Prev, node.prev)?;
        self.write_reference(index, id, Field::Next, node.next)?;
        self.write_reference(index, id, Field::Rand, node.rand)?;
        self.output.push(b'}');
        Ok(())
    }

    fn write_reference(
        &mut self,
        index: &ChainIndex,
        node: NodeId,
        field: Field,
        target: Option<NodeId>,
    ) -> Result<()> {
        self.output.push(b',');
        self.output.extend_from_slice(field.as_str().as_bytes());
        self.output.push(b'=');
        match target {
            None => self.output.extend_from_slice(b"null"),
            Some(target) => {
                let i = index
                    .get(target)
                    .ok_or(Error::UnrepresentableReference { node, field })?;
                self.output.extend_from_slice(i.to_string().as_bytes());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(list: &LinkedList) -> Result<String> {
        let mut serializer = Serializer::new();
        serializer.serialize_list(list)?;
        Ok(String::from_utf8(serializer.into_inner()).unwrap())
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(render(&LinkedList::new()).unwrap(), "[]");
    }

    #[test]
    fn test_two_node_chain() {
        let mut list = LinkedList::new();
        list.push_back("a");
        list.push_back("b");
        assert_eq!(
            render(&list).unwrap(),
            "[{Data='a',Prev=null,Next=1,Rand=null},{Data='b',Prev=0,Next=null,Rand=null}]"
        );
    }

    #[test]
    fn test_cycle_emits_each_node_once() {
        let mut list = LinkedList::new();
        let a = list.push_back("a");
        let b = list.push_back("b");
        list.set_next(b, Some(a));
        list.set_prev(a, Some(b));

        assert_eq!(
            render(&list).unwrap(),
            "[{Data='a',Prev=1,Next=1,Rand=null},{Data='b',Prev=0,Next=0,Rand=null}]"
        );
    }

    #[test]
    fn test_rand_outside_chain_rejected() {
        let mut list = LinkedList::new();
        let a = list.push_back("a");
        let loose = list.insert("loose");
        list.set_rand(a, Some(loose));

        assert_eq!(
            render(&list),
            Err(Error::UnrepresentableReference {
                node: a,
                field: Field::Rand
            })
        );
    }

    #[test]
    fn test_prev_outside_chain_rejected() {
        let mut list = LinkedList::new();
        let before = list.insert("before");
        let a = list.push_back("a");
        list.set_prev(a, Some(before));

        assert!(matches!(
            render(&list),
            Err(Error::UnrepresentableReference {
                field: Field::Prev,
                ..
            })
        ));
    }

    #[test]
    fn test_quote_in_data_rejected() {
        let mut list = LinkedList::new();
        let a = list.push_back("it's");
        assert_eq!(
            render(&list),
            Err(Error::UnrepresentableData {
                node: a,
                reason: QUOTED_DATA
            })
        );
    }

    #[test]
    fn test_failed_call_leaves_buffer_untouched() {
        let mut ok = LinkedList::new();
        ok.push_back("x");
        let mut bad = LinkedList::new();
        bad.push_back("'");

        let mut serializer = Serializer::new();
        serializer.serialize_list(&ok).unwrap();
        assert!(serializer.serialize_list(&bad).is_err());
        assert_eq!(
            serializer.into_inner(),
            b"[{Data='x',Prev=null,Next=null,Rand=null}]"
        );
    }

    #[test]
    fn test_non_utf8_payload_written_verbatim() {
        let mut list = LinkedList::new();
        list.push_back(&b"caf\xe9"[..]);

        let mut serializer = Serializer::new();
        serializer.serialize_list(&list).unwrap();
        assert_eq!(
            serializer.into_inner(),
            b"[{Data='caf\xe9',Prev=null,Next=null,Rand=null}]"
        );
    }

    #[test]
    fn test_foreign_head_rejected() {
        let mut other = LinkedList::new();
        other.push_back("x");
        other.push_back("y");
        let foreign = other.push_back("z");

        let mut list = LinkedList::new();
        list.push_back("only");
        list.set_head(Some(foreign));

        assert_eq!(
            render(&list),
            Err(Error::UnrepresentableReference {
                node: foreign,
                field: Field::Head
            })
        );
    }
}
