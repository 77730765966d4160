//! Reference resolution.
//!
//! Turns parsed records into a linked list: record `i` becomes arena node
//! `i`, and each textual reference is checked against the record count
//! before it becomes a handle.

use crate::error::Field;
use crate::list::{LinkedList, NodeId};
use crate::record::RawRecord;
use crate::{Error, Options, Result};
use tracing::debug;

/// Resolves every record's references and assembles the list.
///
/// The first record becomes `head` and the last `tail`. An empty record
/// list yields an empty list.
///
/// # Errors
///
/// Returns [`Error::MalformedReference`] for a reference that is neither
/// `null` nor an index below the record count, and
/// [`Error::UnconnectedNode`] when a document with more than one record has
/// a record with neither `Prev` nor `Next` (unless disabled through
/// [`Options::require_connected`]).
pub fn link(records: Vec<RawRecord>, options: &Options) -> Result<LinkedList> {
    let count = records.len();
    let mut nodes = Vec::with_capacity(count);

    for (i, record) in records.into_iter().enumerate() {
        let mut node = record.node;
        node.prev = resolve(i, Field::Prev, &record.prev, count)?;
        node.next = resolve(i, Field::Next, &record.next, count)?;
        node.rand = resolve(i, Field::Rand, &record.rand, count)?;

        // A rand link alone does not tie a node into the list.
        if options.require_connected && count > 1 && node.prev.is_none() && node.next.is_none() {
            return Err(Error::UnconnectedNode { record: i });
        }
        nodes.push(node);
    }

    debug!(nodes = count, "linked records");
    Ok(LinkedList::from_parts(nodes))
}

fn resolve(record: usize, field: Field, value: &str, count: usize) -> Result<Option<NodeId>> {
    if value == "null" {
        return Ok(None);
    }
    let malformed = || Error::malformed_reference(record, field, value);
    // `usize::from_str` would also take a leading '+'.
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    match value.parse::<usize>() {
        Ok(i) if i < count => Ok(Some(NodeId::from_index(i))),
        _ => Err(malformed()),
    }
}
