//! Property-based tests for the round-trip guarantees.

use proptest::prelude::*;
use randlist::{from_str, to_string, LinkedList, NodeId};

/// Payloads over a delimiter-heavy alphabet, never containing the quote.
fn payload() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,{}\\[\\]=]{0,16}"
}

/// A chain plus, per node, an optional rand target index.
fn chain_with_rand() -> impl Strategy<Value = (Vec<String>, Vec<Option<prop::sample::Index>>)> {
    prop::collection::vec(payload(), 0..24).prop_flat_map(|items| {
        let len = items.len();
        (
            Just(items),
            prop::collection::vec(proptest::option::of(any::<prop::sample::Index>()), len),
        )
    })
}

fn build(items: &[String], rands: &[Option<prop::sample::Index>]) -> LinkedList {
    let mut list = LinkedList::new();
    let ids: Vec<NodeId> = items.iter().map(|item| list.push_back(item.as_str())).collect();
    for (&id, rand) in ids.iter().zip(rands) {
        if let Some(target) = rand {
            list.set_rand(id, Some(ids[target.index(ids.len())]));
        }
    }
    list
}

fn payloads(list: &LinkedList) -> Vec<String> {
    list.forward()
        .map(|id| String::from_utf8_lossy(&list[id].data).into_owned())
        .collect()
}

proptest! {
    #[test]
    fn prop_chain_roundtrip(items in prop::collection::vec(payload(), 0..32)) {
        let mut list = LinkedList::new();
        for item in &items {
            list.push_back(item.as_str());
        }

        let back = from_str(&to_string(&list).unwrap()).unwrap();
        prop_assert_eq!(back.len(), items.len());
        prop_assert_eq!(payloads(&back), items);

        let order: Vec<NodeId> = back.forward().collect();
        for (i, &id) in order.iter().enumerate() {
            let expected_prev = i.checked_sub(1).map(|p| order[p]);
            prop_assert_eq!(back.prev(id), expected_prev);
            prop_assert_eq!(back.next(id), order.get(i + 1).copied());
        }
    }

    #[test]
    fn prop_rand_roundtrip((items, rands) in chain_with_rand()) {
        let list = build(&items, &rands);
        let doc = to_string(&list).unwrap();
        let back = from_str(&doc).unwrap();

        prop_assert_eq!(to_string(&back).unwrap(), doc);
    }

    #[test]
    fn prop_cycle_writes_each_node_once(
        items in prop::collection::vec(payload(), 1..16),
        back_to in any::<prop::sample::Index>(),
    ) {
        let mut list = LinkedList::new();
        let ids: Vec<NodeId> = items.iter().map(|item| list.push_back(item.as_str())).collect();
        let last = ids[ids.len() - 1];
        list.set_next(last, Some(ids[back_to.index(ids.len())]));

        let back = from_str(&to_string(&list).unwrap()).unwrap();
        prop_assert_eq!(back.len(), items.len());
    }

    #[test]
    fn prop_parser_never_panics(input in "\\PC{0,64}") {
        let _ = from_str(&input);
    }
}
