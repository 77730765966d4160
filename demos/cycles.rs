//! Looping lists, off-chain references and error reporting.
//!
//! Run with: cargo run --example cycles

use randlist::{from_str, to_string, LinkedList};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // a -> b -> c -> back to a
    let mut ring = LinkedList::new();
    let a = ring.push_back("a");
    let _b = ring.push_back("b");
    let c = ring.push_back("c");
    ring.set_next(c, Some(a));
    ring.set_prev(a, Some(c));

    let doc = to_string(&ring)?;
    println!("Ring document:\n{}\n", doc);
    println!("Reconstructed:\n{}\n", from_str(&doc)?);

    // A rand link to a node the next chain never reaches cannot be written
    let mut dangling = LinkedList::new();
    let head = dangling.push_back("head");
    let stray = dangling.insert("stray");
    dangling.set_rand(head, Some(stray));
    match to_string(&dangling) {
        Ok(doc) => println!("Unexpectedly serialized: {}", doc),
        Err(e) => println!("Rejected as expected: {}", e),
    }

    // Malformed documents report what went wrong
    for doc in [
        "",
        "[{Data='x',Prev=null,Next=null,Rand=null}!]",
        "[{Data='a',Prev=null,Next=5,Rand=null},{Data='b',Prev=0,Next=null,Rand=null}]",
    ] {
        match from_str(doc) {
            Ok(list) => println!("Parsed {} nodes", list.len()),
            Err(e) => println!("{:?} -> {}", doc, e),
        }
    }

    Ok(())
}
