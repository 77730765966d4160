//! Basic list serialization and deserialization.
//!
//! Run with: cargo run --example simple

use randlist::{from_str, to_string, LinkedList};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut list = LinkedList::new();
    let alice = list.push_back("Alice");
    let bob = list.push_back("Bob, the builder");
    let carol = list.push_back("Carol {admin}");
    list.set_rand(alice, Some(carol));
    list.set_rand(carol, Some(bob));

    // Serialize
    let doc = to_string(&list)?;
    println!("Document:\n{}\n", doc);

    // Deserialize and report
    let back = from_str(&doc)?;
    println!("Reconstructed:\n{}\n", back);

    assert_eq!(to_string(&back)?, doc);
    println!("✓ Round-trip successful");

    Ok(())
}
