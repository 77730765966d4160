//! Sample lists for demos, tests and benchmarks.
//!
//! The random source is always passed in, so a seeded generator gives the
//! same list every run:
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use randlist::generate::sample;
//!
//! let a = sample(8, &mut StdRng::seed_from_u64(7));
//! let b = sample(8, &mut StdRng::seed_from_u64(7));
//! assert_eq!(a, b);
//! ```

use crate::list::{LinkedList, NodeId};
use rand::Rng;

/// Payload alphabet. Includes the format's delimiters, never the quote.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 ,{}[]=";

const MAX_PAYLOAD: usize = 12;

/// Builds a chain of `len` nodes with random payloads.
///
/// Roughly three in four nodes get a `rand` link, always to a node on the
/// chain (possibly itself), so the result always serializes.
pub fn sample<R: Rng + ?Sized>(len: usize, rng: &mut R) -> LinkedList {
    let mut list = LinkedList::with_capacity(len);
    let ids: Vec<NodeId> = (0..len).map(|_| list.push_back(payload(rng))).collect();

    for &id in &ids {
        if rng.gen_bool(0.75) {
            let target = ids[rng.gen_range(0..len)];
            list.set_rand(id, Some(target));
        }
    }
    list
}

/// A random payload of up to `MAX_PAYLOAD` bytes from `ALPHABET`.
pub fn payload<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(0..=MAX_PAYLOAD);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
