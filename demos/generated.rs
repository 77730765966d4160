//! Seeded random lists written to and read back from a file.
//!
//! Run with: cargo run --example generated

use rand::rngs::StdRng;
use rand::SeedableRng;
use randlist::generate::sample;
use randlist::{deserialize, serialize, LinkedList};
use std::error::Error;
use std::fs::File;

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(2024);
    let list = sample(6, &mut rng);
    println!("Generated:\n{}\n", list);

    let path = std::env::temp_dir().join("randlist-demo.txt");
    serialize(&list, File::create(&path)?)?;

    let mut back = LinkedList::new();
    deserialize(File::open(&path)?, &mut back)?;
    println!("Read back from {}:\n{}", path.display(), back);

    std::fs::remove_file(&path)?;
    Ok(())
}
