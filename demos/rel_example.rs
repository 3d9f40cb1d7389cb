//! Distance between two small relations over a 32-element domain.
//!
//! ```bash
//! cargo run --example rel_example
//! ```

use relmetric::{min_weight, rel_metric, BitRelation, RelationError};

fn main() -> Result<(), RelationError> {
    let r1 = BitRelation::new(32, 2, vec![0x3000_000f, 0x0000_0000]);
    let r2 = BitRelation::new(32, 3, vec![0x100f_0f3f, 0x0000_000f, 0x0000_0010]);

    println!("Relation 1:\n{r1}");
    println!("Relation 2:\n{r2}");

    println!("weight 1 -> 2 = {}", min_weight(&r1, &r2)?);
    println!("weight 2 -> 1 = {}", min_weight(&r2, &r1)?);
    println!("metric = {}", rel_metric(&r1, &r2)?);
    Ok(())
}
