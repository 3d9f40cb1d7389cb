//! Random search for triangle inequality violations.
//!
//! Builds triples of random relations over a shared domain and checks every
//! side of the triangle. Violating triples are printed in full.
//!
//! ```bash
//! cargo run --example triangle_check --release -- 1000
//! ```

use relmetric::{rel_metric, BitRelation, RelationError};
use rand::prelude::*;

const MAX_COLS: usize = 4;
const MAX_ROWS: usize = 40;

fn random_relation(rng: &mut StdRng, rows: usize) -> BitRelation {
    let cols = rng.gen_range(1..=MAX_COLS);
    BitRelation::from_fn(rows, cols, |_, _| rng.gen_bool(0.5))
}

fn check(r: [&BitRelation; 3]) -> Result<bool, RelationError> {
    let d01 = rel_metric(r[0], r[1])?;
    let d02 = rel_metric(r[0], r[2])?;
    let d12 = rel_metric(r[1], r[2])?;

    let mut ok = true;
    for (name, side, a, b) in [
        ("1-3", d02, d01, d12),
        ("1-2", d01, d02, d12),
        ("2-3", d12, d01, d02),
    ] {
        if side > a + b {
            println!("Violation {name}: {side} > ({a} + {b})");
            ok = false;
        }
    }
    Ok(ok)
}

fn main() {
    let cases: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(100);
    let mut rng = StdRng::seed_from_u64(0x5eed);

    let mut failures = 0;
    for case in 0..cases {
        let rows = rng.gen_range(1..=MAX_ROWS);
        let r1 = random_relation(&mut rng, rows);
        let r2 = random_relation(&mut rng, rows);
        let r3 = random_relation(&mut rng, rows);

        match check([&r1, &r2, &r3]) {
            Ok(true) => {}
            Ok(false) => {
                failures += 1;
                println!("Relation 1:\n{r1}\nRelation 2:\n{r2}\nRelation 3:\n{r3}");
            }
            Err(e) => println!("case {case}: {e}"),
        }
    }

    println!("{cases} cases, {failures} violations");
}
