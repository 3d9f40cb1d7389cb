//! Distance between finite binary relations.
//!
//! A binary relation here is a 0/1 matrix: rows are elements of a domain,
//! columns are relation instances. `relmetric` stores relations as bit-packed
//! columns and measures how far apart two relations over the same domain are:
//!
//! - [`column_diff`] / [`match_columns`]: Hamming distance between columns
//! - [`mapping_weight`]: cost of pairing the columns of one relation with
//!   those of another, plus a penalty for target columns left unpaired
//! - [`min_weight`]: the cheapest such pairing, found by exhaustive search
//! - [`rel_metric`]: the larger of the two directional minima
//!
//! # The Metric
//!
//! For relations `A` (columns `a_i`) and `B` (columns `b_j`) with `n` rows, a
//! column mapping `f` sends each `a_i` to some `b_f(i)`. Its weight is
//!
//! ```text
//! w(f) = Σ_i hamming(a_i, b_f(i)) + n * |{ j : j not in image(f) }|
//! ```
//!
//! The directional weight `min_weight(A, B)` is the minimum of `w(f)` over all
//! `|B|^|A|` mappings, capped at `n * |B|`. The metric
//! `d(A, B) = max(min_weight(A, B), min_weight(B, A))` is symmetric, zero on
//! identical relations and obeys the triangle inequality.
//!
//! # Cost
//!
//! The search is brute force: `O(|B|^|A| * |A| * n)`. Keep column counts small,
//! or set [`MetricConfig::max_candidates`] to reject oversized searches.
//!
//! # Example
//!
//! ```rust
//! use relmetric::{rel_metric, BitRelation};
//!
//! // 4-element domain; one all-zero column.
//! let a = BitRelation::new(4, 1, vec![0b0000]);
//! // Same domain; an all-zero and an all-one column.
//! let b = BitRelation::new(4, 2, vec![0b0000, 0b1111]);
//!
//! // Best pairing leaves the all-one column unmatched: penalty 4.
//! assert_eq!(rel_metric(&a, &b).unwrap(), 4);
//! assert_eq!(rel_metric(&b, &a).unwrap(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod column;
mod config;
mod error;
pub mod mapping;
mod metric;
mod relation;
mod search;

pub use column::{column_diff, match_columns};
pub use config::MetricConfig;
pub use error::{RelationError, Result, Side};
pub use mapping::{mapping_weight, MappingCursor, MappingSpace};
pub use metric::{rel_metric, Quasimetric, RelationMetric, SymmetricMetric};
pub use relation::{words_for, BitRelation, Word, WORD_BITS};
pub use search::{min_weight, min_weight_with, worst_weight};
