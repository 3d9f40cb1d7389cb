//! Exhaustive minimum-weight search.
//!
//! Every mapping from the source columns to the target columns is scored
//! with [`mapping_weight`] and the smallest score wins. There are
//! `t^s` candidates for `s` source and `t` target columns, each costing
//! `O(s * rows)`, so this is only practical for small relations.
//!
//! The running minimum starts at [`worst_weight`] of the target: the score of
//! matching nothing. The result therefore never exceeds it.

use tracing::{debug, trace, warn};

use crate::config::MetricConfig;
use crate::error::{RelationError, Result};
use crate::mapping::{mapping_weight, MappingSpace};
use crate::relation::BitRelation;

/// Weight of a relation none of whose columns are matched.
#[inline]
pub const fn worst_weight(row_count: usize, column_count: usize) -> usize {
    column_count * row_count
}

/// Minimum mapping weight from the columns of `r1` to the columns of `r2`.
///
/// Not symmetric in general; see [`rel_metric`](crate::rel_metric).
///
/// ```
/// use relmetric::{min_weight, BitRelation};
///
/// let r1 = BitRelation::new(4, 1, vec![0b0000]);
/// let r2 = BitRelation::new(4, 2, vec![0b0000, 0b1111]);
/// assert_eq!(min_weight(&r1, &r2).unwrap(), 4);
/// assert_eq!(min_weight(&r2, &r1).unwrap(), 4);
/// ```
pub fn min_weight(r1: &BitRelation, r2: &BitRelation) -> Result<usize> {
    min_weight_with(&MetricConfig::UNLIMITED, r1, r2)
}

/// [`min_weight`] under the limits in `config`.
pub fn min_weight_with(config: &MetricConfig, r1: &BitRelation, r2: &BitRelation) -> Result<usize> {
    if r1.row_count() != r2.row_count() {
        return Err(RelationError::RowCountMismatch {
            left: r1.row_count(),
            right: r2.row_count(),
        });
    }
    r1.check_storage()?;
    r2.check_storage()?;

    let space = MappingSpace::between(r1, r2);
    let candidates = space.len();
    if !config.admits(candidates) {
        warn!(
            source_columns = space.source_columns(),
            target_columns = space.target_columns(),
            limit = ?config.max_candidates,
            "mapping space exceeds candidate limit"
        );
        return Err(RelationError::SearchSpaceTooLarge {
            source_columns: space.source_columns(),
            target_columns: space.target_columns(),
            limit: config.max_candidates.unwrap_or_default(),
        });
    }

    let worst = worst_weight(r2.row_count(), r2.column_count());
    if space.is_empty() {
        debug!(
            source_columns = space.source_columns(),
            "no target columns to map into, using worst case"
        );
        return Ok(worst);
    }

    debug!(
        rows = r1.row_count(),
        source_columns = space.source_columns(),
        target_columns = space.target_columns(),
        candidates = ?candidates,
        "starting exhaustive mapping search"
    );

    let mut cursor = space.cursor()?;
    let mut best = worst;
    while let Some(mapping) = cursor.next_mapping() {
        let weight = mapping_weight(r1, r2, mapping)?;
        trace!(?mapping, weight, "candidate");
        best = best.min(weight);
    }

    debug!(min_weight = best, "mapping search finished");
    Ok(best)
}
