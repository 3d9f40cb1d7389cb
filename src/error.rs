//! Error type shared by every metric operation.

use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

/// Which relation of a comparison an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The relation whose columns are being mapped (`r1`).
    Source,
    /// The relation being mapped into (`r2`).
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Target => f.write_str("target"),
        }
    }
}

/// Failures surfaced by column comparison, mapping weights and the search.
///
/// None of these are retried internally; the first one aborts the enclosing
/// metric computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelationError {
    /// Columns over different domains cannot be compared.
    #[error("row count mismatch: {left} rows vs {right} rows")]
    RowCountMismatch {
        /// Rows in the source relation.
        left: usize,
        /// Rows in the target relation.
        right: usize,
    },

    /// A column index beyond the relation's declared column count.
    #[error("{side} column index {index} out of range (column count {column_count})")]
    ColumnIndexOutOfRange {
        /// Relation the index was checked against.
        side: Side,
        /// Offending index.
        index: usize,
        /// Columns that relation declares.
        column_count: usize,
    },

    /// A mapping whose length differs from the source column count.
    #[error("mapping has {actual} entries, source relation has {expected} columns")]
    MappingLength {
        /// Source column count.
        expected: usize,
        /// Entries supplied.
        actual: usize,
    },

    /// The packed store does not hold `column_count * words_per_column` words.
    #[error("packed storage holds {actual} words, layout requires {expected}")]
    StorageLength {
        /// Words required by the declared shape.
        expected: usize,
        /// Words present.
        actual: usize,
    },

    /// Scratch memory for the search could not be reserved.
    #[error("failed to allocate {len} scratch entries")]
    AllocationFailure {
        /// Entries requested.
        len: usize,
    },

    /// The mapping space exceeds the configured candidate limit.
    #[error(
        "search space {target_columns}^{source_columns} exceeds limit of {limit} candidates"
    )]
    SearchSpaceTooLarge {
        /// Positions per mapping.
        source_columns: usize,
        /// Choices per position.
        target_columns: usize,
        /// Configured candidate limit.
        limit: u128,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RelationError>;

/// Reserve a scratch vector of `len` copies of `value`.
///
/// Reports exhaustion as [`RelationError::AllocationFailure`] instead of aborting.
pub(crate) fn scratch<T: Clone>(len: usize, value: T) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_: TryReserveError| RelationError::AllocationFailure { len })?;
    buf.resize(len, value);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_initialized() {
        let buf = scratch(5, false).unwrap();
        assert_eq!(buf, vec![false; 5]);
    }

    #[test]
    fn test_scratch_empty() {
        let buf: Vec<usize> = scratch(0, 0).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_scratch_exhaustion() {
        let err = scratch::<u64>(usize::MAX, 0).unwrap_err();
        assert_eq!(err, RelationError::AllocationFailure { len: usize::MAX });
    }

    #[test]
    fn test_messages() {
        let err = RelationError::ColumnIndexOutOfRange {
            side: Side::Target,
            index: 3,
            column_count: 2,
        };
        assert_eq!(
            err.to_string(),
            "target column index 3 out of range (column count 2)"
        );
        let err = RelationError::RowCountMismatch { left: 4, right: 5 };
        assert_eq!(err.to_string(), "row count mismatch: 4 rows vs 5 rows");
    }
}
