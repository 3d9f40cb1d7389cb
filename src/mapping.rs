//! Column mappings and their weights.
//!
//! A mapping sends every column of a source relation to some column of a
//! target relation. Mappings need not be injective or surjective. Its weight
//! is the total bit disagreement between paired columns, plus `row_count` for
//! each target column nothing maps to.
//!
//! # Enumeration
//!
//! With `s` source columns and `t` target columns there are exactly `t^s`
//! mappings. [`MappingCursor`] walks them as a mixed-radix counter: position 0
//! is the least significant digit, and a digit reaching `t` resets to 0 and
//! carries. The walk ends when a carry runs off the last position.
//!
//! ```text
//! s = 2, t = 3:
//! [0,0] [1,0] [2,0] [0,1] [1,1] [2,1] [0,2] [1,2] [2,2]
//! ```

use crate::column::match_columns;
use crate::error::{scratch, RelationError, Result};
use crate::relation::BitRelation;

/// The set of all mappings from `source_columns` columns to `target_columns`
/// columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MappingSpace {
    source_columns: usize,
    target_columns: usize,
}

impl MappingSpace {
    /// Space of mappings between two column counts.
    pub fn new(source_columns: usize, target_columns: usize) -> Self {
        Self {
            source_columns,
            target_columns,
        }
    }

    /// Space of mappings from the columns of `source` to those of `target`.
    pub fn between(source: &BitRelation, target: &BitRelation) -> Self {
        Self::new(source.column_count(), target.column_count())
    }

    /// Length of every mapping in the space.
    pub fn source_columns(&self) -> usize {
        self.source_columns
    }

    /// Number of choices per position.
    pub fn target_columns(&self) -> usize {
        self.target_columns
    }

    /// `target_columns ^ source_columns`, or `None` if that overflows `u128`.
    ///
    /// An empty source has exactly one (empty) mapping. A non-empty source with
    /// no targets has none.
    pub fn len(&self) -> Option<u128> {
        let exp = u32::try_from(self.source_columns).ok()?;
        (self.target_columns as u128).checked_pow(exp)
    }

    /// True when no mapping exists.
    pub fn is_empty(&self) -> bool {
        self.source_columns > 0 && self.target_columns == 0
    }

    /// Fresh cursor positioned before the first mapping.
    ///
    /// Fails only if the counter's scratch memory cannot be reserved.
    pub fn cursor(&self) -> Result<MappingCursor> {
        Ok(MappingCursor {
            digits: scratch(self.source_columns, 0)?,
            radix: self.target_columns,
            state: if self.is_empty() {
                CursorState::Exhausted
            } else {
                CursorState::Fresh
            },
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CursorState {
    Fresh,
    Active,
    Exhausted,
}

/// Streaming cursor over a [`MappingSpace`].
///
/// Yields borrowed mappings so a single buffer serves the whole walk.
///
/// ```
/// use relmetric::mapping::MappingSpace;
///
/// let mut cursor = MappingSpace::new(2, 2).cursor().unwrap();
/// let mut seen = Vec::new();
/// while let Some(m) = cursor.next_mapping() {
///     seen.push(m.to_vec());
/// }
/// assert_eq!(seen, vec![vec![0, 0], vec![1, 0], vec![0, 1], vec![1, 1]]);
/// ```
#[derive(Clone, Debug)]
pub struct MappingCursor {
    digits: Vec<usize>,
    radix: usize,
    state: CursorState,
}

impl MappingCursor {
    /// Advance to the next mapping, or `None` once the space is exhausted.
    pub fn next_mapping(&mut self) -> Option<&[usize]> {
        match self.state {
            CursorState::Exhausted => return None,
            CursorState::Fresh => self.state = CursorState::Active,
            CursorState::Active => {
                if !self.increment() {
                    self.state = CursorState::Exhausted;
                    return None;
                }
            }
        }
        Some(self.digits.as_slice())
    }

    /// Rewind to before the first mapping.
    pub fn reset(&mut self) {
        self.digits.iter_mut().for_each(|d| *d = 0);
        self.state = if !self.digits.is_empty() && self.radix == 0 {
            CursorState::Exhausted
        } else {
            CursorState::Fresh
        };
    }

    // Returns false when the carry runs off the last position.
    fn increment(&mut self) -> bool {
        for digit in self.digits.iter_mut() {
            *digit += 1;
            if *digit < self.radix {
                return true;
            }
            *digit = 0;
        }
        false
    }
}

/// Weight of one mapping from the columns of `r1` to the columns of `r2`.
///
/// `mapping[i]` is the target column for source column `i`. The result is the
/// summed Hamming distance of each pair plus `r2.row_count()` for every column
/// of `r2` left out of the image.
///
/// ```
/// use relmetric::{mapping_weight, BitRelation};
///
/// let r1 = BitRelation::new(4, 1, vec![0b0000]);
/// let r2 = BitRelation::new(4, 2, vec![0b0000, 0b1111]);
/// // Column 0 -> zeros costs nothing, but the ones column is unmapped.
/// assert_eq!(mapping_weight(&r1, &r2, &[0]).unwrap(), 4);
/// assert_eq!(mapping_weight(&r1, &r2, &[1]).unwrap(), 8);
/// ```
pub fn mapping_weight(r1: &BitRelation, r2: &BitRelation, mapping: &[usize]) -> Result<usize> {
    if r1.row_count() != r2.row_count() {
        return Err(RelationError::RowCountMismatch {
            left: r1.row_count(),
            right: r2.row_count(),
        });
    }
    r1.check_storage()?;
    r2.check_storage()?;
    if mapping.len() != r1.column_count() {
        return Err(RelationError::MappingLength {
            expected: r1.column_count(),
            actual: mapping.len(),
        });
    }

    let mut used = scratch(r2.column_count(), false)?;
    let mut diff = 0usize;
    for (source, &target) in mapping.iter().enumerate() {
        diff += match_columns(r1, r2, source, target)?;
        used[target] = true;
    }

    let unused = used.iter().filter(|&&u| !u).count();
    Ok(diff + unused * r2.row_count())
}
