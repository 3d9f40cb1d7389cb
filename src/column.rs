//! Hamming distance between packed columns.
//!
//! For binary columns the distance is the number of rows where the bits
//! differ: XOR word by word, then popcount. Only the final word of a column
//! can hold padding, so it is masked down to the rows that remain.

use crate::error::{RelationError, Result, Side};
use crate::relation::{words_for, BitRelation, Word, WORD_BITS};

/// Count rows where two packed columns disagree.
///
/// Both slices must hold at least `words_for(row_count)` words. The last word
/// is read only when `row_count` is not a multiple of [`WORD_BITS`], and its
/// padding bits never contribute.
///
/// ```
/// use relmetric::column::column_diff;
///
/// assert_eq!(column_diff(&[0x0000_000F], &[0x0000_00F0], 32), 8);
/// // Only the low 4 rows count.
/// assert_eq!(column_diff(&[0x0000_000F], &[0x0000_00F0], 4), 4);
/// ```
#[inline]
pub fn column_diff(c1: &[Word], c2: &[Word], row_count: usize) -> usize {
    let whole = row_count / WORD_BITS;
    let rem = row_count % WORD_BITS;

    let mut diff: usize = c1[..whole]
        .iter()
        .zip(&c2[..whole])
        .map(|(&a, &b)| (a ^ b).count_ones() as usize)
        .sum();

    if rem != 0 {
        let mask: Word = (1 << rem) - 1;
        diff += ((c1[whole] ^ c2[whole]) & mask).count_ones() as usize;
    }
    diff
}

/// Hamming distance between column `col1` of `r1` and column `col2` of `r2`.
///
/// Checked in order: equal row counts, `col1` in range on `r1`, `col2` in
/// range on `r2`, then both packed stores have the declared length.
///
/// ```
/// use relmetric::{BitRelation, match_columns};
///
/// let r1 = BitRelation::new(32, 1, vec![0x0000_000F]);
/// let r2 = BitRelation::new(32, 2, vec![0, 0x0000_00F0]);
/// assert_eq!(match_columns(&r1, &r2, 0, 0).unwrap(), 4);
/// assert_eq!(match_columns(&r1, &r2, 0, 1).unwrap(), 8);
/// assert!(match_columns(&r1, &r2, 0, 2).is_err());
/// ```
pub fn match_columns(r1: &BitRelation, r2: &BitRelation, col1: usize, col2: usize) -> Result<usize> {
    if r1.row_count() != r2.row_count() {
        return Err(RelationError::RowCountMismatch {
            left: r1.row_count(),
            right: r2.row_count(),
        });
    }
    let c1 = checked_column(r1, col1, Side::Source)?;
    let c2 = checked_column(r2, col2, Side::Target)?;
    Ok(column_diff(c1, c2, r1.row_count()))
}

fn checked_column(rel: &BitRelation, index: usize, side: Side) -> Result<&[Word]> {
    if index >= rel.column_count() {
        return Err(RelationError::ColumnIndexOutOfRange {
            side,
            index,
            column_count: rel.column_count(),
        });
    }
    rel.check_storage()?;
    rel.column(index).ok_or(RelationError::StorageLength {
        expected: rel.column_count() * words_for(rel.row_count()),
        actual: rel.words().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_known_pattern() {
        assert_eq!(column_diff(&[0x0000_000F], &[0x0000_00F0], 32), 8);
    }

    #[test]
    fn test_diff_identical() {
        let c = [0xDEAD_BEEF, 0x1234_5678];
        assert_eq!(column_diff(&c, &c, 64), 0);
    }

    #[test]
    fn test_diff_complement() {
        assert_eq!(column_diff(&[0xFFFF_FFFF], &[0], 32), 32);
        assert_eq!(column_diff(&[0xFFFF_FFFF, 0x7], &[0, 0], 35), 35);
    }

    #[test]
    fn test_diff_exact_multiple_reads_no_extra_word() {
        // Slices sized exactly for 64 rows; a remainder read would panic.
        let a = [0xFFFF_0000, 0x0000_0001];
        let b = [0x0000_0000, 0x0000_0000];
        assert_eq!(column_diff(&a, &b, 64), 17);
    }

    #[test]
    fn test_diff_masks_padding() {
        // Padding bits above row 3 differ, but must not count.
        assert_eq!(column_diff(&[0xFFFF_FFF0], &[0x0000_0000], 4), 0);
        assert_eq!(column_diff(&[0xFFFF_FFF1], &[0x0000_0000], 4), 1);
    }

    #[test]
    fn test_diff_zero_rows() {
        assert_eq!(column_diff(&[], &[], 0), 0);
    }

    #[test]
    fn test_diff_remainder_31() {
        assert_eq!(column_diff(&[0xFFFF_FFFF], &[0], 31), 31);
    }

    #[test]
    fn test_match_single_bit() {
        let r1 = BitRelation::new(32, 1, vec![0x0000_0100]);
        let r2 = BitRelation::new(32, 1, vec![0x0000_0000]);
        assert_eq!(match_columns(&r1, &r2, 0, 0), Ok(1));
    }

    #[test]
    fn test_match_uses_column_offset() {
        // 40 rows -> 2 words per column.
        let r1 = BitRelation::from_fn(40, 2, |col, row| col == 1 && row >= 32);
        let r2 = BitRelation::zeros(40, 1);
        assert_eq!(match_columns(&r1, &r2, 0, 0), Ok(0));
        assert_eq!(match_columns(&r1, &r2, 1, 0), Ok(8));
    }

    #[test]
    fn test_match_row_mismatch_first() {
        let r1 = BitRelation::zeros(4, 1);
        let r2 = BitRelation::zeros(5, 1);
        // Row mismatch wins over the bad index.
        assert_eq!(
            match_columns(&r1, &r2, 9, 0),
            Err(RelationError::RowCountMismatch { left: 4, right: 5 })
        );
    }

    #[test]
    fn test_match_source_out_of_range() {
        let r1 = BitRelation::zeros(4, 1);
        let r2 = BitRelation::zeros(4, 2);
        assert_eq!(
            match_columns(&r1, &r2, 1, 0),
            Err(RelationError::ColumnIndexOutOfRange {
                side: Side::Source,
                index: 1,
                column_count: 1
            })
        );
    }

    #[test]
    fn test_match_target_out_of_range() {
        let r1 = BitRelation::zeros(4, 1);
        let r2 = BitRelation::zeros(4, 2);
        assert_eq!(
            match_columns(&r1, &r2, 0, 2),
            Err(RelationError::ColumnIndexOutOfRange {
                side: Side::Target,
                index: 2,
                column_count: 2
            })
        );
    }

    #[test]
    fn test_match_bad_storage() {
        let r1 = BitRelation::new(32, 2, vec![0]);
        let r2 = BitRelation::zeros(32, 1);
        assert_eq!(
            match_columns(&r1, &r2, 0, 0),
            Err(RelationError::StorageLength {
                expected: 2,
                actual: 1
            })
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn diff_reference(a: &[Word], b: &[Word], rows: usize) -> usize {
        (0..rows)
            .filter(|&row| {
                let w = row / WORD_BITS;
                let bit = row % WORD_BITS;
                ((a[w] >> bit) & 1) != ((b[w] >> bit) & 1)
            })
            .count()
    }

    fn arb_column_pair() -> impl Strategy<Value = (usize, Vec<Word>, Vec<Word>)> {
        (0usize..130).prop_flat_map(|rows| {
            let n = words_for(rows);
            (
                Just(rows),
                prop::collection::vec(any::<Word>(), n),
                prop::collection::vec(any::<Word>(), n),
            )
        })
    }

    proptest! {
        #[test]
        fn proptest_diff_matches_reference((rows, a, b) in arb_column_pair()) {
            prop_assert_eq!(column_diff(&a, &b, rows), diff_reference(&a, &b, rows));
        }

        #[test]
        fn proptest_diff_symmetric((rows, a, b) in arb_column_pair()) {
            prop_assert_eq!(column_diff(&a, &b, rows), column_diff(&b, &a, rows));
        }

        #[test]
        fn proptest_diff_bounded((rows, a, b) in arb_column_pair()) {
            prop_assert!(column_diff(&a, &b, rows) <= rows);
        }
    }
}
