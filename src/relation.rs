//! Bit-packed binary relations.
//!
//! # Layout
//!
//! A relation is a 0/1 matrix: rows are elements of a domain, columns are
//! relation instances. Storage is column-major and word-aligned:
//!
//! ```text
//! words_per_column = ceil(row_count / 32)
//!
//! [col 0: w0 w1 .. wk] [col 1: w0 w1 .. wk] ...
//! ```
//!
//! Bit `i` of a column segment, counting from the least significant bit of its
//! first word, is row `i`. Every column starts on a word boundary, so the high
//! bits of a column's last word are padding. Padding is ignored by every
//! operation in this crate.
//!
//! This layout is the interchange contract for data packed elsewhere and must
//! not change.

use std::fmt;

use crate::error::{RelationError, Result};

/// Storage word for packed columns.
pub type Word = u32;

/// Rows held by one [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

/// Words needed to hold `row_count` rows of one column.
#[inline]
pub const fn words_for(row_count: usize) -> usize {
    row_count.div_ceil(WORD_BITS)
}

/// A binary relation with bit-packed, word-aligned columns.
///
/// Read-only once built. Validation of the packed store is deferred to first
/// use (see [`BitRelation::check_storage`]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitRelation {
    row_count: usize,
    column_count: usize,
    words: Vec<Word>,
}

impl BitRelation {
    /// Wrap an already-packed store.
    ///
    /// `words` should hold `column_count * words_for(row_count)` words with
    /// padding bits cleared. Nothing is checked here.
    ///
    /// ```
    /// use relmetric::BitRelation;
    ///
    /// let r = BitRelation::new(32, 2, vec![0x0000_000F, 0x0000_00F0]);
    /// assert!(r.get_bit(0, 3));
    /// assert!(!r.get_bit(0, 4));
    /// assert!(r.get_bit(1, 4));
    /// ```
    pub fn new(row_count: usize, column_count: usize, words: Vec<Word>) -> Self {
        Self {
            row_count,
            column_count,
            words,
        }
    }

    /// All-zero relation.
    pub fn zeros(row_count: usize, column_count: usize) -> Self {
        Self {
            row_count,
            column_count,
            words: vec![0; column_count * words_for(row_count)],
        }
    }

    /// Build a relation from a predicate over `(column, row)`.
    ///
    /// ```
    /// use relmetric::BitRelation;
    ///
    /// // Identity relation on a 3-element domain.
    /// let r = BitRelation::from_fn(3, 3, |col, row| col == row);
    /// assert_eq!(r.render(), "100\n010\n001\n");
    /// ```
    pub fn from_fn<F>(row_count: usize, column_count: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut rel = Self::zeros(row_count, column_count);
        for col in 0..column_count {
            for row in 0..row_count {
                if f(col, row) {
                    rel.set(col, row);
                }
            }
        }
        rel
    }

    /// Build a relation from explicit columns of booleans.
    ///
    /// Columns shorter than `row_count` are zero-filled; extra entries are
    /// dropped.
    pub fn from_columns<I, C>(row_count: usize, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[bool]>,
    {
        let columns: Vec<C> = columns.into_iter().collect();
        let mut rel = Self::zeros(row_count, columns.len());
        for (col, bits) in columns.iter().enumerate() {
            for (row, &bit) in bits.as_ref().iter().take(row_count).enumerate() {
                if bit {
                    rel.set(col, row);
                }
            }
        }
        rel
    }

    /// Number of domain elements.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of relation instances.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Words in each column segment.
    #[inline]
    pub fn words_per_column(&self) -> usize {
        words_for(self.row_count)
    }

    /// The raw packed store.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Verify the packed store matches the declared shape.
    ///
    /// A shape whose word count overflows `usize` reports `expected` as
    /// `usize::MAX`.
    pub fn check_storage(&self) -> Result<()> {
        let expected = self
            .column_count
            .checked_mul(self.words_per_column())
            .unwrap_or(usize::MAX);
        if self.words.len() != expected {
            return Err(RelationError::StorageLength {
                expected,
                actual: self.words.len(),
            });
        }
        Ok(())
    }

    /// Packed words of one column, or `None` if the column (or its storage)
    /// does not exist.
    pub fn column(&self, index: usize) -> Option<&[Word]> {
        if index >= self.column_count {
            return None;
        }
        let len = self.words_per_column();
        let start = index.checked_mul(len)?;
        self.words.get(start..start.checked_add(len)?)
    }

    /// Entry at `(column, row)`. Out-of-range positions read as `false`.
    pub fn get_bit(&self, column: usize, row: usize) -> bool {
        if row >= self.row_count {
            return false;
        }
        match self.column(column) {
            Some(words) => (words[row / WORD_BITS] >> (row % WORD_BITS)) & 1 != 0,
            None => false,
        }
    }

    fn set(&mut self, column: usize, row: usize) {
        let idx = column * self.words_per_column() + row / WORD_BITS;
        self.words[idx] |= 1 << (row % WORD_BITS);
    }

    /// ASCII grid: one line per row, one `0`/`1` per column.
    ///
    /// Debug aid only.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.row_count * (self.column_count + 1));
        for row in 0..self.row_count {
            for col in 0..self.column_count {
                out.push(if self.get_bit(col, row) { '1' } else { '0' });
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for BitRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
