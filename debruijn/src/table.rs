// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.

//! De Bruijn bit-scan table.

use alloc::string::String;
use alloc::vec::Vec;

use crate::hash::debruijn_hash;
use crate::magic;
use crate::sequence;
use crate::word::DeBruijnWord;


/// Builds the bit index table for the given magic constant.
///
/// The element at the index `debruijn_hash(1 << (k - 1), magic)` is `k`
/// (a 1-based bit index) for each `k` in `1..=T::BITS`.
///
/// The (bit index, hash) pairs are stable-sorted by the hash value.
/// If `magic` is not a proper De Bruijn constant, hash values collide and
/// the table is not a permutation (see [`DeBruijnTable::is_valid()`]).
///
/// # Example
///
/// ```
/// assert_eq!(debruijn::table::build_table(0x1du8), [1, 2, 7, 3, 8, 6, 5, 4]);
/// ```
pub fn build_table<T: DeBruijnWord>(magic: T) -> Vec<u8> {
    let mut pairs: Vec<(u8, usize)> = (0..T::BITS)
        .map(|shift| ((shift + 1) as u8, debruijn_hash(T::ONE << shift, magic)))
        .collect();
    pairs.sort_by_key(|&(_, hash)| hash);
    pairs.into_iter().map(|(index, _)| index).collect()
}


/// A De Bruijn sequence, its magic constant and the bit-scan table
/// for an unsigned integer type.
///
/// # Example
///
/// ```
/// use debruijn::DeBruijnTable;
///
/// let table = DeBruijnTable::<u8>::generate();
/// assert_eq!(table.sequence(), "00011101");
/// assert_eq!(table.magic(), 0x1d);
/// assert_eq!(table.table(), [1, 2, 7, 3, 8, 6, 5, 4]);
/// assert_eq!(table.bit_scan_forward(0b0010_1000), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeBruijnTable<T: DeBruijnWord> {
    /// The De Bruijn sequence (as `'0'` and `'1'`).
    sequence: String,
    /// The sequence as an integer.
    magic: T,
    /// 1-based bit indices ordered by the hash value.
    table: Vec<u8>,
}

impl<T: DeBruijnWord> DeBruijnTable<T> {
    /// The width of `T` in bits.
    pub const BITS: u32 = T::BITS;
    /// The order of the De Bruijn sequence.
    pub const ORDER: u32 = T::ORDER;
    /// The right shift width used by the hash.
    pub const SHIFT_WIDTH: u32 = T::SHIFT_WIDTH;

    /// Generates the sequence, the magic constant and the table.
    pub fn generate() -> Self {
        let sequence = sequence::generate(T::ORDER);
        let magic = magic::from_bin_str::<T>(&sequence);
        let table = build_table(magic);
        let result = Self { sequence, magic, table };
        debug_assert!(result.is_valid());
        result
    }

    /// Returns the De Bruijn sequence as a string of `'0'` and `'1'`.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Returns the magic constant.
    pub fn magic(&self) -> T {
        self.magic
    }

    /// Returns the table of 1-based bit indices, indexed by the hash value.
    pub fn table(&self) -> &[u8] {
        &self.table
    }

    /// Returns the De Bruijn hash of `x` (the index to [`table()`](Self::table())).
    pub fn hash(&self, x: T) -> usize {
        debruijn_hash(x, self.magic)
    }

    /// Returns the 0-based index of the lowest set bit of `x` using the table.
    ///
    /// Returns [`None`] if `x` is zero.
    pub fn bit_scan_forward(&self, x: T) -> Option<u32> {
        if x == T::ZERO {
            return None;
        }
        Some(u32::from(self.table[self.hash(x)]) - 1)
    }

    /// Checks whether the sequence is a De Bruijn sequence of the order
    /// and the table is a permutation of the 1-based bit indices.
    pub fn is_valid(&self) -> bool {
        if !sequence::is_debruijn(&self.sequence, T::ORDER as usize) {
            return false;
        }
        if self.table.len() != T::BITS as usize {
            return false;
        }
        let mut seen: u64 = 0;
        for &index in self.table.iter() {
            if index == 0 || u32::from(index) > T::BITS {
                return false;
            }
            seen |= 1u64 << (index - 1);
        }
        seen.count_ones() == T::BITS
    }
}

impl<T: DeBruijnWord> core::fmt::Display for DeBruijnTable<T> {
    /// Writes the diagnostics block which ends with an empty line.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "=== table size: {} ===", T::BITS)?;
        writeln!(f, "log2BitSize = {}", T::ORDER)?;
        writeln!(f, "shiftWidth = {}", T::SHIFT_WIDTH)?;
        writeln!(f, "magic(bin) = 0b{}", self.sequence)?;
        writeln!(f, "magic(hex) = 0x{:0width$x}", self.magic, width = T::HEX_DIGITS)?;
        f.write_str("table = [")?;
        for (i, index) in self.table.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", index)?;
        }
        f.write_str("]\n\n")
    }
}
