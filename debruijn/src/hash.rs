// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.

//! Multiplicative De Bruijn hash of isolated bits.

use crate::word::DeBruijnWord;


/// Isolates the lowest set bit (`x & -x`).
///
/// Returns zero if `x` is zero.
#[inline(always)]
pub fn isolate_lowest_bit<T: DeBruijnWord>(x: T) -> T {
    x & x.wrapping_neg()
}

/// Isolates the highest set bit.
///
/// All bits below the highest set bit are filled first and then
/// the filled part except the highest bit is cleared.
/// Returns zero if `x` is zero.
#[inline]
pub fn isolate_highest_bit<T: DeBruijnWord>(x: T) -> T {
    let mut x = x;
    let mut shift = 1;
    while shift < T::BITS {
        x = x | (x >> shift);
        shift <<= 1;
    }
    x ^ (x >> 1)
}

/// Computes the De Bruijn hash of `x` using the magic constant `magic`.
///
/// The lowest set bit of `x` is isolated, multiplied by `magic` (modulo
/// `2^BITS`) and the top [`ORDER`](DeBruijnWord::ORDER) bits are taken.
/// The result is always less than [`BITS`](DeBruijnWord::BITS).
///
/// If `magic` is a De Bruijn sequence of the order
/// [`ORDER`](DeBruijnWord::ORDER) starting with `ORDER` zeros, each power
/// of two is mapped to a distinct hash value.
///
/// # Example
///
/// ```
/// use debruijn::hash::debruijn_hash;
///
/// assert_eq!(debruijn_hash(1u8, 0x1d), 0);
/// assert_eq!(debruijn_hash(0x40u8, 0x1d), 2);
/// // Only the lowest set bit matters.
/// assert_eq!(debruijn_hash(0xc0u8, 0x1d), 2);
/// ```
#[inline]
pub fn debruijn_hash<T: DeBruijnWord>(x: T, magic: T) -> usize {
    (isolate_lowest_bit(x).wrapping_mul(magic) >> T::SHIFT_WIDTH).as_usize()
}


mod tests;
