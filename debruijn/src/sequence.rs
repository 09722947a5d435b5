// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.

//! Binary De Bruijn sequence generator.

use alloc::string::String;


/// The maximum order supported by this module.
///
/// A sequence of this order has 64 bits and fits in an [`u64`].
pub const MAX_ORDER: u32 = 6;


/// Generates a binary De Bruijn sequence of the given order as a string of
/// `'0'` and `'1'`.
///
/// The sequence starts with `order` zeros.  Each following bit is `1` if
/// the window made of the last `order - 1` bits and a `1` has not appeared
/// in the sequence yet and `0` otherwise ("prefer one" construction).
/// Generation stops after `2^order` bits.
///
/// Every `order`-bit window starting at the offsets `0..=2^order-order`
/// is unique.  Since the last `order - 1` bits are zeros, the result is
/// also a cyclic De Bruijn sequence.
///
/// # Panics
///
/// Panics if `order` is not in `1..=`[`MAX_ORDER`].
///
/// # Example
///
/// ```
/// assert_eq!(debruijn::sequence::generate(3), "00011101");
/// ```
pub fn generate(order: u32) -> String {
    assert!((1..=MAX_ORDER).contains(&order), "unsupported order: {}", order);
    let len = 1usize << order;
    let order = order as usize;
    let mut seq = String::with_capacity(len);
    seq.extend(core::iter::repeat('0').take(order));
    let mut candidate = String::with_capacity(order);
    for i in order..len {
        candidate.clear();
        candidate.push_str(&seq[(i + 1 - order)..]);
        candidate.push('1');
        let bit = if seq.contains(candidate.as_str()) { '0' } else { '1' };
        seq.push(bit);
    }
    debug_assert!(seq.len() == len);
    seq
}


/// Returns an iterator over `order`-character windows of `seq`.
///
/// The windows start at the offsets `0..=seq.len()-order` and do not wrap
/// around.  If `seq` is shorter than `order` or contains a non-ASCII
/// character, the iterator is empty.
pub fn windows(seq: &str, order: usize) -> impl Iterator<Item = &str> + '_ {
    debug_assert!(order != 0);
    // Byte offsets are character boundaries only on ASCII strings.
    let count = if seq.is_ascii() { (seq.len() + 1).saturating_sub(order) } else { 0 };
    (0..count).map(move |offset| &seq[offset..(offset + order)])
}


/// Checks whether `seq` is a binary De Bruijn sequence of the given order
/// as generated by [`generate()`].
///
/// That is, `seq` consists of exactly `2^order` characters of `'0'` and
/// `'1'` and no `order`-character window appears twice (non-cyclic).
pub fn is_debruijn(seq: &str, order: usize) -> bool {
    if order == 0 || order > MAX_ORDER as usize {
        return false;
    }
    if seq.len() != 1usize << order || !seq.bytes().all(|ch| ch == b'0' || ch == b'1') {
        return false;
    }
    // Each window is at most 6 bits wide and fits in the 64-bit bitmap.
    let mut seen: u64 = 0;
    for window in windows(seq, order) {
        let value = window.bytes().fold(0u32, |n, ch| (n << 1) | u32::from(ch == b'1'));
        let bit = 1u64 << value;
        if seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    true
}
