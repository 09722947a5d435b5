// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.

//! Binary De Bruijn sequences and bit-scan lookup tables.
//!
//! For each of [`u8`], [`u16`], [`u32`] and [`u64`], this crate generates
//! a binary De Bruijn sequence of the order `log2(BITS)`, reinterprets it
//! as a multiplier ("magic constant") and derives the table which maps
//! `(isolated_bit * magic) >> (BITS - log2(BITS))` back to the bit index.
//!
//! ```
//! use debruijn::DeBruijnTable;
//!
//! let table = DeBruijnTable::<u32>::generate();
//! assert_eq!(table.magic(), 0x07dc_d629);
//! assert_eq!(table.bit_scan_forward(0x0000_0300), Some(8));
//! ```
//!
//! The `debruijn` executable prints the sequence, the magic constant and
//! the table for all four widths.

// no_std
#![cfg_attr(not(any(test, doc, feature = "std")), no_std)]
// Regular nightly features
#![cfg_attr(feature = "unstable", feature(doc_cfg))]
// int_log feature depending on ilog2 availability
#![cfg_attr(debruijn_ilog2 = "unstable", feature(int_log))]
#![cfg_attr(debruijn_ilog2 = "unstable", feature(const_int_log))]
// In the code maintenance mode, disallow all warnings.
#![cfg_attr(feature = "maint-code", deny(warnings))]
#![forbid(unsafe_code)]
// Non-test code requires documents
#![cfg_attr(not(test), warn(missing_docs))]
#![cfg_attr(not(test), warn(clippy::missing_docs_in_private_items))]
// Unless in the maintenance mode, allow unknown lints.
#![cfg_attr(not(feature = "maint-lints"), allow(unknown_lints))]
// Unless in the maintenance mode, allow old lint names.
#![cfg_attr(not(feature = "maint-lints"), allow(renamed_and_removed_lints))]
// Tests: constant (and/or obvious) assertions should be allowed.
#![cfg_attr(test, allow(clippy::assertions_on_constants))]
// Tests: obvious 1 << 0 like operations should be allowed.
#![cfg_attr(test, allow(clippy::identity_op))]

extern crate alloc;

pub mod hash;
pub mod magic;
mod report;
pub mod sequence;
pub mod table;
mod test_utils;
mod utils;
mod word;

pub use magic::{MagicParseError, MagicParseErrorKind};
#[cfg(feature = "std")]
#[cfg_attr(feature = "unstable", doc(cfg(feature = "std")))]
pub use report::{write_report, write_reports};
pub use table::DeBruijnTable;
pub use word::{DeBruijnWord, Width};

/// Constant assertions related to the base requirements.
#[doc(hidden)]
mod const_asserts {
    use super::*;
    use static_assertions::const_assert;

    // Every sequence fits in the widest supported word.
    const_assert!(1u32 << sequence::MAX_ORDER == <u64 as DeBruijnWord>::BITS);

    // Bit indices of the widest table fit in its u8 elements.
    const_assert!(<u64 as DeBruijnWord>::BITS <= u8::MAX as u32);
}
