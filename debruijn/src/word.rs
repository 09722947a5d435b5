// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.

//! Unsigned integer words usable as De Bruijn multipliers.

use core::fmt::{Binary, Debug, LowerHex};
use core::ops::{BitAnd, BitOr, BitXor, Shl, Shr};

use crate::utils::u32_ilog2;


mod private {
    /// A trait to constrain De Bruijn words to the built-in unsigned types.
    ///
    /// This is a sealed trait.
    pub trait SealedDeBruijnWord {}
}

/// A fixed-width unsigned integer type which a De Bruijn bit-scan table
/// can be generated for.
///
/// This trait is implemented for [`u8`], [`u16`], [`u32`] and [`u64`].
///
/// Note that this trait is intentionally designed to be non-extensible
/// (using the [sealed trait pattern](https://rust-lang.github.io/api-guidelines/future-proofing.html)).
pub trait DeBruijnWord:
    private::SealedDeBruijnWord
    + Copy
    + Eq
    + Ord
    + Debug
    + Binary
    + LowerHex
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// The width of this type in bits.
    const BITS: u32;
    /// The order of the De Bruijn sequence for this type
    /// (the base-2 logarithm of [`BITS`](Self::BITS)).
    const ORDER: u32;
    /// The right shift applied after the multiplication to obtain
    /// an [`ORDER`](Self::ORDER)-bit hash.
    const SHIFT_WIDTH: u32;
    /// The number of hexadecimal digits to represent this type.
    const HEX_DIGITS: usize;
    /// The value zero.
    const ZERO: Self;
    /// The value one.
    const ONE: Self;

    /// Wrapping (modular) multiplication.
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Wrapping (modular) negation.
    fn wrapping_neg(self) -> Self;
    /// Returns the number of trailing zeros.
    fn trailing_zeros(self) -> u32;
    /// Converts a small value (less than [`BITS`](Self::BITS)) to [`usize`].
    fn as_usize(self) -> usize;
}

/// Template to implement [`DeBruijnWord`] including constant assertions.
macro_rules! debruijn_word_template {
    { $($ty: ty;)* } => {
        $(
            impl private::SealedDeBruijnWord for $ty {}
            impl DeBruijnWord for $ty {
                const BITS: u32 = <$ty>::BITS;
                const ORDER: u32 = u32_ilog2(<$ty>::BITS);
                const SHIFT_WIDTH: u32 = <$ty>::BITS - u32_ilog2(<$ty>::BITS);
                const HEX_DIGITS: usize = core::mem::size_of::<$ty>() * 2;
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline(always)]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$ty>::wrapping_mul(self, rhs)
                }
                #[inline(always)]
                fn wrapping_neg(self) -> Self {
                    <$ty>::wrapping_neg(self)
                }
                #[inline(always)]
                fn trailing_zeros(self) -> u32 {
                    <$ty>::trailing_zeros(self)
                }
                #[inline(always)]
                fn as_usize(self) -> usize {
                    debug_assert!(self < <$ty>::BITS as $ty);
                    self as usize
                }
            }
        )*

        /// Constant assertions related to De Bruijn words.
        #[doc(hidden)]
        mod const_asserts {
            use super::*;
            use static_assertions::const_assert;

            $(
                // The width is a power of two, so that the order is exact.
                const_assert!(<$ty as DeBruijnWord>::BITS.is_power_of_two());
                const_assert!(1u32 << <$ty as DeBruijnWord>::ORDER == <$ty as DeBruijnWord>::BITS);
                const_assert!(
                    <$ty as DeBruijnWord>::ORDER + <$ty as DeBruijnWord>::SHIFT_WIDTH
                        == <$ty as DeBruijnWord>::BITS
                );
                // The sequence generator covers this order.
                const_assert!(<$ty as DeBruijnWord>::ORDER >= 1);
                const_assert!(<$ty as DeBruijnWord>::ORDER <= crate::sequence::MAX_ORDER);
                // Each hexadecimal digit represents 4 bits.
                const_assert!(<$ty as DeBruijnWord>::HEX_DIGITS * 4 == <$ty as DeBruijnWord>::BITS as usize);
                // 1-based bit indices are stored as u8.
                const_assert!(<$ty as DeBruijnWord>::BITS <= u8::MAX as u32);
            )*
        }
    };
}

debruijn_word_template! {
    u8;
    u16;
    u32;
    u64;
}


/// A width of the unsigned integer to generate a table for.
///
/// This is the value-level counterpart of [`DeBruijnWord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    /// 8 bits ([`u8`]).
    W8,
    /// 16 bits ([`u16`]).
    W16,
    /// 32 bits ([`u32`]).
    W32,
    /// 64 bits ([`u64`]).
    W64,
}

impl Width {
    /// All supported widths, in the order of the report.
    pub const ALL: [Width; 4] = [Width::W8, Width::W16, Width::W32, Width::W64];

    /// Returns the width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Width::W8  => <u8  as DeBruijnWord>::BITS,
            Width::W16 => <u16 as DeBruijnWord>::BITS,
            Width::W32 => <u32 as DeBruijnWord>::BITS,
            Width::W64 => <u64 as DeBruijnWord>::BITS,
        }
    }

    /// Returns the order of the De Bruijn sequence for this width.
    pub const fn order(self) -> u32 {
        u32_ilog2(self.bits())
    }
}
