// SPDX-License-Identifier: CC0-1.0
// SPDX-FileCopyrightText: Authored by Tsukasa OI <floss_ssdeep@irq.a4lg.com> in 2023 and 2024


/// Computes the base-2 logarithm (floored) of an [`u32`] value.
///
/// This is the wrapper with fallbacks for stable [`u32::ilog2`] and
/// usable in the constant context.
///
/// # Development Notes
///
/// Consider removing it once MSRV of 1.67 is acceptable.
#[inline(always)]
pub(crate) const fn u32_ilog2(value: u32) -> u32 {
    cfg_if::cfg_if! {
        if #[cfg(debruijn_ilog2 = "fallback")] {
            {
                // Equiv: library/core/src/num/nonzero.rs (Rust 1.67)
                debug_assert!(value != 0u32);
                u32::BITS - 1 - value.leading_zeros()
            }
        }
        else if #[cfg(debruijn_ilog2 = "unstable_v1")] {
            u32::log2(value)
        }
        else {
            u32::ilog2(value)
        }
    }
}
