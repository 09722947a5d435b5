// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.
// grcov-excl-br-start

#![cfg(test)]

use itertools::Itertools;

use crate::hash::{debruijn_hash, isolate_highest_bit, isolate_lowest_bit};
use crate::magic::from_bin_str;
use crate::sequence;
use crate::test_utils::test_for_each_type;
use crate::word::DeBruijnWord;


#[test]
fn isolate_bits_examples() {
    assert_eq!(isolate_lowest_bit(0u8), 0);
    assert_eq!(isolate_lowest_bit(0b0110_1000u8), 0b0000_1000);
    assert_eq!(isolate_lowest_bit(u64::MAX), 1);
    assert_eq!(isolate_highest_bit(0u8), 0);
    assert_eq!(isolate_highest_bit(0b0110_1000u8), 0b0100_0000);
    assert_eq!(isolate_highest_bit(u64::MAX), 1u64 << 63);
    assert_eq!(isolate_highest_bit(1u32), 1);
}

#[test]
fn isolate_bits_all_u8_and_u16() {
    macro_rules! test {
        ($ty: ty) => {
            for x in <$ty>::MIN..=<$ty>::MAX {
                if x == 0 {
                    assert_eq!(isolate_lowest_bit(x), 0);
                    assert_eq!(isolate_highest_bit(x), 0);
                    continue;
                }
                assert_eq!(isolate_lowest_bit(x), (1 as $ty) << x.trailing_zeros(), "failed on x={}", x);
                assert_eq!(isolate_highest_bit(x), (1 as $ty) << (<$ty>::BITS - 1 - x.leading_zeros()),
                    "failed on x={}", x);
            }
        };
    }
    test_for_each_type!(test, [u8, u16]);
}

#[test]
fn isolate_bits_single_bits_are_fixed_points() {
    macro_rules! test {
        ($ty: ty) => {
            for shift in 0..<$ty>::BITS {
                let x: $ty = 1 << shift;
                assert_eq!(isolate_lowest_bit(x), x, "failed on shift={}", shift);
                assert_eq!(isolate_highest_bit(x), x, "failed on shift={}", shift);
            }
        };
    }
    test_for_each_type!(test, [u8, u16, u32, u64]);
}

#[test]
fn hash_examples_u8() {
    // magic = 0b00011101
    const EXPECTED: [usize; 8] = [0, 1, 3, 7, 6, 5, 2, 4];
    for (shift, &expected) in EXPECTED.iter().enumerate() {
        assert_eq!(debruijn_hash(1u8 << shift, 0x1d), expected, "failed on shift={}", shift);
    }
}

#[test]
fn hash_is_bijective_for_generated_magic() {
    macro_rules! test {
        ($ty: ty) => {
            let magic: $ty = from_bin_str(&sequence::generate(<$ty as DeBruijnWord>::ORDER));
            let hashes = (0..<$ty>::BITS)
                .map(|shift| debruijn_hash((1 as $ty) << shift, magic))
                .collect::<Vec<_>>();
            assert!(hashes.iter().all_unique(), "failed on magic={:#x}", magic);
            assert_eq!(hashes.iter().copied().sorted().collect::<Vec<_>>(),
                (0..(<$ty>::BITS as usize)).collect::<Vec<_>>());
        };
    }
    test_for_each_type!(test, [u8, u16, u32, u64]);
}

#[test]
fn hash_is_always_in_range() {
    macro_rules! test {
        ($ty: ty) => {
            let bits = <$ty>::BITS as usize;
            for magic in [0 as $ty, 1, 0x1d, 0x55, <$ty>::MAX] {
                for shift in 0..<$ty>::BITS {
                    assert!(debruijn_hash((1 as $ty) << shift, magic) < bits);
                }
                assert!(debruijn_hash(<$ty>::MAX, magic) < bits);
            }
        };
    }
    test_for_each_type!(test, [u8, u16, u32, u64]);
}

#[test]
fn hash_depends_only_on_lowest_bit() {
    let magic: u16 = from_bin_str(&sequence::generate(4));
    for x in 1..=u16::MAX {
        assert_eq!(debruijn_hash(x, magic), debruijn_hash(isolate_lowest_bit(x), magic),
            "failed on x={}", x);
    }
}

#[test]
fn hash_non_debruijn_magic_collides() {
    // 0xff is not a De Bruijn sequence: 1 and 2 both hash to 7.
    assert_eq!(debruijn_hash(1u8, 0xff), 7);
    assert_eq!(debruijn_hash(2u8, 0xff), 7);
}
