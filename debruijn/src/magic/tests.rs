// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.
// grcov-excl-br-start

#![cfg(test)]

use crate::magic::{from_bin_str, parse_bin_str, MagicParseError, MagicParseErrorKind};
use crate::sequence;
use crate::test_utils::{cover_auto_debug, test_auto_clone, test_for_each_type};
use crate::word::DeBruijnWord;


#[test]
fn from_bin_str_examples() {
    assert_eq!(from_bin_str::<u8>("00011101"), 0x1d);
    assert_eq!(from_bin_str::<u8>("00000000"), 0);
    assert_eq!(from_bin_str::<u8>("11111111"), u8::MAX);
    assert_eq!(from_bin_str::<u8>("10000000"), 0x80);
    assert_eq!(from_bin_str::<u16>("0000111101100101"), 0x0f65);
}

#[test]
fn from_bin_str_generated_sequences() {
    assert_eq!(from_bin_str::<u8 >(&sequence::generate(3)), 0x1d);
    assert_eq!(from_bin_str::<u16>(&sequence::generate(4)), 0x0f65);
    assert_eq!(from_bin_str::<u32>(&sequence::generate(5)), 0x07dc_d629);
    assert_eq!(from_bin_str::<u64>(&sequence::generate(6)), 0x03f7_9d71_b4cb_0a89);
}

#[test]
fn from_bin_str_matches_std_parser() {
    macro_rules! test {
        ($ty: ty) => {
            let seq = sequence::generate(<$ty as DeBruijnWord>::ORDER);
            assert_eq!(from_bin_str::<$ty>(&seq), <$ty>::from_str_radix(&seq, 2).unwrap());
            assert_eq!(format!("{:0width$b}", from_bin_str::<$ty>(&seq), width = <$ty>::BITS as usize), seq);
        };
    }
    test_for_each_type!(test, [u8, u16, u32, u64]);
}

#[test]
fn parse_bin_str_valid_examples() {
    assert_eq!(parse_bin_str::<u8>("00011101"), Ok(0x1d));
    assert_eq!(parse_bin_str::<u8>("0b00011101"), Ok(0x1d));
    assert_eq!(parse_bin_str::<u8>("0b0001_1101"), Ok(0x1d));
    assert_eq!(parse_bin_str::<u8>("11101"), Ok(0x1d));
    assert_eq!(parse_bin_str::<u8>("0"), Ok(0));
    assert_eq!(parse_bin_str::<u8>("0b1"), Ok(1));
    assert_eq!(parse_bin_str::<u8>("1111_1111"), Ok(u8::MAX));
    assert_eq!(parse_bin_str::<u16>("0b0000_1111_0110_0101"), Ok(0x0f65));
    assert_eq!(
        parse_bin_str::<u64>("0b0000001111110111100111010111000110110100110010110000101010001001"),
        Ok(0x03f7_9d71_b4cb_0a89)
    );
}

#[test]
fn parse_bin_str_agrees_with_from_bin_str() {
    macro_rules! test {
        ($ty: ty) => {
            let seq = sequence::generate(<$ty as DeBruijnWord>::ORDER);
            assert_eq!(parse_bin_str::<$ty>(&seq), Ok(from_bin_str::<$ty>(&seq)));
        };
    }
    test_for_each_type!(test, [u8, u16, u32, u64]);
}

#[test]
fn parse_bin_str_errors() {
    fn check(s: &str, kind: MagicParseErrorKind, offset: usize) {
        let err = parse_bin_str::<u8>(s).unwrap_err();
        assert_eq!(err.kind(), kind, "failed on s={:?}", s);
        assert_eq!(err.offset(), offset, "failed on s={:?}", s);
        assert_eq!(err, MagicParseError(kind, offset));
    }
    check("", MagicParseErrorKind::Empty, 0);
    check("0b", MagicParseErrorKind::Empty, 2);
    check("0b__", MagicParseErrorKind::Empty, 4);
    check("_", MagicParseErrorKind::Empty, 1);
    check("2", MagicParseErrorKind::UnexpectedCharacter, 0);
    check("0x1d", MagicParseErrorKind::UnexpectedCharacter, 1);
    check("0b0001 1101", MagicParseErrorKind::UnexpectedCharacter, 6);
    check("0001110\u{3042}", MagicParseErrorKind::UnexpectedCharacter, 7);
    check("000111010", MagicParseErrorKind::TooLong, 8);
    check("0b0001_1101_0", MagicParseErrorKind::TooLong, 12);
}

#[test]
fn parse_bin_str_max_digits() {
    macro_rules! test {
        ($ty: ty) => {
            let bits = <$ty>::BITS as usize;
            let ones = "1".repeat(bits);
            assert_eq!(parse_bin_str::<$ty>(&ones), Ok(<$ty>::MAX));
            let too_long = "1".repeat(bits + 1);
            assert_eq!(
                parse_bin_str::<$ty>(&too_long),
                Err(MagicParseError(MagicParseErrorKind::TooLong, bits))
            );
        };
    }
    test_for_each_type!(test, [u8, u16, u32, u64]);
}

#[test]
fn parse_error_impls() {
    let err = parse_bin_str::<u8>("0b0001_1201").unwrap_err();
    test_auto_clone(&err);
    cover_auto_debug(&err);
    assert_eq!(
        err.to_string(),
        "error occurred while parsing a magic constant (at byte offset 8): an unexpected character is encountered"
    );
    assert_eq!(MagicParseErrorKind::Empty.to_string(), "no binary digits are found");
    assert_eq!(MagicParseErrorKind::TooLong.to_string(), "too many binary digits");
    #[cfg(feature = "std")]
    {
        let _: &dyn std::error::Error = &err;
    }
}
