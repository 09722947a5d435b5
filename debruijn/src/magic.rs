// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.

//! Conversion from a binary sequence string to a magic constant.

use crate::word::DeBruijnWord;


/// Converts a De Bruijn sequence made by
/// [`sequence::generate()`](crate::sequence::generate())
/// to the magic constant.
///
/// The string is interpreted as a big-endian binary literal.
/// Characters other than `'1'` are treated as `'0'` and excess leading
/// bits are shifted out.  Use [`parse_bin_str()`] for strings from other
/// sources.
///
/// # Example
///
/// ```
/// assert_eq!(debruijn::magic::from_bin_str::<u8>("00011101"), 0x1d);
/// ```
pub fn from_bin_str<T: DeBruijnWord>(s: &str) -> T {
    debug_assert!(s.len() == T::BITS as usize);
    s.bytes().fold(T::ZERO, |value, ch| {
        (value << 1) | if ch == b'1' { T::ONE } else { T::ZERO }
    })
}


/// An enumeration representing a cause of a magic constant parse error.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagicParseErrorKind {
    /// The string has no binary digits.
    Empty,
    /// A character other than `'0'`, `'1'` and `'_'` is encountered.
    UnexpectedCharacter,
    /// The string has more binary digits than the target type.
    TooLong,
}

impl core::fmt::Display for MagicParseErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self { // grcov-excl-br-line:MATCH_ENUM
            MagicParseErrorKind::Empty               => "no binary digits are found",
            MagicParseErrorKind::UnexpectedCharacter => "an unexpected character is encountered",
            MagicParseErrorKind::TooLong             => "too many binary digits",
        })
    }
}


// grcov-excl-br-start:STRUCT_MEMBER

/// The error type for [`parse_bin_str()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicParseError(
    pub(crate) MagicParseErrorKind,
    pub(crate) usize
);

// grcov-excl-br-end

impl MagicParseError {
    /// Returns the cause of the error.
    pub fn kind(&self) -> MagicParseErrorKind { self.0 }
    /// Returns the byte offset which caused the error.
    ///
    /// On [`MagicParseErrorKind::Empty`], this is the length of the string.
    pub fn offset(&self) -> usize { self.1 }
}

impl core::fmt::Display for MagicParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "error occurred while parsing a magic constant (at byte offset {1}): {0}",
            self.kind(),
            self.offset()
        )
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "unstable", doc(cfg(feature = "std")))]
impl std::error::Error for MagicParseError {}


/// Parses a binary literal into a magic constant.
///
/// An optional `0b` prefix and `_` digit separators are accepted.
/// Shorter literals are zero-extended.
///
/// # Example
///
/// ```
/// use debruijn::magic::{parse_bin_str, MagicParseErrorKind};
///
/// assert_eq!(parse_bin_str::<u8>("0b0001_1101"), Ok(0x1d));
/// let err = parse_bin_str::<u8>("0b0001_1201").unwrap_err();
/// assert_eq!(err.kind(), MagicParseErrorKind::UnexpectedCharacter);
/// assert_eq!(err.offset(), 8);
/// ```
pub fn parse_bin_str<T: DeBruijnWord>(s: &str) -> Result<T, MagicParseError> {
    let start = if s.starts_with("0b") { 2 } else { 0 };
    let mut value = T::ZERO;
    let mut digits = 0u32;
    for (offset, ch) in s.bytes().enumerate().skip(start) {
        let bit = match ch {
            b'0' => T::ZERO,
            b'1' => T::ONE,
            b'_' => continue,
            _ => return Err(MagicParseError(MagicParseErrorKind::UnexpectedCharacter, offset)),
        };
        if digits == T::BITS {
            return Err(MagicParseError(MagicParseErrorKind::TooLong, offset));
        }
        value = (value << 1) | bit;
        digits += 1;
    }
    if digits == 0 {
        return Err(MagicParseError(MagicParseErrorKind::Empty, s.len()));
    }
    Ok(value)
}


mod tests;
