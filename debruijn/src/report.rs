// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.

#![cfg(feature = "std")]

use std::io::Write;

use crate::table::DeBruijnTable;
use crate::word::Width;


/// Writes the diagnostics block for the given width.
///
/// The block is the [`Display`](core::fmt::Display) output of
/// [`DeBruijnTable`] for the corresponding integer type.
pub fn write_report<W: Write>(out: &mut W, width: Width) -> std::io::Result<()> {
    match width {
        Width::W8  => write!(out, "{}", DeBruijnTable::<u8 >::generate()),
        Width::W16 => write!(out, "{}", DeBruijnTable::<u16>::generate()),
        Width::W32 => write!(out, "{}", DeBruijnTable::<u32>::generate()),
        Width::W64 => write!(out, "{}", DeBruijnTable::<u64>::generate()),
    }
}

/// Writes the diagnostics blocks for all widths in [`Width::ALL`].
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// debruijn::write_reports(&mut out).unwrap();
/// let out = String::from_utf8(out).unwrap();
/// assert!(out.starts_with("=== table size: 8 ===\n"));
/// ```
pub fn write_reports<W: Write>(out: &mut W) -> std::io::Result<()> {
    for width in Width::ALL {
        write_report(out, width)?;
    }
    Ok(())
}
