// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.

use std::io::Write;
use std::process;

fn main() {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = debruijn::write_reports(&mut out).and_then(|_| out.flush());
    if let Err(err) = result {
        eprintln!("debruijn: failed to write the tables: {}", err);
        process::exit(1);
    }
}
