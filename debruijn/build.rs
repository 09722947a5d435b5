// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: Copyright (C) 2023, 2024 Tsukasa OI <floss_ssdeep@irq.a4lg.com>.

extern crate version_check as rustc;

fn main() {
    // Avoid unnecessary rebuilding.
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(debruijn_ilog2, values(\"stable\", \"unstable\", \"unstable_v1\", \"unstable_v2\", \"fallback\"))");
    println!("cargo:rustc-check-cfg=cfg(debruijn_tests_without_debug_assertions)");

    // Method: {Integer}::ilog2 (in constant context)
    //  log2: 1.55-1.64 ("int_log" unstable feature)
    // ilog2: 1.65-1.66 ("int_log" unstable feature)
    // ilog2: 1.67-     (stable)
    if rustc::is_min_version("1.67.0").unwrap_or(false) {
        println!("cargo:rustc-cfg=debruijn_ilog2=\"stable\"");
    } else if rustc::is_feature_flaggable().unwrap_or(false)
        && rustc::is_min_version("1.65.0").unwrap_or(false)
    {
        println!("cargo:rustc-cfg=debruijn_ilog2=\"unstable\"");
        println!("cargo:rustc-cfg=debruijn_ilog2=\"unstable_v2\"");
    } else if rustc::supports_feature("int_log").unwrap_or(false) {
        // Rust 1.55-
        println!("cargo:rustc-cfg=debruijn_ilog2=\"unstable\"");
        println!("cargo:rustc-cfg=debruijn_ilog2=\"unstable_v1\"");
    } else {
        println!("cargo:rustc-cfg=debruijn_ilog2=\"fallback\"");
    }
}
