//! A small CLI that times all four searchers this crate provides against
//! the same haystack, for quick ad hoc comparisons outside of the
//! `criterion` suite in `bench/`.
//!
//! Usage: `sbmh-bench [file] [needle] [iterations]`, defaulting to
//! `binary.dat`, `"I have control\n"`, and `10` respectively. The needle is
//! also appended to the haystack (preceded by a `:`) so a match is always
//! found, regardless of what the input file happens to contain.

use std::env;
use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};

use sbmh::{bm_search, build_occ, build_skip, horspool_search, turbo_bm_search, StreamFinder};

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let filename = args.next().unwrap_or_else(|| "binary.dat".to_string());
    let needle = args
        .next()
        .unwrap_or_else(|| "I have control\n".to_string())
        .into_bytes();
    let iterations: u32 = match args.next() {
        Some(s) => s.parse().context("iterations must be an integer")?,
        None => 10,
    };

    let mut data = fs::read(&filename).with_context(|| format!("reading {}", filename))?;
    data.push(b':');
    data.extend_from_slice(&needle);

    let occ = build_occ(&needle);
    let skip = build_skip(&needle);

    let mut found = data.len();
    let start = Instant::now();
    for _ in 0..iterations {
        found = bm_search(&data, &occ, &skip, &needle);
    }
    println!(
        "Boyer-Moore         : found at position {} in {} msec",
        found,
        start.elapsed().as_millis()
    );

    let start = Instant::now();
    for _ in 0..iterations {
        found = horspool_search(&data, &occ, &needle);
    }
    println!(
        "Boyer-Moore-Horspool: found at position {} in {} msec",
        found,
        start.elapsed().as_millis()
    );

    let start = Instant::now();
    for _ in 0..iterations {
        let mut finder = StreamFinder::new(&needle)?;
        finder.feed(&needle, &data, |_| {});
        found = if finder.found() {
            finder.analyzed() - needle.len()
        } else {
            finder.analyzed()
        };
    }
    println!(
        "Stream Horspool     : found at position {} in {} msec",
        found,
        start.elapsed().as_millis()
    );

    let start = Instant::now();
    for _ in 0..iterations {
        found = turbo_bm_search(&data, &occ, &skip, &needle);
    }
    println!(
        "Turbo Boyer-Moore   : found at position {} in {} msec",
        found,
        start.elapsed().as_millis()
    );

    Ok(())
}
