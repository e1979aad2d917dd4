//! Synthesized benchmark corpora.
//!
//! The upstream benchmark harness this crate's suite is modeled on ships a
//! `data/` directory of real-world text corpora (Sherlock Holmes, movie
//! subtitles, dictionaries) loaded with `include_bytes!`. That data isn't
//! available here, so these corpora are generated in code instead: a short
//! haystack, a medium one repeating a short phrase, and a pathological one
//! built to make the bad-character shift degenerate to one byte at a time.

/// A few hundred bytes of ordinary English-ish text with one rare needle
/// occurrence near the end.
pub fn short_text() -> Vec<u8> {
    let mut v = Vec::new();
    for _ in 0..20 {
        v.extend_from_slice(b"the quick brown fox jumps over the lazy dog. ");
    }
    v.extend_from_slice(b"sphinx of black quartz, judge my vow.");
    v
}

/// A few hundred kilobytes built by repeating a short phrase, simulating a
/// long haystack with a common (but not needle-colliding) structure.
pub fn medium_repetitive() -> Vec<u8> {
    let mut v = Vec::with_capacity(1 << 18);
    while v.len() < (1 << 18) {
        v.extend_from_slice(b"mississippi river delta sediment deposition patterns vary. ");
    }
    v
}

/// A haystack built entirely out of one byte repeated, the worst case for
/// the bad-character heuristic: every comparison advances the window by
/// exactly one byte until the final, planted occurrence.
pub fn pathological_repeat(len: usize) -> Vec<u8> {
    vec![b'a'; len]
}
