/*!
The `sbmh` crate provides a streaming Boyer-Moore-Horspool substring search.

Most substring search libraries assume the whole haystack is available up
front. This crate is built around the opposite case: a haystack that arrives
in arbitrarily sized chunks (a socket, a file read in blocks, a decompression
pipeline) where the needle may straddle the boundary between two chunks. The
[`StreamContext`]/[`StreamFinder`] types track just enough state (a bad-
character table and a lookbehind buffer of at most `needle.len() - 1` bytes)
to detect a match without ever buffering the whole stream.

The crate also provides three one-shot searchers that share the same
preprocessing and operate on a fully materialized haystack:

- [`horspool_search`], the classical single-pass Boyer-Moore-Horspool scan.
- [`bm_search`], full Boyer-Moore with a good-suffix table, typically faster
  on longer needles with many repeated bytes.
- [`turbo_bm_search`], the Turbo Boyer-Moore variant, which remembers part of
  the previous match to avoid re-scanning known-good bytes.

None of these do Unicode-aware matching, regular expressions, or multi-needle
search; they find the first byte-for-byte occurrence of one needle in one
haystack (or stream) and stop.
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/sbmh/0.1.0")]

// Supporting 8-bit (or others) would be fine, but the occurrence table and
// lookbehind sizing below assume a pointer-sized usize wide enough to hold
// M_MAX. If you need it, please submit a bug report.
#[cfg(not(any(
    target_pointer_width = "16",
    target_pointer_width = "32",
    target_pointer_width = "64"
)))]
compile_error!("sbmh currently not supported on non-{16,32,64}");

// `alloc` backs `Vec`-based preprocessing tables (`build_skip`, the
// streaming context's owning wrapper) regardless of whether the `std`
// feature is enabled; it's always available alongside `std`.
extern crate alloc;

pub use crate::error::InitError;
pub use crate::goodsuffix::build_skip;
pub use crate::occurrence::{build_occ, M_MAX};
pub use crate::onepass::{bm_search, horspool_search, turbo_bm_search};
pub use crate::stream::{context_size, StreamContext};

#[cfg(feature = "std")]
pub use crate::stream::StreamFinder;

mod error;
mod goodsuffix;
mod occurrence;
mod onepass;
mod stream;

#[cfg(test)]
mod tests;
