use quickcheck::quickcheck;

use crate::{bm_search, build_occ, build_skip, horspool_search, turbo_bm_search, M_MAX};

quickcheck! {
    fn qc_horspool_matches_naive(needle: Vec<u8>, haystack: Vec<u8>) -> bool {
        prop_matches_naive(&needle, &haystack, |n, occ, _skip, h| {
            horspool_search(h, occ, n)
        })
    }

    fn qc_bm_matches_naive(needle: Vec<u8>, haystack: Vec<u8>) -> bool {
        prop_matches_naive(&needle, &haystack, |n, occ, skip, h| {
            bm_search(h, occ, skip, n)
        })
    }

    fn qc_turbo_bm_matches_naive(needle: Vec<u8>, haystack: Vec<u8>) -> bool {
        prop_matches_naive(&needle, &haystack, |n, occ, skip, h| {
            turbo_bm_search(h, occ, skip, n)
        })
    }
}

/// Checks that a one-shot searcher agrees with naive search on every
/// (needle, haystack) pair quickcheck throws at it, skipping the empty
/// needle (out of contract for the one-shot searchers) and anything longer
/// than `M_MAX` (out of contract for the preprocessing tables).
fn prop_matches_naive(
    needle: &[u8],
    haystack: &[u8],
    mut search: impl FnMut(&[u8], &[usize; 256], &[usize], &[u8]) -> usize,
) -> bool {
    if needle.is_empty() || needle.len() > M_MAX {
        return true;
    }
    let occ = build_occ(needle);
    let skip = build_skip(needle);
    search(needle, &occ, &skip, haystack) == naive_find(needle, haystack)
}

fn naive_find(needle: &[u8], haystack: &[u8]) -> usize {
    let m = needle.len();
    let n = haystack.len();
    if m > n {
        return n;
    }
    for i in 0..=(n - m) {
        if &haystack[i..i + m] == needle {
            return i;
        }
    }
    n
}
