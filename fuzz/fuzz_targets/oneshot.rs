#![no_main]

use libfuzzer_sys::fuzz_target;

use sbmh::{bm_search, build_occ, build_skip, horspool_search, turbo_bm_search, M_MAX};

fuzz_target!(|data: &[u8]| {
    let Some((&needle_len, rest)) = data.split_first() else {
        return;
    };
    let needle_len = (needle_len as usize % 16).min(rest.len());
    if needle_len == 0 || needle_len > M_MAX {
        return;
    }
    let (needle, haystack) = rest.split_at(needle_len);

    let occ = build_occ(needle);
    let skip = build_skip(needle);
    let want = naive_find(needle, haystack);

    assert_eq!(horspool_search(haystack, &occ, needle), want);
    assert_eq!(bm_search(haystack, &occ, &skip, needle), want);
    assert_eq!(turbo_bm_search(haystack, &occ, &skip, needle), want);
});

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
