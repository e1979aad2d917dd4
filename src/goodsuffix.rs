use alloc::vec;
use alloc::vec::Vec;

/// Builds the good-suffix table for `needle`, as used by [`bm_search`] and
/// [`turbo_bm_search`].
///
/// `skip[i]` is the distance the search window should advance when a
/// mismatch occurs at needle index `i` (that is, `needle[i+1..]` matched the
/// haystack but `needle[i]` did not). Built from an auxiliary suffix-length
/// table in the classical two-pass way (Charras & Lecroq's formulation of
/// the Boyer-Moore good-suffix preprocessing):
///
/// 1. compute `suff[i]`, the length of the longest substring of
///    `needle[..=i]` that is also a suffix of `needle`;
/// 2. case 1: for every `i` where a prefix of `needle` is also a suffix
///    ending at `i` (`suff[i] == i + 1`), that prefix can realign the
///    needle after a mismatch anywhere to its left;
/// 3. case 2: for every `i`, the suffix `needle[i+1..]` recurs elsewhere in
///    the needle (not as a prefix), so shifting to align with that earlier
///    occurrence is safe.
///
/// [`bm_search`]: crate::bm_search
/// [`turbo_bm_search`]: crate::turbo_bm_search
///
/// # Panics
///
/// Panics if `needle` is empty.
pub fn build_skip(needle: &[u8]) -> Vec<usize> {
    assert!(!needle.is_empty(), "needle must not be empty");
    let m = needle.len();
    if m == 1 {
        return vec![1];
    }

    let suff = suffixes(needle);
    let mut skip: Vec<usize> = vec![m; m];

    // Case 1: a prefix of the needle recurs as a suffix ending at i.
    let mut j = 0;
    for i in (0..m).rev() {
        if suff[i] == i + 1 {
            while j < m - 1 - i {
                if skip[j] == m {
                    skip[j] = m - 1 - i;
                }
                j += 1;
            }
        }
    }

    // Case 2: the suffix needle[i+1..] occurs elsewhere in the needle.
    for i in 0..m - 1 {
        skip[m - 1 - suff[i]] = m - 1 - i;
    }

    skip
}

/// `suff[i]` is the length of the longest common suffix of `needle[..=i]`
/// and `needle` itself.
fn suffixes(needle: &[u8]) -> Vec<usize> {
    let m = needle.len();
    let mut suff = vec![0usize; m];
    suff[m - 1] = m;

    let mut f: usize = 0;
    let mut g: isize = m as isize - 1;
    for i in (0..m - 1).rev() {
        let i = i as isize;
        if i > g && suff[(i + m as isize - 1 - f as isize) as usize]
            < (i - g) as usize
        {
            suff[i as usize] = suff[(i + m as isize - 1 - f as isize) as usize];
        } else {
            if i < g {
                g = i;
            }
            f = i as usize;
            while g >= 0
                && needle[g as usize] == needle[(g + m as isize - 1 - f as isize) as usize]
            {
                g -= 1;
            }
            suff[i as usize] = (f as isize - g) as usize;
        }
    }
    suff
}
