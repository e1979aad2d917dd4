/// Finds the first occurrence of `needle` in `haystack` using classical
/// Boyer-Moore-Horspool, given a precomputed occurrence table.
///
/// Returns the zero-based offset of the match, or `haystack.len()` if the
/// needle does not occur. `occ` must have been built from `needle` via
/// [`build_occ`](crate::build_occ).
///
/// A single-byte needle is dispatched to a scalar byte scan rather than
/// running the (degenerate, but still correct) Horspool loop, since every
/// occurrence entry is `1` in that case and the loop would just walk one
/// byte at a time anyway.
pub fn horspool_search(
    haystack: &[u8],
    occ: &[usize; 256],
    needle: &[u8],
) -> usize {
    let n = haystack.len();
    let m = needle.len();
    if m > n {
        return n;
    }
    if m == 1 {
        return match haystack.iter().position(|&b| b == needle[0]) {
            Some(i) => i,
            None => n,
        };
    }

    let last = needle[m - 1];
    let mut p = 0;
    while p <= n - m {
        let c = haystack[p + m - 1];
        if c == last && haystack[p..p + m - 1] == needle[..m - 1] {
            return p;
        }
        p += occ[c as usize];
    }
    n
}

/// The number of trailing bytes of `needle` that match the window of
/// `haystack` starting at `pos`, scanning right to left and stopping at the
/// first mismatch (or at a full match, `needle.len()`).
fn backwards_match_len(needle: &[u8], haystack: &[u8], pos: usize) -> usize {
    let m = needle.len();
    let mut l = 0;
    while l < m && haystack[pos + m - 1 - l] == needle[m - 1 - l] {
        l += 1;
    }
    l
}

/// Finds the first occurrence of `needle` in `haystack` using full
/// Boyer-Moore with both the bad-character and good-suffix heuristics.
///
/// `occ` and `skip` must have been built from `needle` via
/// [`build_occ`](crate::build_occ) and [`build_skip`](crate::build_skip)
/// respectively. Returns the zero-based offset of the match, or
/// `haystack.len()` if the needle does not occur.
pub fn bm_search(
    haystack: &[u8],
    occ: &[usize; 256],
    skip: &[usize],
    needle: &[u8],
) -> usize {
    let n = haystack.len();
    let m = needle.len();
    if m > n {
        return n;
    }
    if m == 1 {
        return match haystack.iter().position(|&b| b == needle[0]) {
            Some(i) => i,
            None => n,
        };
    }

    let mut p = 0;
    while p <= n - m {
        let l = backwards_match_len(needle, haystack, p);
        if l == m {
            return p;
        }
        let mismatch_idx = m - 1 - l;
        let c = haystack[p + mismatch_idx];
        let bc_shift = occ[c as usize] as isize - l as isize;
        let gc_shift = skip[mismatch_idx] as isize;
        p += core::cmp::max(gc_shift, bc_shift) as usize;
    }
    n
}

/// Finds the first occurrence of `needle` in `haystack` using the Turbo
/// Boyer-Moore variant, which additionally remembers the length of the
/// previous match to avoid re-comparing bytes already known to match.
///
/// `occ` and `skip` must have been built from `needle` via
/// [`build_occ`](crate::build_occ) and [`build_skip`](crate::build_skip)
/// respectively. Returns the zero-based offset of the match, or
/// `haystack.len()` if the needle does not occur.
pub fn turbo_bm_search(
    haystack: &[u8],
    occ: &[usize; 256],
    skip: &[usize],
    needle: &[u8],
) -> usize {
    let n = haystack.len();
    let m = needle.len();
    if m > n {
        return n;
    }
    if m == 1 {
        return match haystack.iter().position(|&b| b == needle[0]) {
            Some(i) => i,
            None => n,
        };
    }

    let mut p: usize = 0;
    let mut shift: usize = m;
    let mut u: usize = 0;
    while p <= n - m {
        let l = if u == 0 {
            backwards_match_len(needle, haystack, p)
        } else {
            // The previous shift proved `u` bytes already match; only the
            // first `shift` bytes need re-checking. If those check out in
            // full, the `u` known bytes are skipped without comparison and
            // the remaining prefix is compared the rest of the way.
            let bounded = backwards_match_len_bounded(needle, haystack, p, shift);
            if bounded < shift {
                bounded
            } else {
                shift
                    + u
                    + backwards_match_len_from(
                        needle,
                        haystack,
                        p,
                        shift + u,
                        m - shift - u,
                    )
            }
        };
        if l == m {
            return p;
        }
        let mismatch_idx = m - 1 - l;
        let c = haystack[p + mismatch_idx];
        let bc_shift = occ[c as usize] as isize - l as isize;
        let gc_shift = skip[mismatch_idx] as isize;
        let turbo_shift = u as isize - l as isize;
        let mut s = core::cmp::max(core::cmp::max(turbo_shift, bc_shift), gc_shift);
        if s < 1 {
            s = 1;
        }
        if s == gc_shift {
            u = core::cmp::min(m - s as usize, l);
        } else {
            if turbo_shift < bc_shift {
                s = core::cmp::max(s, u as isize + 1);
            }
            u = 0;
        }
        shift = s as usize;
        p += shift;
    }
    n
}

/// Compares at most `bound` trailing bytes of the window at `pos`, right to
/// left, stopping early on mismatch. Used by the Turbo variant to re-verify
/// only the bytes it cannot yet assume match.
fn backwards_match_len_bounded(
    needle: &[u8],
    haystack: &[u8],
    pos: usize,
    bound: usize,
) -> usize {
    let m = needle.len();
    let mut l = 0;
    while l < bound && haystack[pos + m - 1 - l] == needle[m - 1 - l] {
        l += 1;
    }
    l
}

/// Continues a backward comparison that already matched `skip` bytes
/// (assumed from the previous shift) by comparing up to `extra` additional
/// bytes immediately to their left.
fn backwards_match_len_from(
    needle: &[u8],
    haystack: &[u8],
    pos: usize,
    skip: usize,
    extra: usize,
) -> usize {
    let m = needle.len();
    let mut l = 0;
    while l < extra
        && haystack[pos + m - 1 - skip - l] == needle[m - 1 - skip - l]
    {
        l += 1;
    }
    l
}
