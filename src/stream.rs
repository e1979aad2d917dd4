use crate::error::InitError;
use crate::occurrence::{build_occ, M_MAX};

/// The number of bytes a caller-supplied lookbehind buffer must have for a
/// needle of length `m`, for use with [`StreamContext::new`].
///
/// This is `m.saturating_sub(1)`: the lookbehind never needs to hold the
/// needle's final byte, since once a candidate window is fully covered by
/// previously analyzed data the search would already have reported a match
/// or ruled that window out.
pub fn context_size(m: usize) -> usize {
    m.saturating_sub(1)
}

/// Runs one `feed` step against whichever backing storage (borrowed or
/// owned) holds the lookbehind buffer. Shared by [`StreamContext::feed`] and
/// [`StreamFinder::feed`] so the two wrapper types don't duplicate the
/// straddling-scan logic.
fn feed_impl(
    occ: &[usize; 256],
    needle: &[u8],
    needle_len: usize,
    lookbehind: &mut [u8],
    lookbehind_size: &mut usize,
    analyzed: &mut usize,
    found: &mut bool,
    data: &[u8],
    mut sink: impl FnMut(&[u8]),
) -> usize {
    if *found {
        return 0;
    }

    let char_at = |lookbehind: &[u8], lookbehind_size: usize, data: &[u8], pos: isize| -> u8 {
        if pos < 0 {
            lookbehind[(lookbehind_size as isize + pos) as usize]
        } else {
            data[pos as usize]
        }
    };
    let compare = |lookbehind: &[u8],
                    lookbehind_size: usize,
                    data: &[u8],
                    pos: isize,
                    len: usize|
     -> bool {
        (0..len as isize).all(|i| {
            char_at(lookbehind, lookbehind_size, data, pos + i) == needle[i as usize]
        })
    };

    let m = needle_len as isize;
    let len = data.len() as isize;
    let last = needle[needle_len - 1];

    let mut p: isize = -(*lookbehind_size as isize);

    if p < 0 {
        // Phase A: straddling scan, comparing against both the retained
        // lookbehind and this feed's data.
        while p < 0 && p <= len - m {
            let ch = char_at(lookbehind, *lookbehind_size, data, p + m - 1);
            if ch == last && compare(lookbehind, *lookbehind_size, data, p, needle_len - 1) {
                // Everything in the lookbehind strictly before the match
                // start was skipped over or already tried by the straddling
                // scan, so it's provably not part of any match.
                let match_start_in_lb = (*lookbehind_size as isize + p) as usize;
                if match_start_in_lb > 0 {
                    sink(&lookbehind[..match_start_in_lb]);
                }
                *found = true;
                *lookbehind_size = 0;
                let consumed = (p + m) as usize;
                *analyzed += consumed;
                return consumed;
            }
            p += occ[ch as usize] as isize;
        }

        if p >= 0 {
            // The window moved entirely into `data`; the lookbehind is now
            // proven not to overlap any match.
            if *lookbehind_size > 0 {
                sink(&lookbehind[..*lookbehind_size]);
            }
            *lookbehind_size = 0;
        } else {
            // Still short of `data` by the time the window ran out of
            // room; fold the unneeded lookbehind prefix into the sink and
            // retain the rest alongside this entire feed.
            let cutoff = (*lookbehind_size as isize + p) as usize;
            if cutoff > 0 {
                sink(&lookbehind[..cutoff]);
            }
            let remaining = *lookbehind_size - cutoff;
            lookbehind.copy_within(cutoff..*lookbehind_size, 0);
            let len_u = data.len();
            debug_assert!(remaining + len_u < needle_len);
            lookbehind[remaining..remaining + len_u].copy_from_slice(data);
            *lookbehind_size = remaining + len_u;
            *analyzed += len_u;
            return len_u;
        }
    }

    // Phase B: in-buffer scan, lookbehind drained.
    debug_assert_eq!(*lookbehind_size, 0);
    while p <= len - m {
        let pu = p as usize;
        let ch = data[pu + needle_len - 1];
        if ch == last && data[pu..pu + needle_len - 1] == needle[..needle_len - 1] {
            *found = true;
            let consumed = pu + needle_len;
            *analyzed += consumed;
            if pu > 0 {
                sink(&data[..pu]);
            }
            return consumed;
        }
        p += occ[ch as usize] as isize;
    }

    // Phase C: tail retention. `p` never exceeds `len` here, since every
    // step above added at most `needle_len` while `p` was still `<= len -
    // needle_len`.
    let len_u = data.len();
    let p_usize = p as usize;
    if p_usize > 0 {
        sink(&data[..p_usize]);
    }
    let mut q = p_usize;
    while q < len_u {
        let tail_len = len_u - q;
        if data[q..len_u] == needle[..tail_len] {
            break;
        }
        sink(&data[q..q + 1]);
        q += 1;
    }
    let remaining = len_u - q;
    debug_assert!(remaining < needle_len);
    lookbehind[..remaining].copy_from_slice(&data[q..len_u]);
    *lookbehind_size = remaining;
    *analyzed += len_u;
    len_u
}

fn check_needle(needle_len: usize) -> Result<(), InitError> {
    if needle_len == 0 {
        return Err(InitError::EmptyNeedle);
    }
    if needle_len > M_MAX {
        return Err(InitError::NeedleTooLong {
            len: needle_len,
            max: M_MAX,
        });
    }
    Ok(())
}

/// A streaming Boyer-Moore-Horspool search context that borrows its
/// lookbehind buffer from the caller.
///
/// This is the `no_std`-friendly, zero-allocation form: the caller owns the
/// byte buffer (stack array, arena slot, or a heap allocation it manages
/// itself) and is responsible for sizing it via [`context_size`]. See
/// [`StreamFinder`] for an owning convenience wrapper on `std`.
///
/// A context is bound to one needle for its lifetime: every call to
/// [`feed`](StreamContext::feed) must pass the same needle bytes that were
/// given to [`new`](StreamContext::new) (checked with `debug_assert!` in
/// debug builds; passing a different needle is a contract violation with
/// unspecified, but memory-safe, results in release builds).
pub struct StreamContext<'b> {
    occ: [usize; 256],
    lookbehind: &'b mut [u8],
    lookbehind_size: usize,
    analyzed: usize,
    found: bool,
    needle_len: usize,
}

impl<'b> StreamContext<'b> {
    /// Builds a context for `needle`, using `lookbehind` as scratch space.
    ///
    /// `lookbehind` must be at least [`context_size(needle.len())`]
    /// [`context_size`] bytes long; it need not be zeroed.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::EmptyNeedle`] if `needle` is empty,
    /// [`InitError::NeedleTooLong`] if it exceeds [`M_MAX`](crate::M_MAX),
    /// or [`InitError::BufferTooSmall`] if `lookbehind` is undersized.
    pub fn new(needle: &[u8], lookbehind: &'b mut [u8]) -> Result<Self, InitError> {
        check_needle(needle.len())?;
        let needed = context_size(needle.len());
        if lookbehind.len() < needed {
            return Err(InitError::BufferTooSmall {
                needed,
                got: lookbehind.len(),
            });
        }
        Ok(StreamContext {
            occ: build_occ(needle),
            lookbehind,
            lookbehind_size: 0,
            analyzed: 0,
            found: false,
            needle_len: needle.len(),
        })
    }

    /// Clears `found`, `analyzed`, and the lookbehind, but keeps the
    /// occurrence table, so the same context can be reused against a fresh
    /// haystack for the same needle.
    pub fn reset(&mut self) {
        self.found = false;
        self.analyzed = 0;
        self.lookbehind_size = 0;
    }

    /// Feeds the next chunk of haystack data into the search.
    ///
    /// `needle` must be byte-identical to the needle this context was built
    /// from. Bytes proven not to participate in any match (because the
    /// Horspool shift skipped past them, or because the lookbehind they once
    /// occupied has been superseded) are passed to `sink` in haystack order,
    /// before `feed` returns.
    ///
    /// Returns the number of bytes of `data` logically consumed: either
    /// `data.len()` (no match completed in this feed) or the offset one past
    /// the match's last byte (a match completed). Once a match has been
    /// found, every subsequent call is a no-op that returns `0`.
    pub fn feed(&mut self, needle: &[u8], data: &[u8], sink: impl FnMut(&[u8])) -> usize {
        debug_assert_eq!(needle.len(), self.needle_len);
        feed_impl(
            &self.occ,
            needle,
            self.needle_len,
            self.lookbehind,
            &mut self.lookbehind_size,
            &mut self.analyzed,
            &mut self.found,
            data,
            sink,
        )
    }

    /// Whether a match has been found (and, consequently, whether further
    /// `feed` calls will be no-ops).
    pub fn found(&self) -> bool {
        self.found
    }

    /// The total number of haystack bytes consumed across all feeds so far.
    pub fn analyzed(&self) -> usize {
        self.analyzed
    }

    /// The number of bytes currently retained in the lookbehind buffer.
    pub fn lookbehind_size(&self) -> usize {
        self.lookbehind_size
    }

    #[cfg(test)]
    pub(crate) fn lookbehind_bytes(&self) -> &[u8] {
        &self.lookbehind[..self.lookbehind_size]
    }
}

/// An owning, `std`-only convenience wrapper around [`StreamContext`] that
/// allocates its own lookbehind buffer once at construction.
///
/// Prefer this over the borrowed [`StreamContext`] unless you're in a
/// `no_std` environment or already manage a buffer arena of your own.
#[cfg(feature = "std")]
pub struct StreamFinder {
    occ: [usize; 256],
    lookbehind: alloc::boxed::Box<[u8]>,
    lookbehind_size: usize,
    analyzed: usize,
    found: bool,
    needle_len: usize,
}

#[cfg(feature = "std")]
impl StreamFinder {
    /// Builds a finder for `needle`, allocating its own lookbehind buffer.
    ///
    /// # Errors
    ///
    /// Returns [`InitError::EmptyNeedle`] if `needle` is empty, or
    /// [`InitError::NeedleTooLong`] if it exceeds [`M_MAX`](crate::M_MAX).
    pub fn new(needle: &[u8]) -> Result<Self, InitError> {
        check_needle(needle.len())?;
        let lookbehind = alloc::vec![0u8; context_size(needle.len())].into_boxed_slice();
        Ok(StreamFinder {
            occ: build_occ(needle),
            lookbehind,
            lookbehind_size: 0,
            analyzed: 0,
            found: false,
            needle_len: needle.len(),
        })
    }

    /// See [`StreamContext::reset`].
    pub fn reset(&mut self) {
        self.found = false;
        self.analyzed = 0;
        self.lookbehind_size = 0;
    }

    /// See [`StreamContext::feed`].
    pub fn feed(&mut self, needle: &[u8], data: &[u8], sink: impl FnMut(&[u8])) -> usize {
        debug_assert_eq!(needle.len(), self.needle_len);
        feed_impl(
            &self.occ,
            needle,
            self.needle_len,
            &mut self.lookbehind,
            &mut self.lookbehind_size,
            &mut self.analyzed,
            &mut self.found,
            data,
            sink,
        )
    }

    /// See [`StreamContext::found`].
    pub fn found(&self) -> bool {
        self.found
    }

    /// See [`StreamContext::analyzed`].
    pub fn analyzed(&self) -> usize {
        self.analyzed
    }

    /// See [`StreamContext::lookbehind_size`].
    pub fn lookbehind_size(&self) -> usize {
        self.lookbehind_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn run_whole(needle: &[u8], chunks: &[&[u8]]) -> (Option<usize>, Vec<u8>, usize) {
        let mut buf = alloc::vec![0u8; context_size(needle.len())];
        let mut ctx = StreamContext::new(needle, &mut buf).unwrap();
        let mut unmatched = Vec::new();
        let mut offset = 0usize;
        let mut found_at = None;
        for chunk in chunks {
            let consumed = ctx.feed(needle, chunk, |bytes| unmatched.extend_from_slice(bytes));
            if ctx.found() && found_at.is_none() {
                found_at = Some(offset + consumed - needle.len());
            }
            offset += consumed;
            if ctx.found() {
                break;
            }
        }
        (found_at, unmatched, ctx.lookbehind_size())
    }

    #[test]
    fn match_within_a_single_chunk() {
        let (found, unmatched, lb) = run_whole(b"needle", &[b"hay needle stack"]);
        assert_eq!(found, Some(4));
        assert_eq!(&unmatched[..], b"hay ");
        assert_eq!(lb, 0);
    }

    #[test]
    fn match_straddling_two_chunks() {
        // "needle" split as "hay nee" | "dle stack"
        let (found, unmatched, lb) = run_whole(b"needle", &[b"hay nee", b"dle stack"]);
        assert_eq!(found, Some(4));
        assert_eq!(&unmatched[..], b"hay ");
        assert_eq!(lb, 0);
    }

    #[test]
    fn straddling_match_flushes_lookbehind_bytes_before_the_match() {
        // "bbac" found at offset 4 of "baabbbacccccbbbbba", with the match
        // itself straddling across a chunk boundary inside the lookbehind.
        let (found, unmatched, _) =
            run_whole(b"bbac", &[b"baabb", b"b", b"acccccbbbbba"]);
        assert_eq!(found, Some(4));
        assert_eq!(&unmatched[..], b"baab");
    }

    #[test]
    fn no_match_retains_possible_prefix_in_lookbehind() {
        let mut buf = alloc::vec![0u8; context_size(b"needle".len())];
        let mut ctx = StreamContext::new(b"needle", &mut buf).unwrap();
        let mut unmatched = Vec::new();
        let consumed = ctx.feed(b"needle", b"hay nee", |bytes| {
            unmatched.extend_from_slice(bytes)
        });
        assert_eq!(consumed, 7);
        assert!(!ctx.found());
        assert_eq!(&unmatched[..], b"hay ");
        assert_eq!(ctx.lookbehind_size(), 3);
    }

    #[test]
    fn no_match_at_all_flushes_everything_eventually() {
        let mut buf = alloc::vec![0u8; context_size(b"zzz".len())];
        let mut ctx = StreamContext::new(b"zzz", &mut buf).unwrap();
        let mut unmatched = Vec::new();
        let consumed = ctx.feed(b"zzz", b"abcdefgh", |bytes| unmatched.extend_from_slice(bytes));
        assert_eq!(consumed, 8);
        assert!(!ctx.found());
        assert_eq!(ctx.analyzed(), 8);
        assert!(ctx.lookbehind_size() < 3);
    }

    #[test]
    fn feed_after_found_is_a_no_op() {
        let mut buf = alloc::vec![0u8; context_size(b"ab".len())];
        let mut ctx = StreamContext::new(b"ab", &mut buf).unwrap();
        ctx.feed(b"ab", b"xab", |_| {});
        assert!(ctx.found());
        let analyzed_before = ctx.analyzed();
        let consumed = ctx.feed(b"ab", b"ab", |_| panic!("sink must not run"));
        assert_eq!(consumed, 0);
        assert_eq!(ctx.analyzed(), analyzed_before);
    }

    #[test]
    fn empty_needle_is_rejected() {
        let mut buf = [];
        assert_eq!(
            StreamContext::new(b"", &mut buf).unwrap_err(),
            InitError::EmptyNeedle
        );
    }

    #[test]
    fn undersized_buffer_is_rejected() {
        let mut buf = [0u8; 1];
        assert_eq!(
            StreamContext::new(b"abcdef", &mut buf).unwrap_err(),
            InitError::BufferTooSmall { needed: 5, got: 1 }
        );
    }

    #[test]
    fn one_byte_at_a_time_finds_the_match() {
        let needle: &[u8] = b"mississippi";
        let haystack: &[u8] = b"xxmississippixx";
        let mut buf = alloc::vec![0u8; context_size(needle.len())];
        let mut ctx = StreamContext::new(needle, &mut buf).unwrap();
        let mut offset = 0usize;
        let mut found_at = None;
        for &byte in haystack {
            let consumed = ctx.feed(needle, core::slice::from_ref(&byte), |_| {});
            offset += consumed;
            if ctx.found() {
                found_at = Some(offset - needle.len());
                break;
            }
        }
        assert_eq!(found_at, Some(2));
    }

    #[cfg(feature = "std")]
    #[test]
    fn stream_finder_matches_context_behavior() {
        let mut finder = StreamFinder::new(b"needle").unwrap();
        let mut unmatched = Vec::new();
        let consumed = finder.feed(b"needle", b"hay needle stack", |bytes| {
            unmatched.extend_from_slice(bytes)
        });
        assert!(finder.found());
        assert_eq!(consumed, 10);
        assert_eq!(&unmatched[..], b"hay ");
    }
}
