/// The largest needle length this crate supports.
///
/// Keeping this bounded to `u16::MAX` means `context_size` stays a small,
/// predictable number of bytes for any needle a caller is likely to
/// construct, and lets preprocessing tables use a narrow index type if a
/// future version needs to shrink them.
pub const M_MAX: usize = u16::MAX as usize;

/// Builds the bad-character occurrence table for `needle`.
///
/// `occ[b]` is the distance the search window should advance when its last
/// byte equals `b` but the needle does not match at the current position:
/// `needle.len() - 1 - i` where `i` is the rightmost index `< needle.len() -
/// 1` at which `needle[i] == b`, or `needle.len()` if `b` does not occur in
/// `needle[..needle.len() - 1]`.
///
/// The last byte of the needle is deliberately excluded from the scan that
/// populates the table: if it only appears as the final byte, advancing by
/// `needle.len()` is correct (a mismatch at the last position cannot be
/// explained by an earlier occurrence of that byte).
///
/// # Panics
///
/// Panics if `needle` is empty.
pub fn build_occ(needle: &[u8]) -> [usize; 256] {
    assert!(!needle.is_empty(), "needle must not be empty");
    let m = needle.len();
    let mut occ = [m; 256];
    for (i, &b) in needle[..m - 1].iter().enumerate() {
        occ[b as usize] = m - 1 - i;
    }
    occ
}
