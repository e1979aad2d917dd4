#![no_main]

use libfuzzer_sys::fuzz_target;

use sbmh::{context_size, StreamContext, M_MAX};

fuzz_target!(|data: &[u8]| {
    let Some((&needle_len, rest)) = data.split_first() else {
        return;
    };
    let Some((&chunk_size, rest)) = rest.split_first() else {
        return;
    };
    let needle_len = (needle_len as usize % 8 + 1).min(rest.len().max(1));
    if needle_len == 0 || needle_len > M_MAX || needle_len > rest.len() {
        return;
    }
    let chunk_size = (chunk_size as usize % 7) + 1;
    let (needle, haystack) = rest.split_at(needle_len);

    let mut buf = vec![0u8; context_size(needle.len())];
    let mut ctx = match StreamContext::new(needle, &mut buf) {
        Ok(ctx) => ctx,
        Err(_) => return,
    };

    let mut unmatched = Vec::new();
    let mut prev_analyzed = 0usize;
    for chunk in haystack.chunks(chunk_size) {
        ctx.feed(needle, chunk, |bytes| unmatched.extend_from_slice(bytes));
        assert!(ctx.analyzed() >= prev_analyzed);
        prev_analyzed = ctx.analyzed();
        assert!(ctx.lookbehind_size() < needle.len());
        if ctx.found() {
            break;
        }
    }

    if ctx.found() {
        let analyzed_before = ctx.analyzed();
        let consumed = ctx.feed(needle, haystack, |_| {
            panic!("sink invoked after a match was already found")
        });
        assert_eq!(consumed, 0);
        assert_eq!(ctx.analyzed(), analyzed_before);
    }
});
