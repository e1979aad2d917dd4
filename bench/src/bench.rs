use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sbmh::{bm_search, build_occ, build_skip, horspool_search, turbo_bm_search, StreamFinder};

mod data;

const NEEDLE: &[u8] = b"judge my vow";
const PATHOLOGICAL_NEEDLE: &[u8] = b"aaaaaaaaaab";

fn bench_corpus(c: &mut Criterion, group_name: &str, haystack: &[u8], needle: &[u8]) {
    let occ = build_occ(needle);
    let skip = build_skip(needle);

    let mut group = c.benchmark_group(group_name);

    group.bench_function("horspool", |b| {
        b.iter(|| horspool_search(black_box(haystack), &occ, needle))
    });
    group.bench_function("bm", |b| {
        b.iter(|| bm_search(black_box(haystack), &occ, &skip, needle))
    });
    group.bench_function("turbo_bm", |b| {
        b.iter(|| turbo_bm_search(black_box(haystack), &occ, &skip, needle))
    });
    group.bench_function("stream", |b| {
        b.iter(|| {
            let mut finder = StreamFinder::new(needle).unwrap();
            finder.feed(needle, black_box(haystack), |_| {});
            finder.found()
        })
    });

    group.finish();
}

fn short(c: &mut Criterion) {
    bench_corpus(c, "short", &data::short_text(), NEEDLE);
}

fn medium_repetitive(c: &mut Criterion) {
    bench_corpus(c, "medium_repetitive", &data::medium_repetitive(), NEEDLE);
}

fn pathological(c: &mut Criterion) {
    let mut haystack = data::pathological_repeat(1 << 16);
    haystack.extend_from_slice(PATHOLOGICAL_NEEDLE);
    bench_corpus(c, "pathological", &haystack, PATHOLOGICAL_NEEDLE);
}

criterion_group!(benches, short, medium_repetitive, pathological);
criterion_main!(benches);
