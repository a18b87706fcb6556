use crate::common::{configure_criterion, numbered, ATTENTION_SPAN, LIST_LEN};
use criterion::{criterion_group, Criterion};
use error_merge::{walk, Walk};
use std::hint::black_box;

pub fn bench_bounded_walk(c: &mut Criterion) {
    let list = numbered(LIST_LEN);
    let mut group = c.benchmark_group("walk");

    group.bench_function("bounded", |b| {
        b.iter(|| {
            walk::walk_bounded(list.as_ref(), ATTENTION_SPAN, |e| {
                black_box(e);
            })
        })
    });

    // Full walk that ignores everything past the span.
    group.bench_function("full_ignore_tail", |b| {
        b.iter(|| {
            let mut seen = 0;
            walk::walk(list.as_ref(), |e| {
                seen += 1;
                if seen <= ATTENTION_SPAN {
                    black_box(e);
                }
            })
        })
    });

    group.bench_function("partial_counter", |b| {
        b.iter(|| {
            let mut seen = 0;
            list.walk_partial(|e| {
                black_box(e);
                seen += 1;
                seen < ATTENTION_SPAN
            })
        })
    });

    group.bench_function("iter_take", |b| {
        b.iter(|| {
            if let Some(failure) = &list {
                for e in failure.iter().take(ATTENTION_SPAN) {
                    black_box(e);
                }
            }
        })
    });

    group.finish();
}

criterion_group! {
    name = walk_benches;
    config = configure_criterion();
    targets = bench_bounded_walk,
}
