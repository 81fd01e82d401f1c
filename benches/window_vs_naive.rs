use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use finestra::engagement::Engagement;
use finestra::window::{count, count_naive};

const SIZES: [usize; 2] = [1_000, 4_000];
const TOLERANCE: usize = 8;

/// Deterministic input mixing engaged runs with scattered non-engaged letters.
fn build_input(len: usize) -> String {
    "abcabcxaybzc".chars().cycle().take(len).collect()
}

fn bench_substring_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("substring_count");
    let engagement = Engagement::none().engage_all("abc");

    for size in SIZES {
        let input = build_input(size);

        group.bench_function(
            BenchmarkId::new("Windowed (two-pointer)", format!("{size}chars")),
            |b| b.iter(|| black_box(count(black_box(&input), &engagement, TOLERANCE).unwrap())),
        );

        group.bench_function(
            BenchmarkId::new("Naive (quadratic)", format!("{size}chars")),
            |b| {
                b.iter(|| {
                    black_box(count_naive(black_box(&input), &engagement, TOLERANCE).unwrap())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_substring_count);
criterion_main!(benches);
