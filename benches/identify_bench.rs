// benches/identify_bench.rs

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use rphoneprefix::{Catalog, PhonePrefixUtil, PHONE_PREFIX_UTIL};

fn identify_benchmark(c: &mut Criterion) {
    let _ = env_logger::try_init();
    let inputs = ["+1", "+18", "+1876", "+1 876 555 0100", "+3906698", "+8"];

    let mut group = c.benchmark_group("Identify");
    for input in inputs {
        group.bench_with_input(BenchmarkId::new("partial", input), input, |b, input| {
            b.iter(|| PHONE_PREFIX_UTIL.identify(black_box(input), false))
        });
        group.bench_with_input(BenchmarkId::new("exact_only", input), input, |b, input| {
            b.iter(|| PHONE_PREFIX_UTIL.identify(black_box(input), true))
        });
    }
    group.finish();
}

fn build_benchmark(c: &mut Criterion) {
    c.bench_function("Catalog::load + trie build", |b| {
        b.iter(|| PhonePrefixUtil::new_for_catalog(black_box(Catalog::load())))
    });
}

criterion_group!(benches, identify_benchmark, build_benchmark);
criterion_main!(benches);
