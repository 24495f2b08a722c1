use beauty_count::{BeautifulNumbersCounter, SumDistribution};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_counts(c: &mut Criterion) {
    let decimal = BeautifulNumbersCounter::create(10).unwrap();
    c.bench_function("count_decimal_len_40", |b| {
        b.iter(|| {
            let _ = decimal.get_count(40).unwrap();
        })
    });

    let wide = BeautifulNumbersCounter::create(64).unwrap();
    c.bench_function("count_base64_len_25", |b| {
        b.iter(|| {
            let _ = wide.get_count(25).unwrap();
        })
    });
}

fn bench_step(c: &mut Criterion) {
    let dist = SumDistribution::for_half_length(wide_base(), 16).unwrap();
    c.bench_function("distribution_step_base36_h16", |b| {
        b.iter(|| {
            let _ = dist.step();
        })
    });
}

fn wide_base() -> beauty_count::Base {
    beauty_count::Base::new(36).unwrap()
}

criterion_group!(benches, bench_counts, bench_step);
criterion_main!(benches);
