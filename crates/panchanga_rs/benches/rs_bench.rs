use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchanga_rs::{GeoLocation, Options, Panchanga, UtcTime, match_kundli};

fn engine() -> Panchanga {
    Panchanga::default()
}

fn compute_bench(c: &mut Criterion) {
    let engine = engine();
    let delhi = GeoLocation::new(28.6139, 77.2090, 0.0);
    let instant = UtcTime::new(2026, 2, 15, 6, 30, 0.0);
    let options = Options {
        timezone_offset_minutes: Some(330),
        ..Options::default()
    };

    let mut group = c.benchmark_group("rs_compute");
    group.sample_size(10);
    group.bench_function("compute", |b| {
        b.iter(|| engine.compute(black_box(&instant), black_box(&delhi), &options))
    });
    group.finish();
}

fn kundli_bench(c: &mut Criterion) {
    let engine = engine();
    let mumbai = GeoLocation::new(19.076, 72.8777, 0.0);
    let boy = UtcTime::new(1990, 7, 15, 4, 30, 0.0);
    let girl = UtcTime::new(1992, 3, 2, 11, 15, 0.0);

    let mut group = c.benchmark_group("rs_kundli");
    group.bench_function("compute_kundli", |b| {
        b.iter(|| engine.compute_kundli(black_box(&boy), black_box(&mumbai)))
    });
    if let (Ok(a), Ok(b)) = (
        engine.compute_kundli(&boy, &mumbai),
        engine.compute_kundli(&girl, &mumbai),
    ) {
        group.bench_function("match_kundli", |bench| {
            bench.iter(|| match_kundli(black_box(&a), black_box(&b)))
        });
    }
    group.finish();
}

criterion_group!(benches, compute_bench, kundli_bench);
criterion_main!(benches);
