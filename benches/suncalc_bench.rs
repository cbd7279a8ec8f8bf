use criterion::{black_box, criterion_group, criterion_main, Criterion};
use suncalc::almanac::sun_times;
use suncalc::horizon::sun_position;
use suncalc::{GeoPosition, Instant};

fn position_bench(c: &mut Criterion) {
    let london = GeoPosition::new(51.5074, -0.1278).expect("valid location");
    let instant = Instant::from_unix_seconds(1_331_161_200);

    let mut group = c.benchmark_group("sun_position");
    group.bench_function("london", |b| {
        b.iter(|| sun_position(black_box(instant), black_box(&london)))
    });
    group.finish();
}

fn times_bench(c: &mut Criterion) {
    let london = GeoPosition::new(51.5074, -0.1278).expect("valid location");
    let svalbard = GeoPosition::new(78.0, 15.0).expect("valid location");
    let instant = Instant::from_unix_seconds(1_718_971_200);

    let mut group = c.benchmark_group("sun_times");
    group.bench_function("london", |b| {
        b.iter(|| sun_times(black_box(instant), black_box(&london), black_box(0.0)))
    });
    group.bench_function("svalbard_midnight_sun", |b| {
        b.iter(|| sun_times(black_box(instant), black_box(&svalbard), black_box(0.0)))
    });
    group.finish();
}

criterion_group!(benches, position_bench, times_bench);
criterion_main!(benches);
