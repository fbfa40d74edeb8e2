use astrolabe::aspects::{AspectCalculator, AspectSettings};
use astrolabe::ephemeris::{Body, JulianDay};
use astrolabe::positions::PositionTable;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_table(offset: f64) -> PositionTable {
    let longitudes: Vec<(Body, f64)> = Body::ALL
        .iter()
        .enumerate()
        .map(|(i, body)| (*body, (offset + i as f64 * 37.5) % 360.0))
        .collect();
    PositionTable::from_longitudes(JulianDay(2_451_545.0), &longitudes).unwrap()
}

fn bench_calculate_aspect(c: &mut Criterion) {
    let calculator = AspectCalculator::new();
    let settings = AspectSettings::default();

    c.bench_function("calculate_aspect", |b| {
        b.iter(|| calculator.calculate_aspect(black_box(100.0), black_box(218.5), black_box(&settings)))
    });
}

fn bench_compute_natal_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::new();
    let settings = AspectSettings::default();
    let positions = sample_table(3.0);

    c.bench_function("compute_natal_aspects", |b| {
        b.iter(|| calculator.compute_natal_aspects(black_box(&positions), black_box(&settings)))
    });
}

fn bench_compute_cross_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::new();
    let settings = AspectSettings::default();
    let first = sample_table(3.0);
    let second = sample_table(118.0);

    c.bench_function("compute_cross_aspects", |b| {
        b.iter(|| {
            calculator.compute_cross_aspects(black_box(&first), black_box(&second), black_box(&settings))
        })
    });
}

criterion_group!(
    benches,
    bench_calculate_aspect,
    bench_compute_natal_aspects,
    bench_compute_cross_aspects
);
criterion_main!(benches);
