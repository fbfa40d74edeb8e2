use astrolabe::ephemeris::{Body, JulianDay};
use astrolabe::houses::HouseGeometry;
use astrolabe::positions::PositionTable;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn placidus_like() -> [f64; 12] {
    [
        342.1, 21.7, 48.9, 72.4, 97.3, 126.8, 162.1, 201.7, 228.9, 252.4, 277.3, 306.8,
    ]
}

fn bench_house_of(c: &mut Criterion) {
    let geometry = HouseGeometry::from_cusps(placidus_like()).unwrap();

    c.bench_function("house_of", |b| {
        b.iter(|| {
            (0..360)
                .filter_map(|deg| geometry.house_of(black_box(deg as f64 + 0.5)))
                .count()
        })
    });
}

fn bench_assign_bodies(c: &mut Criterion) {
    let geometry = HouseGeometry::from_cusps(placidus_like()).unwrap();
    let longitudes: Vec<(Body, f64)> = Body::ALL
        .iter()
        .enumerate()
        .map(|(i, body)| (*body, (i as f64 * 41.0) % 360.0))
        .collect();
    let positions = PositionTable::from_longitudes(JulianDay(2_451_545.0), &longitudes).unwrap();

    c.bench_function("assign_bodies", |b| {
        b.iter(|| geometry.assign_bodies(black_box(&positions)))
    });
}

criterion_group!(benches, bench_house_of, bench_assign_bodies);
criterion_main!(benches);
