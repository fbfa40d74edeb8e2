mod common;

use astrolabe::ephemeris::{Body, GeoLocation, JulianDay};
use astrolabe::houses::{compute_houses, HouseCusps, HouseGeometry};
use astrolabe::western::Sign;
use common::{even_cusps, table, FixedEphemeris, Lcg};

#[test]
fn test_every_longitude_in_exactly_one_house() {
    let mut rng = Lcg::new(42);
    let mut layouts: Vec<[f64; 12]> = (0..50).map(|_| rng.cusps()).collect();
    layouts.push(even_cusps(0.0));
    layouts.push(even_cusps(10.0));
    layouts.push(even_cusps(355.0));

    for raw in layouts {
        let cusps = HouseCusps(raw);
        for _ in 0..200 {
            let lon = rng.longitude();
            let hits = (1..=12).filter(|h| cusps.contains(*h, lon)).count();
            assert_eq!(hits, 1, "{} landed in {} houses of {:?}", lon, hits, raw);
        }
        // cusps themselves belong to the house they open
        for (i, c) in raw.iter().enumerate() {
            assert_eq!(cusps.house_of(*c), Some(i as u8 + 1));
        }
    }
}

#[test]
fn test_first_house_from_ten_degrees() {
    let geometry = HouseGeometry::from_cusps(even_cusps(10.0)).unwrap();
    assert_eq!(geometry.house_of(25.0), Some(1));
    assert_eq!(geometry.house_of(5.0), Some(12));
    assert_eq!(geometry.house_of(200.0), Some(7));
}

#[test]
fn test_assign_bodies_keeps_all_houses() {
    let geometry = HouseGeometry::from_cusps(even_cusps(10.0)).unwrap();
    let positions = table(&[
        (Body::Sun, 25.0),
        (Body::Moon, 12.0),
        (Body::Mars, 195.0),
        (Body::Saturn, 359.0),
    ]);
    let placements = geometry.assign_bodies(&positions);

    assert_eq!(placements.len(), 12);
    assert_eq!(placements.keys().copied().collect::<Vec<u8>>(), (1..=12).collect::<Vec<u8>>());
    assert_eq!(placements[&1], vec![Body::Sun, Body::Moon]);
    assert_eq!(placements[&7], vec![Body::Mars]);
    assert_eq!(placements[&12], vec![Body::Saturn]);
    assert!(placements[&4].is_empty());
    assert_eq!(placements.values().map(Vec::len).sum::<usize>(), 4);
}

#[test]
fn test_compute_houses_through_provider() {
    let provider = FixedEphemeris::new(JulianDay(2_451_545.0)).with_cusps(even_cusps(95.0));
    let location = GeoLocation { lat: 51.5, lon: -0.12 };
    let geometry = compute_houses(&provider, JulianDay(2_451_545.0), &location).unwrap();

    assert_eq!(geometry.ascendant, 95.0);
    assert_eq!(geometry.ascendant_sign, Sign::Cancer);
    assert_eq!(geometry.midheaven, 5.0);
    assert_eq!(geometry.midheaven_sign, Sign::Aries);
}

#[test]
fn test_compute_houses_failure() {
    let provider = FixedEphemeris::new(JulianDay(2_451_545.0)).without_houses();
    let location = GeoLocation { lat: 89.9, lon: 0.0 };
    assert!(compute_houses(&provider, JulianDay(2_451_545.0), &location).is_err());
}
