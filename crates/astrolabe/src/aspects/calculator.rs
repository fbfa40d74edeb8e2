use crate::aspects::types::{AspectCore, AspectPair, AspectSettings, ASPECT_CATALOG};
use crate::positions::PositionTable;

/// Shortest arc between two longitudes, in [0, 180]
pub fn shortest_angle(lon1: f64, lon2: f64) -> f64 {
    let raw_diff = (lon1 - lon2).abs();
    if raw_diff > 180.0 {
        360.0 - raw_diff
    } else {
        raw_diff
    }
}

/// Round to 2 decimal places
pub fn round_orb(orb: f64) -> f64 {
    (orb * 100.0).round() / 100.0
}

/// Aspect calculator
pub struct AspectCalculator;

impl AspectCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Aspects within one chart: each unordered body pair once, in body order
    pub fn compute_natal_aspects(
        &self,
        positions: &PositionTable,
        settings: &AspectSettings,
    ) -> Vec<AspectPair> {
        let bodies: Vec<_> = positions.iter().collect();
        let mut pairs = Vec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let (p1, p2) = (bodies[i], bodies[j]);
                if let Some(aspect) = self.calculate_aspect(p1.longitude, p2.longitude, settings) {
                    pairs.push(AspectPair {
                        from: p1.body,
                        to: p2.body,
                        aspect,
                    });
                }
            }
        }
        log::debug!("{} natal aspects", pairs.len());
        pairs
    }

    /// Aspects between two position sets (synastry, transits).
    ///
    /// Full cross product: a body is compared with its namesake on the other side.
    pub fn compute_cross_aspects(
        &self,
        positions_a: &PositionTable,
        positions_b: &PositionTable,
        settings: &AspectSettings,
    ) -> Vec<AspectPair> {
        let mut pairs = Vec::new();
        for p1 in positions_a.iter() {
            for p2 in positions_b.iter() {
                if let Some(aspect) = self.calculate_aspect(p1.longitude, p2.longitude, settings) {
                    pairs.push(AspectPair {
                        from: p1.body,
                        to: p2.body,
                        aspect,
                    });
                }
            }
        }
        pairs
    }

    /// First catalog aspect whose orb contains the separation of `lon1` and `lon2`
    pub fn calculate_aspect(
        &self,
        lon1: f64,
        lon2: f64,
        settings: &AspectSettings,
    ) -> Option<AspectCore> {
        let angle_diff = shortest_angle(lon1, lon2);

        ASPECT_CATALOG.iter().find_map(|def| {
            let deviation = (angle_diff - def.angle).abs();
            (deviation <= settings.orb(def.kind)).then(|| AspectCore {
                kind: def.kind,
                exact_angle: def.angle,
                orb: round_orb(deviation),
                nature: def.nature,
            })
        })
    }
}

impl Default for AspectCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspects::types::{AspectKind, AspectNature};

    #[test]
    fn test_shortest_angle_wraps() {
        assert_eq!(shortest_angle(350.0, 10.0), 20.0);
        assert_eq!(shortest_angle(10.0, 350.0), 20.0);
        assert_eq!(shortest_angle(0.0, 180.0), 180.0);
    }

    #[test]
    fn test_shortest_angle_symmetric_and_bounded() {
        let mut a = 0.0;
        while a < 360.0 {
            let mut b = 0.0;
            while b < 360.0 {
                let ab = shortest_angle(a, b);
                assert_eq!(ab, shortest_angle(b, a));
                assert!((0.0..=180.0).contains(&ab));
                b += 7.5;
            }
            a += 11.25;
        }
    }

    #[test]
    fn test_opposition_exact() {
        let calc = AspectCalculator::new();
        let aspect = calc
            .calculate_aspect(0.0, 180.0, &AspectSettings::default())
            .unwrap();
        assert_eq!(aspect.kind, AspectKind::Opposition);
        assert_eq!(aspect.orb, 0.0);
        assert_eq!(aspect.nature, AspectNature::Challenging);
    }

    #[test]
    fn test_orb_boundary_inclusive() {
        let calc = AspectCalculator::new();
        let settings = AspectSettings::default();
        let square = calc.calculate_aspect(0.0, 97.0, &settings).unwrap();
        assert_eq!(square.kind, AspectKind::Square);
        assert_eq!(square.orb, 7.0);
        assert!(calc.calculate_aspect(0.0, 97.5, &settings).is_none());
    }

    #[test]
    fn test_first_catalog_match_wins() {
        // with wide orbs, 75° sits inside both trine and square; trine comes first
        let calc = AspectCalculator::new();
        let settings = AspectSettings::default()
            .with_orb(AspectKind::Trine, 50.0)
            .with_orb(AspectKind::Square, 50.0);
        let aspect = calc.calculate_aspect(0.0, 75.0, &settings).unwrap();
        assert_eq!(aspect.kind, AspectKind::Trine);
    }

    #[test]
    fn test_orb_rounding() {
        assert_eq!(round_orb(3.14159), 3.14);
        assert_eq!(round_orb(0.004), 0.0);
    }
}
