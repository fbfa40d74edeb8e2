//! Fixed lookup tables for compatibility scoring.

use crate::aspects::AspectKind;
use crate::ephemeris::types::Body;
use crate::western::zodiac::{Element, Quality, Sign};
use std::collections::HashMap;

/// Element pair compatibility, 0-10.
///
/// Looked up as an ordered pair; the table is not assumed symmetric.
pub fn element_compatibility(first: Element, second: Element) -> f64 {
    use Element::*;
    match (first, second) {
        (Fire, Fire) => 8.0,
        (Fire, Earth) => 4.0,
        (Fire, Air) => 9.0,
        (Fire, Water) => 3.0,

        (Earth, Fire) => 4.0,
        (Earth, Earth) => 7.0,
        (Earth, Air) => 3.0,
        (Earth, Water) => 8.0,

        (Air, Fire) => 9.0,
        (Air, Earth) => 3.0,
        (Air, Air) => 7.0,
        (Air, Water) => 5.0,

        (Water, Fire) => 3.0,
        (Water, Earth) => 8.0,
        (Water, Air) => 5.0,
        (Water, Water) => 9.0,
    }
}

/// Quality pair compatibility, 0-10
pub fn quality_compatibility(first: Quality, second: Quality) -> f64 {
    use Quality::*;
    match (first, second) {
        (Cardinal, Cardinal) => 5.0,
        (Cardinal, Fixed) => 7.0,
        (Cardinal, Mutable) => 8.0,

        (Fixed, Cardinal) => 7.0,
        (Fixed, Fixed) => 4.0,
        (Fixed, Mutable) => 6.0,

        (Mutable, Cardinal) => 8.0,
        (Mutable, Fixed) => 6.0,
        (Mutable, Mutable) => 7.0,
    }
}

/// Element compatibility of the elements of two signs
pub fn sign_element_compatibility(first: Sign, second: Sign) -> f64 {
    element_compatibility(first.element(), second.element())
}

const RELATIONSHIP_PAIRS: &[(Body, Body, f64)] = &[
    (Body::Sun, Body::Moon, 15.0),
    (Body::Venus, Body::Venus, 12.0),
    (Body::Venus, Body::Mars, 10.0),
    (Body::Venus, Body::Sun, 8.0),
    (Body::Venus, Body::Moon, 8.0),
    (Body::Mars, Body::Mars, 7.0),
    (Body::Mars, Body::Moon, 6.0),
    (Body::Mars, Body::Sun, 6.0),
    (Body::Mercury, Body::Mercury, 9.0),
    (Body::Mercury, Body::Sun, 5.0),
    (Body::Mercury, Body::Moon, 5.0),
];

lazy_static::lazy_static! {
    // keyed both ways round
    static ref RELATIONSHIP_WEIGHTS: HashMap<(Body, Body), f64> = {
        let mut weights = HashMap::new();
        for &(a, b, weight) in RELATIONSHIP_PAIRS {
            weights.insert((a, b), weight);
            weights.insert((b, a), weight);
        }
        weights
    };
}

/// Significance of a body pair in synastry, in either order
pub fn relationship_weight(first: Body, second: Body) -> Option<f64> {
    RELATIONSHIP_WEIGHTS.get(&(first, second)).copied()
}

/// How much an aspect kind counts towards the aspect score
pub fn aspect_weight(kind: AspectKind) -> f64 {
    match kind {
        AspectKind::Conjunction => 10.0,
        AspectKind::Opposition => 5.0,
        AspectKind::Trine => 8.0,
        AspectKind::Square => 3.0,
        AspectKind::Sextile => 7.0,
    }
}

/// Relationship of two signs by how many signs apart they are, 0-1
pub fn sign_relationship(first: Sign, second: Sign) -> f64 {
    let distance = (second.index() + 12 - first.index()) % 12;
    match distance {
        0 => 0.9,
        1 | 11 => 0.5,
        2 | 10 => 0.7,
        3 | 9 => 0.4,
        4 | 8 => 0.9,
        5 | 7 => 0.3,
        _ => 0.6,
    }
}
