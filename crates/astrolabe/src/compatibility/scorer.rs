//! Sub-scores of the compatibility model.
//!
//! Every score lands in 0-100. Fractional scores are rounded half to even.

use crate::aspects::{AspectNature, AspectPair};
use crate::compatibility::tables::{
    aspect_weight, element_compatibility, quality_compatibility, relationship_weight,
    sign_element_compatibility, sign_relationship,
};
use crate::compatibility::types::{KeySigns, SubScores};
use crate::ephemeris::types::Body;
use crate::houses::HouseGeometry;
use crate::positions::PositionTable;
use crate::western::zodiac::Sign;

const RELATIONSHIP_HOUSES: [u8; 4] = [1, 5, 7, 8];
const BENEFICS: [Body; 2] = [Body::Venus, Body::Jupiter];
const MALEFICS: [Body; 2] = [Body::Saturn, Body::Mars];

/// Round half to even and clamp into 0-100
pub fn round_score(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 100.0) as u8
}

/// Weighted element harmony of Sun, Moon and Venus
pub fn element_score(a: &KeySigns, b: &KeySigns) -> u8 {
    let terms = [
        (a.sun, b.sun, 2.0),
        (a.sun, b.moon, 1.5),
        (a.moon, b.sun, 1.5),
        (a.moon, b.moon, 1.8),
        (a.venus, b.venus, 1.5),
    ];
    let (sum, total_weight) = terms.iter().fold((0.0, 0.0), |(sum, total), (s1, s2, w)| {
        (sum + sign_element_compatibility(*s1, *s2) * w, total + w)
    });
    round_score(sum / total_weight / 10.0 * 100.0)
}

/// Weighted zodiacal distance between nine sign pairs.
///
/// The weighted average (0.3-0.9) is scaled by 10, so this score stays
/// between 3 and 9.
pub fn sign_score(a: &KeySigns, b: &KeySigns) -> u8 {
    let terms: [(Sign, Sign, f64); 9] = [
        (a.sun, b.sun, 2.0),
        (a.moon, b.moon, 1.8),
        (a.venus, b.venus, 1.5),
        (a.mars, b.mars, 1.3),
        (a.venus, b.mars, 1.4),
        (a.mars, b.venus, 1.4),
        (a.sun, b.moon, 1.7),
        (a.moon, b.sun, 1.7),
        (a.ascendant, b.ascendant, 1.0),
    ];
    let (sum, total_weight) = terms.iter().fold((0.0, 0.0), |(sum, total), (s1, s2, w)| {
        (sum + sign_relationship(*s1, *s2) * w, total + w)
    });
    round_score(sum / total_weight * 10.0)
}

/// Adjustment for one person's bodies landing in the other's relationship houses
fn overlay_adjustment(guest: &PositionTable, host: &HouseGeometry) -> i32 {
    let placements = host.assign_bodies(guest);
    RELATIONSHIP_HOUSES
        .iter()
        .filter_map(|house| placements.get(house))
        .flatten()
        .map(|body| {
            if BENEFICS.contains(body) {
                5
            } else if MALEFICS.contains(body) {
                -2
            } else {
                0
            }
        })
        .sum()
}

/// Benefics and malefics of each person in the partner's houses 1, 5, 7 and 8
pub fn house_overlay_score(
    positions_a: &PositionTable,
    houses_a: &HouseGeometry,
    positions_b: &PositionTable,
    houses_b: &HouseGeometry,
) -> u8 {
    let score = 60
        + overlay_adjustment(positions_a, houses_b)
        + overlay_adjustment(positions_b, houses_a);
    score.clamp(0, 100) as u8
}

/// Synastry aspects weighted by aspect kind and body-pair significance
pub fn aspect_score(synastry: &[AspectPair]) -> u8 {
    let score = synastry.iter().fold(50.0, |score, pair| {
        let weight = relationship_weight(pair.from, pair.to).map_or(1.0, |w| w / 10.0);
        let value = aspect_weight(pair.aspect.kind);
        match pair.aspect.nature {
            AspectNature::Harmonious => score + value * weight,
            AspectNature::Challenging => score - value * weight * 0.5,
            AspectNature::Neutral => score + value * weight * 0.3,
        }
    });
    round_score(score)
}

/// Mercury signs that differ in element but pair well in quality
pub fn is_complementary(first: Sign, second: Sign) -> bool {
    first.element() != second.element()
        && quality_compatibility(first.quality(), second.quality()) >= 7.0
}

/// Element matches, cross-element harmony, same-sign placements and Mercury rapport
pub fn special_score(a: &KeySigns, b: &KeySigns) -> u8 {
    let mut score = 60.0;

    let element_matches = [
        (a.sun, b.sun, 5.0),
        (a.moon, b.moon, 8.0),
        (a.venus, b.venus, 6.0),
        (a.mars, b.mars, 4.0),
    ];
    for (s1, s2, bonus) in element_matches {
        if s1.element() == s2.element() {
            score += bonus;
        }
    }

    score += element_compatibility(a.sun.element(), b.venus.element()) * 0.7;
    score += element_compatibility(a.moon.element(), b.venus.element()) * 0.8;
    score += element_compatibility(a.venus.element(), b.mars.element()) * 0.9;

    let same_sign = [
        (a.sun, b.sun, 3.0),
        (a.moon, b.moon, 5.0),
        (a.venus, b.venus, 4.0),
        (a.mars, b.mars, 2.0),
    ];
    for (s1, s2, bonus) in same_sign {
        if s1 == s2 {
            score += bonus;
        }
    }

    if is_complementary(a.mercury, b.mercury) {
        score += 6.0;
    }

    round_score(score)
}

/// Weighted blend of the five sub-scores
pub fn overall_score(scores: &SubScores) -> u8 {
    let weighted = f64::from(scores.element) * 0.15
        + f64::from(scores.sign) * 0.25
        + f64::from(scores.house) * 0.15
        + f64::from(scores.aspect) * 0.30
        + f64::from(scores.special) * 0.15;
    round_score(weighted)
}
