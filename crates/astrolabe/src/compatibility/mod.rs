//! Relationship compatibility between two natal charts.
//!
//! Five component scores are computed independently and blended into an
//! overall percentage. See [`scorer`] for the individual formulas.

pub mod interpretation;
pub mod scorer;
pub mod tables;
pub mod types;

pub use scorer::{
    aspect_score, element_score, house_overlay_score, overall_score, sign_score, special_score,
};
pub use types::{CompatibilityNarrative, CompatibilityResult, KeySigns, SubScores, SynastryAspect};

use crate::aspects::{AspectCalculator, AspectSettings};
use crate::chart::BirthChart;
use crate::error::ChartError;
use crate::houses::HouseGeometry;
use crate::positions::PositionTable;

/// Compare two birth charts
pub fn analyze_compatibility(
    chart_a: &BirthChart,
    chart_b: &BirthChart,
) -> Result<CompatibilityResult, ChartError> {
    compare_positions(
        &chart_a.positions,
        &chart_a.houses,
        &chart_b.positions,
        &chart_b.houses,
    )
}

/// Compatibility from raw positions and houses of both people
pub fn compare_positions(
    positions_a: &PositionTable,
    houses_a: &HouseGeometry,
    positions_b: &PositionTable,
    houses_b: &HouseGeometry,
) -> Result<CompatibilityResult, ChartError> {
    let signs_a = KeySigns::from_chart(positions_a, houses_a)?;
    let signs_b = KeySigns::from_chart(positions_b, houses_b)?;

    let synastry = AspectCalculator::new().compute_cross_aspects(
        positions_a,
        positions_b,
        &AspectSettings::default(),
    );

    let scores = SubScores {
        element: element_score(&signs_a, &signs_b),
        sign: sign_score(&signs_a, &signs_b),
        house: house_overlay_score(positions_a, houses_a, positions_b, houses_b),
        aspect: aspect_score(&synastry),
        special: special_score(&signs_a, &signs_b),
    };
    let overall = overall_score(&scores);
    log::debug!("compatibility {:?} -> {}", scores, overall);

    let mut ranked: Vec<SynastryAspect> = synastry.iter().map(SynastryAspect::from).collect();
    // stable: equal significance keeps detection order
    ranked.sort_by(|x, y| y.significance.total_cmp(&x.significance));

    let interpretation = interpretation::narrative(&signs_a, &signs_b, &ranked, overall);

    Ok(CompatibilityResult {
        overall,
        scores,
        synastry_aspects: ranked,
        interpretation,
    })
}
