use crate::aspects::shortest_angle;

/// Whether an aspect is applying.
///
/// Compares the orb of the transiting body's longitude today and tomorrow
/// against a fixed natal longitude. Without a tomorrow sample the aspect
/// is reported as separating.
pub fn is_applying(natal_lon: f64, today_lon: f64, tomorrow_lon: Option<f64>, target: f64) -> bool {
    let Some(tomorrow_lon) = tomorrow_lon else {
        return false;
    };
    let today_orb = (shortest_angle(today_lon, natal_lon) - target).abs();
    let tomorrow_orb = (shortest_angle(tomorrow_lon, natal_lon) - target).abs();
    tomorrow_orb < today_orb
}
