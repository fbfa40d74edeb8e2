//! Seam between the core and whatever computes planetary positions.

use crate::ephemeris::adapter::EphemerisError;
use crate::ephemeris::types::{Body, GeoLocation, JulianDay, RawPosition};

/// Source of ecliptic positions and house cusps.
///
/// Calls are blocking and are never retried by the core.
pub trait EphemerisProvider {
    /// Ecliptic longitude (and speed, if known) of `body` at `instant`.
    fn position(&self, instant: JulianDay, body: Body) -> Result<RawPosition, EphemerisError>;

    /// Twelve house cusps (house 1 first) for `instant` at `location`.
    fn houses(&self, instant: JulianDay, location: &GeoLocation)
        -> Result<[f64; 12], EphemerisError>;
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn position(&self, instant: JulianDay, body: Body) -> Result<RawPosition, EphemerisError> {
        (**self).position(instant, body)
    }

    fn houses(
        &self,
        instant: JulianDay,
        location: &GeoLocation,
    ) -> Result<[f64; 12], EphemerisError> {
        (**self).houses(instant, location)
    }
}
