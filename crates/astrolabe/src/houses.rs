//! House cusps, chart angles and body-to-house placement.

use crate::ephemeris::{Body, EphemerisError, EphemerisProvider, GeoLocation, JulianDay};
use crate::error::ChartError;
use crate::positions::PositionTable;
use crate::western::zodiac::{normalize_degrees, Sign};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Twelve cusp longitudes; index 0 is house 1.
///
/// Raw cusps are not monotonic: one house usually spans 0° Aries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HouseCusps(pub [f64; 12]);

impl HouseCusps {
    /// Cusp of house `house` (1-12)
    pub fn cusp(&self, house: u8) -> Option<f64> {
        match house {
            1..=12 => Some(self.0[usize::from(house) - 1]),
            _ => None,
        }
    }

    /// Half-open span `[start, end)` of house index `h` (0-11), with `end` lifted past 360 on wrap
    fn span(&self, h: usize) -> (f64, f64) {
        let start = self.0[h];
        let mut end = self.0[(h + 1) % 12];
        if end < start {
            end += 360.0;
        }
        (start, end)
    }

    /// Whether `longitude` lies inside house `house` (1-12)
    pub fn contains(&self, house: u8, longitude: f64) -> bool {
        if !(1..=12).contains(&house) {
            return false;
        }
        let (start, end) = self.span(usize::from(house) - 1);
        let adjusted = if end > 360.0 && longitude < end - 360.0 {
            longitude + 360.0
        } else {
            longitude
        };
        start <= adjusted && adjusted < end
    }

    /// House (1-12) containing `longitude`
    pub fn house_of(&self, longitude: f64) -> Option<u8> {
        (1..=12).find(|h| self.contains(*h, longitude))
    }
}

/// House cusps plus the two chart angles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseGeometry {
    pub cusps: HouseCusps,
    pub ascendant: f64,
    pub ascendant_sign: Sign,
    pub midheaven: f64,
    pub midheaven_sign: Sign,
}

impl HouseGeometry {
    pub fn from_cusps(raw: [f64; 12]) -> Result<Self, ChartError> {
        if let Some(bad) = raw.iter().find(|c| !c.is_finite()) {
            return Err(EphemerisError::MalformedResponse {
                message: format!("house cusp {} is not finite", bad),
            }
            .into());
        }
        let cusps = HouseCusps(raw.map(normalize_degrees));
        let ascendant = cusps.0[0];
        let midheaven = cusps.0[9];
        Ok(Self {
            cusps,
            ascendant,
            ascendant_sign: Sign::from_longitude(ascendant)?,
            midheaven,
            midheaven_sign: Sign::from_longitude(midheaven)?,
        })
    }

    pub fn house_of(&self, longitude: f64) -> Option<u8> {
        self.cusps.house_of(longitude)
    }

    /// Bodies grouped by house; all twelve houses are present, possibly empty.
    pub fn assign_bodies(&self, positions: &PositionTable) -> BTreeMap<u8, Vec<Body>> {
        let mut placements: BTreeMap<u8, Vec<Body>> = (1..=12).map(|h| (h, Vec::new())).collect();
        for pos in positions.iter() {
            match self.house_of(pos.longitude) {
                Some(house) => placements.entry(house).or_default().push(pos.body),
                None => log::warn!(
                    "{} at {:.2} falls in no house; cusps {:?}",
                    pos.body,
                    pos.longitude,
                    self.cusps.0
                ),
            }
        }
        placements
    }

    /// Sign on the cusp of `house`
    pub fn cusp_sign(&self, house: u8) -> Option<Sign> {
        self.cusps
            .cusp(house)
            .and_then(|c| Sign::from_longitude(c).ok())
    }
}

/// Ask the provider for cusps at `instant` and derive the angles
pub fn compute_houses<P: EphemerisProvider + ?Sized>(
    provider: &P,
    instant: JulianDay,
    location: &GeoLocation,
) -> Result<HouseGeometry, ChartError> {
    let raw = provider.houses(instant, location)?;
    let geometry = HouseGeometry::from_cusps(raw)?;
    log::debug!(
        "houses at {}: ASC {:.2} {}, MC {:.2} {}",
        instant,
        geometry.ascendant,
        geometry.ascendant_sign,
        geometry.midheaven,
        geometry.midheaven_sign
    );
    Ok(geometry)
}
