//! Per-instant body positions queried from the ephemeris provider.

use crate::ephemeris::{Body, EphemerisProvider, JulianDay, RawPosition};
use crate::error::ChartError;
use crate::western::zodiac::{degree_in_sign, normalize_degrees, Sign};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A body's place on the zodiac at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub body: Body,
    /// Ecliptic longitude in degrees (0-360)
    pub longitude: f64,
    pub sign: Sign,
    /// Degrees inside the sign (0-30)
    pub degree: f64,
    /// Speed in longitude (degrees per day), when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl BodyPosition {
    pub fn new(body: Body, longitude: f64, speed: Option<f64>) -> Result<Self, ChartError> {
        if !longitude.is_finite() {
            return Err(ChartError::UnknownSign { longitude });
        }
        let longitude = normalize_degrees(longitude);
        Ok(Self {
            body,
            longitude,
            sign: Sign::from_longitude(longitude)?,
            degree: degree_in_sign(longitude),
            speed,
        })
    }

    fn from_raw(body: Body, raw: RawPosition) -> Result<Self, ChartError> {
        Self::new(body, raw.lon, raw.speed_lon)
    }

    pub fn is_retrograde(&self) -> bool {
        self.speed.map(|s| s < 0.0).unwrap_or(false)
    }
}

/// Positions of every tracked body at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionTable {
    pub instant: JulianDay,
    pub bodies: BTreeMap<Body, BodyPosition>,
}

impl PositionTable {
    /// Query `provider` for each of `bodies`. Any failure aborts the table.
    pub fn compute<P: EphemerisProvider + ?Sized>(
        provider: &P,
        instant: JulianDay,
        bodies: &[Body],
    ) -> Result<Self, ChartError> {
        let mut table = BTreeMap::new();
        for &body in bodies {
            let raw = provider.position(instant, body)?;
            table.insert(body, BodyPosition::from_raw(body, raw)?);
        }
        log::debug!("computed {} positions at {}", table.len(), instant);
        Ok(Self {
            instant,
            bodies: table,
        })
    }

    /// Like [`PositionTable::compute`], but bodies the provider cannot resolve are left out.
    pub fn compute_lenient<P: EphemerisProvider + ?Sized>(
        provider: &P,
        instant: JulianDay,
        bodies: &[Body],
    ) -> Self {
        let mut table = BTreeMap::new();
        for &body in bodies {
            match provider
                .position(instant, body)
                .map_err(ChartError::from)
                .and_then(|raw| BodyPosition::from_raw(body, raw))
            {
                Ok(pos) => {
                    table.insert(body, pos);
                }
                Err(e) => log::warn!("{} unavailable at {}: {}", body, instant, e),
            }
        }
        Self {
            instant,
            bodies: table,
        }
    }

    /// Build a table from known longitudes (no speeds)
    pub fn from_longitudes(
        instant: JulianDay,
        longitudes: &[(Body, f64)],
    ) -> Result<Self, ChartError> {
        let mut table = BTreeMap::new();
        for &(body, lon) in longitudes {
            table.insert(body, BodyPosition::new(body, lon, None)?);
        }
        Ok(Self {
            instant,
            bodies: table,
        })
    }

    pub fn get(&self, body: Body) -> Option<&BodyPosition> {
        self.bodies.get(&body)
    }

    pub fn longitude(&self, body: Body) -> Option<f64> {
        self.get(body).map(|p| p.longitude)
    }

    pub fn sign(&self, body: Body) -> Option<Sign> {
        self.get(body).map(|p| p.sign)
    }

    /// Positions in body order
    pub fn iter(&self) -> impl Iterator<Item = &BodyPosition> {
        self.bodies.values()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Bodies currently moving backwards along the ecliptic
    pub fn retrograde_bodies(&self) -> Vec<Body> {
        self.iter()
            .filter(|p| p.is_retrograde())
            .map(|p| p.body)
            .collect()
    }
}
