use crate::aspects::AspectPair;
use crate::ephemeris::types::{Body, GeoLocation, JulianDay};
use crate::houses::HouseGeometry;
use crate::positions::PositionTable;
use crate::time::{CivilDate, CivilTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Birth data as a user gives it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthRequest {
    pub date: CivilDate,
    pub time: CivilTime,
    /// Place name passed to the geocoder
    pub place: String,
}

/// Birth data with the place resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInfo {
    pub date: CivilDate,
    pub time: CivilTime,
    pub place: String,
    pub location: GeoLocation,
    /// IANA zone identifier
    pub timezone: String,
}

/// A computed natal chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthChart {
    pub info: BirthInfo,
    pub instant: JulianDay,
    pub positions: PositionTable,
    pub houses: HouseGeometry,
    pub aspects: Vec<AspectPair>,
    /// Bodies per house, houses 1-12 always present
    pub placements: BTreeMap<u8, Vec<Body>>,
}

impl BirthChart {
    pub fn house_of(&self, body: Body) -> Option<u8> {
        self.placements
            .iter()
            .find(|(_, bodies)| bodies.contains(&body))
            .map(|(house, _)| *house)
    }

    pub fn retrogrades(&self) -> Vec<Body> {
        self.positions.retrograde_bodies()
    }
}
