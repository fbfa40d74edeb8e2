//! Lookups for place names and timezones.

use crate::ephemeris::types::GeoLocation;
use crate::error::ChartError;
use crate::time::parse_timezone;
use serde::{Deserialize, Serialize};

/// Place name to coordinates
pub trait Geocoder {
    fn geocode(&self, place: &str) -> Result<GeoLocation, ChartError>;
}

/// Coordinates to IANA zone identifier
pub trait TimezoneLookup {
    fn timezone_at(&self, location: &GeoLocation) -> Result<String, ChartError>;
}

/// Coordinates within this many degrees of a known place resolve to its zone
const MATCH_TOLERANCE_DEG: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub location: GeoLocation,
    pub timezone: String,
}

/// A fixed table of named places
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gazetteer {
    places: Vec<Place>,
}

impl Gazetteer {
    pub fn new(places: Vec<Place>) -> Self {
        Self { places }
    }

    pub fn add(&mut self, place: Place) {
        self.places.push(place);
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    fn find(&self, name: &str) -> Option<&Place> {
        let wanted = name.trim();
        self.places
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(wanted))
    }
}

impl Geocoder for Gazetteer {
    fn geocode(&self, place: &str) -> Result<GeoLocation, ChartError> {
        self.find(place)
            .map(|p| p.location)
            .ok_or_else(|| ChartError::LocationNotFound {
                place: place.to_string(),
            })
    }
}

impl TimezoneLookup for Gazetteer {
    fn timezone_at(&self, location: &GeoLocation) -> Result<String, ChartError> {
        self.places
            .iter()
            .find(|p| {
                (p.location.lat - location.lat).abs() <= MATCH_TOLERANCE_DEG
                    && (p.location.lon - location.lon).abs() <= MATCH_TOLERANCE_DEG
            })
            .map(|p| p.timezone.clone())
            .ok_or(ChartError::TimezoneUnresolved {
                location: *location,
            })
    }
}

/// Same zone everywhere; for callers that already know it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTimezone(String);

impl FixedTimezone {
    pub fn new(tz_id: &str) -> Result<Self, ChartError> {
        parse_timezone(tz_id)?;
        Ok(Self(tz_id.to_string()))
    }
}

impl TimezoneLookup for FixedTimezone {
    fn timezone_at(&self, _location: &GeoLocation) -> Result<String, ChartError> {
        Ok(self.0.clone())
    }
}
