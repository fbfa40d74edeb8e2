use crate::ephemeris::adapter::EphemerisError;
use crate::ephemeris::types::{Body, GeoLocation};
use thiserror::Error;

/// Errors surfaced by chart, transit and compatibility computations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid date/time: {message}")]
    InvalidTime { message: String },
    #[error("Could not find coordinates for location: {place}")]
    LocationNotFound { place: String },
    #[error("Could not determine timezone for {:.4}, {:.4}", .location.lat, .location.lon)]
    TimezoneUnresolved { location: GeoLocation },
    #[error("Ephemeris unavailable: {0}")]
    EphemerisUnavailable(#[from] EphemerisError),
    #[error("Longitude {longitude} is outside [0, 360)")]
    UnknownSign { longitude: f64 },
    #[error("Chart has no position for {body}")]
    MissingBody { body: Body },
}

impl ChartError {
    pub fn invalid_time(message: impl Into<String>) -> Self {
        ChartError::InvalidTime {
            message: message.into(),
        }
    }
}
