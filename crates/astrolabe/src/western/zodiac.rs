//! Zodiac signs with their element and quality.
//!
//! Each sign spans 30 degrees of ecliptic longitude, starting at 0° Aries.

use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SIGN_SPAN: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

const SIGN_ORDER: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

impl Sign {
    pub const ALL: [Sign; 12] = SIGN_ORDER;

    /// Sign index 0 (Aries) ..= 11 (Pisces)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Sign {
        SIGN_ORDER[index % 12]
    }

    /// Sign containing `longitude`, which must lie in [0, 360).
    pub fn from_longitude(longitude: f64) -> Result<Sign, ChartError> {
        if !longitude.is_finite() || !(0.0..360.0).contains(&longitude) {
            return Err(ChartError::UnknownSign { longitude });
        }
        Ok(Sign::from_index((longitude / SIGN_SPAN).floor() as usize))
    }

    pub fn element(self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }

    pub fn quality(self) -> Quality {
        match self.index() % 3 {
            0 => Quality::Cardinal,
            1 => Quality::Fixed,
            _ => Quality::Mutable,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wrap any finite angle into [0, 360).
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Degrees elapsed inside the sign, in [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    normalize_degrees(longitude) % SIGN_SPAN
}
