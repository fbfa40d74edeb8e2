use crate::ephemeris::provider::EphemerisProvider;
use crate::ephemeris::types::{Body, EphemerisSettings, GeoLocation, JulianDay, RawPosition};
use crate::western::zodiac::normalize_degrees;
use std::env;
use std::path::PathBuf;
use swisseph::swe::calc_ut;
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Failed to calculate position for {body} at {instant}: {message}")]
    CalculationFailed {
        body: Body,
        instant: JulianDay,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
    #[error("Malformed ephemeris response: {message}")]
    MalformedResponse { message: String },
}

/// House system mapping
const HOUSE_SYSTEMS: &[(&str, u8)] = &[
    ("placidus", b'P'),
    ("whole_sign", b'W'),
    ("koch", b'K'),
    ("equal", b'E'),
    ("regiomontanus", b'R'),
    ("campanus", b'C'),
    ("alcabitius", b'A'),
    ("morinus", b'M'),
];

// FLG_SWIEPH | FLG_SPEED
const CALC_FLAGS: i32 = 2 | 256;
// FLG_SWIEPH
const HOUSE_FLAGS: i32 = 2;

/// Swiss Ephemeris adapter implementation
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    house_system: String,
    house_system_byte: u8,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter with optional ephemeris path
    pub fn new(
        ephemeris_path: Option<PathBuf>,
        settings: &EphemerisSettings,
    ) -> Result<Self, EphemerisError> {
        let path = ephemeris_path.unwrap_or_else(|| {
            env::var("SWISS_EPHEMERIS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/usr/local/share/swisseph"))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        let house_system_byte = get_house_system_byte(&settings.house_system)?;
        log::debug!(
            "Swiss Ephemeris at {} with {} houses",
            path.display(),
            settings.house_system
        );

        Ok(Self {
            ephemeris_path: path,
            house_system: settings.house_system.to_lowercase(),
            house_system_byte,
        })
    }

    pub fn ephemeris_path(&self) -> &PathBuf {
        &self.ephemeris_path
    }

    pub fn house_system(&self) -> &str {
        &self.house_system
    }
}

impl EphemerisProvider for SwissEphemerisAdapter {
    fn position(&self, instant: JulianDay, body: Body) -> Result<RawPosition, EphemerisError> {
        let result = calc_ut(instant.value(), body.swe_code() as u32, CALC_FLAGS as u32)
            .map_err(|e| EphemerisError::CalculationFailed {
                body,
                instant,
                message: format!("Swiss Ephemeris error: {}", e),
            })?;

        let out = result.out;
        let longitude = out[0];
        let speed_longitude = out[3];
        if !longitude.is_finite() {
            return Err(EphemerisError::MalformedResponse {
                message: format!("non-finite longitude {} for {}", longitude, body),
            });
        }

        Ok(RawPosition {
            lon: normalize_degrees(longitude),
            speed_lon: speed_longitude.is_finite().then_some(speed_longitude),
        })
    }

    fn houses(
        &self,
        instant: JulianDay,
        location: &GeoLocation,
    ) -> Result<[f64; 12], EphemerisError> {
        use swisseph::swe::houses_ex;
        use swisseph::Cusp;

        let (c, _a) = houses_ex(
            instant.value(),
            HOUSE_FLAGS,
            location.lat,
            location.lon,
            self.house_system_byte as i32,
        );
        let cusps = Cusp::from_array(c);
        let cusp_values = [
            cusps.first, cusps.second, cusps.third, cusps.fourth,
            cusps.fifth, cusps.sixth, cusps.seventh, cusps.eighth,
            cusps.ninth, cusps.tenth, cusps.eleventh, cusps.twelfth,
        ];

        if cusp_values.iter().any(|c| !c.is_finite()) {
            return Err(EphemerisError::HouseCalculationFailed {
                message: format!(
                    "{} houses undefined at lat {:.4}, lon {:.4}",
                    self.house_system, location.lat, location.lon
                ),
            });
        }

        Ok(cusp_values.map(normalize_degrees))
    }
}

/// Convert house system string to byte format
fn get_house_system_byte(house_system: &str) -> Result<u8, EphemerisError> {
    HOUSE_SYSTEMS
        .iter()
        .find(|(name, _)| *name == house_system.to_lowercase())
        .map(|(_, byte)| *byte)
        .ok_or_else(|| EphemerisError::InvalidHouseSystem {
            system: house_system.to_string(),
            valid: HOUSE_SYSTEMS.iter().map(|(name, _)| name.to_string()).collect(),
        })
}
