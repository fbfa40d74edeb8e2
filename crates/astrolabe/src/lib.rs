//! Natal charts, weekly transits and relationship compatibility.
//!
//! Positions and house cusps come from an [`ephemeris::EphemerisProvider`];
//! everything else is computed here from those values.

pub mod aspects;
pub mod chart;
pub mod compatibility;
pub mod ephemeris;
pub mod error;
pub mod houses;
pub mod positions;
pub mod providers;
pub mod time;
pub mod transit;
pub mod western;

pub use chart::{create_birth_chart, create_birth_chart_at, BirthChart, BirthInfo, BirthRequest, ChartSettings};
pub use compatibility::{analyze_compatibility, CompatibilityResult};
pub use ephemeris::{Body, EphemerisProvider, GeoLocation, JulianDay, SwissEphemerisAdapter};
pub use error::ChartError;
pub use transit::{forecast_week, TransitSettings, WeeklyForecast};
