pub mod adapter;
pub mod provider;
pub mod types;

pub use adapter::{EphemerisError, SwissEphemerisAdapter};
pub use provider::EphemerisProvider;
pub use types::{Body, EphemerisSettings, GeoLocation, JulianDay, RawPosition};
