use crate::aspects::AspectCalculator;
use crate::chart::settings::ChartSettings;
use crate::chart::types::{BirthChart, BirthInfo, BirthRequest};
use crate::ephemeris::EphemerisProvider;
use crate::error::ChartError;
use crate::houses::compute_houses;
use crate::positions::PositionTable;
use crate::providers::{Geocoder, TimezoneLookup};
use crate::time::normalize;

/// Resolve the birth place, then build the chart
pub fn create_birth_chart(
    request: &BirthRequest,
    geocoder: &dyn Geocoder,
    timezones: &dyn TimezoneLookup,
    provider: &dyn EphemerisProvider,
    settings: &ChartSettings,
) -> Result<BirthChart, ChartError> {
    let location = geocoder.geocode(&request.place)?;
    let timezone = timezones.timezone_at(&location)?;
    log::info!(
        "{} resolved to {:.4}, {:.4} ({})",
        request.place,
        location.lat,
        location.lon,
        timezone
    );

    let info = BirthInfo {
        date: request.date,
        time: request.time,
        place: request.place.clone(),
        location,
        timezone,
    };
    create_birth_chart_at(info, provider, settings)
}

/// Build a chart for an already resolved place and zone
pub fn create_birth_chart_at(
    info: BirthInfo,
    provider: &dyn EphemerisProvider,
    settings: &ChartSettings,
) -> Result<BirthChart, ChartError> {
    let instant = normalize(info.date, info.time, &info.timezone)?;
    let positions = PositionTable::compute(provider, instant, &settings.bodies)?;
    let houses = compute_houses(provider, instant, &info.location)?;
    let aspects = AspectCalculator::new().compute_natal_aspects(&positions, &settings.aspects);
    let placements = houses.assign_bodies(&positions);

    log::info!(
        "chart for {} at {}: ASC {}, {} aspects",
        info.place,
        instant,
        houses.ascendant_sign,
        aspects.len()
    );

    Ok(BirthChart {
        info,
        instant,
        positions,
        houses,
        aspects,
        placements,
    })
}
