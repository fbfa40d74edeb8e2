use crate::aspects::AspectCalculator;
use crate::ephemeris::types::Body;
use crate::ephemeris::EphemerisProvider;
use crate::error::ChartError;
use crate::positions::PositionTable;
use crate::time::noon_utc;
use crate::transit::areas::life_areas;
use crate::transit::day::{classify_day, day_mood, focus_event};
use crate::transit::motion::is_applying;
use crate::transit::types::{
    DayForecast, TransitEvent, TransitSettings, WeeklyForecast, FORECAST_DAYS,
};
use chrono::{Days, NaiveDate};

/// Index of the sample used for the weekly retrograde list
const MID_WEEK: usize = 3;

/// Bodies reported in the weekly retrograde list; the outer planets are
/// retrograde for months at a time and are left out.
pub const RETROGRADE_CANDIDATES: [Body; 5] = [
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

fn weekly_retrogrades(sample: &PositionTable) -> Vec<Body> {
    sample
        .retrograde_bodies()
        .into_iter()
        .filter(|body| RETROGRADE_CANDIDATES.contains(body))
        .collect()
}

fn forecast_dates(start: NaiveDate) -> Result<Vec<NaiveDate>, ChartError> {
    (0..=FORECAST_DAYS as u64)
        .map(|offset| {
            start.checked_add_days(Days::new(offset)).ok_or_else(|| {
                ChartError::invalid_time(format!("{} + {} days is out of range", start, offset))
            })
        })
        .collect()
}

/// Transits of each tracked body to `natal` for the seven days from `start`.
///
/// Every day is sampled at noon UTC. A body missing from any of the seven
/// daily samples fails the forecast; the eighth sample only feeds the last
/// day's applying check, so gaps there degrade to "separating".
pub fn forecast_week<P: EphemerisProvider + ?Sized>(
    provider: &P,
    natal: &PositionTable,
    start: NaiveDate,
    settings: &TransitSettings,
) -> Result<WeeklyForecast, ChartError> {
    let dates = forecast_dates(start)?;
    let orbs = settings.aspects.scaled(settings.orb_factor);
    let calculator = AspectCalculator::new();

    let mut samples = Vec::with_capacity(dates.len());
    for date in &dates[..FORECAST_DAYS] {
        samples.push(PositionTable::compute(provider, noon_utc(*date), &settings.bodies)?);
    }
    samples.push(PositionTable::compute_lenient(
        provider,
        noon_utc(dates[FORECAST_DAYS]),
        &settings.bodies,
    ));

    let mut days = Vec::with_capacity(FORECAST_DAYS);
    for (index, date) in dates[..FORECAST_DAYS].iter().enumerate() {
        let today = &samples[index];
        let tomorrow = &samples[index + 1];

        let mut events = Vec::new();
        for transit in today.iter() {
            for natal_pos in natal.iter() {
                let Some(aspect) =
                    calculator.calculate_aspect(transit.longitude, natal_pos.longitude, &orbs)
                else {
                    continue;
                };
                let tomorrow_lon = tomorrow.longitude(transit.body);
                if tomorrow_lon.is_none() {
                    log::warn!(
                        "no position for {} after {}; treating {} to natal {} as separating",
                        transit.body,
                        date,
                        aspect.kind,
                        natal_pos.body
                    );
                }
                events.push(TransitEvent {
                    transit: transit.body,
                    natal: natal_pos.body,
                    aspect: aspect.kind,
                    orb: aspect.orb,
                    nature: aspect.nature,
                    date: *date,
                    applying: is_applying(
                        natal_pos.longitude,
                        transit.longitude,
                        tomorrow_lon,
                        aspect.exact_angle,
                    ),
                });
            }
        }

        log::debug!("{}: {} transits", date, events.len());
        days.push(DayForecast {
            date: *date,
            key: date.format("%A, %b %d").to_string(),
            label: classify_day(&events),
            mood: day_mood(&events),
            focus: focus_event(&events).copied(),
            events,
        });
    }

    let all_events: Vec<TransitEvent> = days.iter().flat_map(|d| d.events.iter().copied()).collect();
    let opening = &samples[0];

    Ok(WeeklyForecast {
        start,
        end: dates[FORECAST_DAYS - 1],
        sun_sign: opening.sign(Body::Sun),
        moon_sign: opening.sign(Body::Moon),
        retrogrades: weekly_retrogrades(&samples[MID_WEEK]),
        dominant_aspect: most_frequent(all_events.iter().map(|e| e.aspect)),
        dominant_body: most_frequent(all_events.iter().map(|e| e.transit)),
        life_areas: life_areas(&all_events),
        days,
    })
}

/// Most frequent item; among equal counts the first seen wins
fn most_frequent<T: Copy + PartialEq>(items: impl Iterator<Item = T>) -> Option<T> {
    let mut counts: Vec<(T, usize)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(seen, _)| *seen == item) {
            Some((_, n)) => *n += 1,
            None => counts.push((item, 1)),
        }
    }
    let mut best: Option<(T, usize)> = None;
    for (item, n) in counts {
        if best.map_or(true, |(_, top)| n > top) {
            best = Some((item, n));
        }
    }
    best.map(|(item, _)| item)
}
