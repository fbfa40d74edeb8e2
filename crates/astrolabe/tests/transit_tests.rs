mod common;

use astrolabe::aspects::AspectKind;
use astrolabe::ephemeris::Body;
use astrolabe::time::noon_utc;
use astrolabe::transit::{
    forecast_week, AreaTone, DayLabel, DayMood, LifeArea, TransitSettings,
};
use astrolabe::ChartError;
use chrono::NaiveDate;
use common::{table, FixedEphemeris};

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
}

fn tracking(bodies: &[Body]) -> TransitSettings {
    TransitSettings {
        bodies: bodies.to_vec(),
        ..TransitSettings::default()
    }
}

#[test]
fn test_mars_closing_on_natal_sun() {
    let provider = FixedEphemeris::new(noon_utc(monday())).with_body(Body::Mars, 94.0, 1.0);
    let natal = table(&[(Body::Sun, 100.0)]);

    let forecast = forecast_week(&provider, &natal, monday(), &tracking(&[Body::Mars])).unwrap();

    assert_eq!(forecast.start, monday());
    assert_eq!(forecast.end, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    assert_eq!(forecast.days.len(), 7);
    assert_eq!(forecast.days[0].key, "Monday, Mar 04");
    assert_eq!(forecast.days[6].key, "Sunday, Mar 10");

    let orbs: Vec<f64> = forecast.events().map(|e| e.orb).collect();
    assert_eq!(orbs, vec![6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0]);
    let applying: Vec<bool> = forecast.events().map(|e| e.applying).collect();
    assert_eq!(applying, vec![true, true, true, true, true, true, false]);

    for day in &forecast.days {
        assert_eq!(day.events.len(), 1);
        assert_eq!(day.events[0].aspect, AspectKind::Conjunction);
        assert_eq!(day.events[0].date, day.date);
        assert_eq!(day.mood, Some(DayMood::IntenseAndFocused));
        assert_eq!(day.label, None);
        assert_eq!(day.focus, Some(day.events[0]));
    }

    assert_eq!(forecast.dominant_aspect, Some(AspectKind::Conjunction));
    assert_eq!(forecast.dominant_body, Some(Body::Mars));
    assert_eq!(forecast.sun_sign, None);
    assert!(forecast.retrogrades.is_empty());
    assert_eq!(forecast.significant_days().count(), 0);

    let areas = &forecast.life_areas;
    assert_eq!(areas.len(), 5);
    let career = areas.iter().find(|a| a.area == LifeArea::Career).unwrap();
    assert_eq!(career.tone, AreaTone::Mixed);
    assert_eq!(career.aspect_count, 7);
    assert!(career.highlights.is_empty());
    let relationships = areas.iter().find(|a| a.area == LifeArea::Relationships).unwrap();
    assert_eq!(relationships.tone, AreaTone::Mixed);
    assert_eq!(relationships.highlights, vec![Body::Mars]);
    for quiet in [LifeArea::Communication, LifeArea::Home, LifeArea::Growth] {
        let outlook = areas.iter().find(|a| a.area == quiet).unwrap();
        assert_eq!(outlook.tone, AreaTone::Quiet);
        assert_eq!(outlook.aspect_count, 0);
    }
}

#[test]
fn test_last_day_uses_eighth_sample() {
    let epoch = noon_utc(monday());
    let natal = table(&[(Body::Sun, 100.0)]);
    let settings = tracking(&[Body::Mars]);

    let provider = FixedEphemeris::new(epoch).with_body(Body::Mars, 88.0, 1.0);
    let forecast = forecast_week(&provider, &natal, monday(), &settings).unwrap();
    let events: Vec<_> = forecast.events().collect();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    assert_eq!(events[0].orb, 6.0);
    assert!(events[0].applying);

    // without the eighth sample the same aspect reads as separating
    let provider = FixedEphemeris::new(epoch)
        .with_body(Body::Mars, 88.0, 1.0)
        .unavailable_from(Body::Mars, epoch.plus_days(7.0));
    let forecast = forecast_week(&provider, &natal, monday(), &settings).unwrap();
    let events: Vec<_> = forecast.events().collect();
    assert_eq!(events.len(), 1);
    assert!(!events[0].applying);
}

#[test]
fn test_gap_inside_week_fails() {
    let epoch = noon_utc(monday());
    let provider = FixedEphemeris::new(epoch)
        .with_body(Body::Mars, 94.0, 1.0)
        .unavailable_from(Body::Mars, epoch.plus_days(3.0));
    let natal = table(&[(Body::Sun, 100.0)]);

    let result = forecast_week(&provider, &natal, monday(), &tracking(&[Body::Mars]));
    assert!(matches!(result, Err(ChartError::EphemerisUnavailable(_))));
}

#[test]
fn test_mid_week_retrogrades() {
    let provider = FixedEphemeris::new(noon_utc(monday()))
        .with_body(Body::Sun, 344.0, 1.0)
        .with_body(Body::Mercury, 350.0, -0.5);
    let natal = table(&[(Body::Moon, 200.0)]);

    let forecast = forecast_week(
        &provider,
        &natal,
        monday(),
        &tracking(&[Body::Sun, Body::Mercury]),
    )
    .unwrap();

    assert_eq!(forecast.retrogrades, vec![Body::Mercury]);
    assert_eq!(forecast.sun_sign, Some(astrolabe::western::Sign::Pisces));
    assert_eq!(forecast.moon_sign, None);
}

#[test]
fn test_outer_planet_retrogrades_not_reported() {
    let provider = FixedEphemeris::new(noon_utc(monday()))
        .with_body(Body::Mercury, 350.0, -0.5)
        .with_body(Body::Saturn, 320.0, 0.1)
        .with_body(Body::Uranus, 50.0, -0.02)
        .with_body(Body::Pluto, 300.0, -0.01);
    let natal = table(&[(Body::Moon, 200.0)]);

    let forecast = forecast_week(
        &provider,
        &natal,
        monday(),
        &tracking(&[Body::Mercury, Body::Saturn, Body::Uranus, Body::Pluto]),
    )
    .unwrap();

    assert_eq!(forecast.retrogrades, vec![Body::Mercury]);
}

#[test]
fn test_moon_rule_overrides_flowing() {
    let provider = FixedEphemeris::new(noon_utc(monday())).with_body(Body::Moon, 0.0, 0.0);
    let natal = table(&[
        (Body::Sun, 0.0),
        (Body::Moon, 60.0),
        (Body::Mercury, 120.0),
        (Body::Venus, 240.0),
    ]);

    let forecast = forecast_week(&provider, &natal, monday(), &tracking(&[Body::Moon])).unwrap();
    let day = &forecast.days[0];

    assert_eq!(day.events.len(), 4);
    assert_eq!(day.label, Some(DayLabel::EmotionallySignificant));
    assert_eq!(day.mood, Some(DayMood::SmoothAndFlowing));
    assert_eq!(forecast.significant_days().count(), 7);
    // stationary body never applies
    assert!(forecast.events().all(|e| !e.applying));
}

#[test]
fn test_transit_orbs_are_scaled() {
    // 7° off a conjunction is inside the natal orb of 8 but outside 6.4
    let provider = FixedEphemeris::new(noon_utc(monday())).with_body(Body::Venus, 107.0, 0.0);
    let natal = table(&[(Body::Sun, 100.0)]);

    let scaled = forecast_week(&provider, &natal, monday(), &tracking(&[Body::Venus])).unwrap();
    assert_eq!(scaled.events().count(), 0);
    assert_eq!(scaled.dominant_aspect, None);
    assert!(scaled.days.iter().all(|d| d.mood.is_none() && d.focus.is_none()));

    let settings = TransitSettings {
        orb_factor: 1.0,
        ..tracking(&[Body::Venus])
    };
    let unscaled = forecast_week(&provider, &natal, monday(), &settings).unwrap();
    assert_eq!(unscaled.events().count(), 7);
}
