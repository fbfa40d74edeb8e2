use anyhow::Context;
use astrolabe::ephemeris::{EphemerisProvider, GeoLocation};
use astrolabe::providers::{FixedTimezone, Gazetteer, TimezoneLookup};
use astrolabe::time::{CivilDate, CivilTime};
use astrolabe::{create_birth_chart, create_birth_chart_at, BirthChart, BirthInfo, BirthRequest, ChartSettings};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use std::str::FromStr;

/// Birth data from the command line
#[derive(Debug, Clone, PartialEq)]
pub struct BirthSpec {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub place: String,
    /// IANA zone; skips the gazetteer zone lookup
    pub timezone: Option<String>,
    /// Coordinates; skip geocoding when given together with a timezone
    pub location: Option<GeoLocation>,
}

pub fn parse_time(s: &str) -> anyhow::Result<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .with_context(|| format!("expected HH:MM or HH:MM:SS, got '{s}'"))
}

/// `DATE,TIME,PLACE[,TIMEZONE]`, e.g. `1990-06-15,14:30,Paris`
impl FromStr for BirthSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let (date, time, place, timezone) = match parts.as_slice() {
            [date, time, place] => (date, time, place, None),
            [date, time, place, tz] => (date, time, place, Some(tz.to_string())),
            _ => anyhow::bail!("expected DATE,TIME,PLACE[,TIMEZONE], got '{s}'"),
        };
        Ok(Self {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .with_context(|| format!("bad date '{date}'"))?,
            time: parse_time(time)?,
            place: place.to_string(),
            timezone,
            location: None,
        })
    }
}

impl BirthSpec {
    fn civil(&self) -> (CivilDate, CivilTime) {
        (
            CivilDate::new(self.date.year(), self.date.month(), self.date.day()),
            CivilTime::new(self.time.hour(), self.time.minute(), self.time.second()),
        )
    }

    pub fn chart(
        &self,
        gazetteer: &Gazetteer,
        provider: &dyn EphemerisProvider,
        settings: &ChartSettings,
    ) -> anyhow::Result<BirthChart> {
        let (date, time) = self.civil();

        let chart = match (&self.location, &self.timezone) {
            (Some(location), Some(timezone)) => {
                let info = BirthInfo {
                    date,
                    time,
                    place: self.place.clone(),
                    location: *location,
                    timezone: timezone.clone(),
                };
                create_birth_chart_at(info, provider, settings)?
            }
            _ => {
                let request = BirthRequest {
                    date,
                    time,
                    place: self.place.clone(),
                };
                let fixed;
                let timezones: &dyn TimezoneLookup = match &self.timezone {
                    Some(tz) => {
                        fixed = FixedTimezone::new(tz)?;
                        &fixed
                    }
                    None => gazetteer,
                };
                create_birth_chart(&request, gazetteer, timezones, provider, settings)?
            }
        };
        Ok(chart)
    }
}
