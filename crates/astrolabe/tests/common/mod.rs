#![allow(dead_code)]

use astrolabe::ephemeris::{
    Body, EphemerisError, EphemerisProvider, GeoLocation, JulianDay, RawPosition,
};
use astrolabe::positions::PositionTable;
use astrolabe::western::normalize_degrees;
use std::collections::BTreeMap;

/// Bodies moving at constant speed from an epoch, over fixed house cusps.
pub struct FixedEphemeris {
    epoch: JulianDay,
    motion: BTreeMap<Body, (f64, f64)>,
    cusps: Option<[f64; 12]>,
    /// Body -> first instant it can no longer be resolved
    unavailable_from: BTreeMap<Body, f64>,
}

impl FixedEphemeris {
    pub fn new(epoch: JulianDay) -> Self {
        Self {
            epoch,
            motion: BTreeMap::new(),
            cusps: Some(even_cusps(0.0)),
            unavailable_from: BTreeMap::new(),
        }
    }

    /// `body` at `lon` on the epoch, moving `speed` degrees a day
    pub fn with_body(mut self, body: Body, lon: f64, speed: f64) -> Self {
        self.motion.insert(body, (lon, speed));
        self
    }

    /// Every body at the given longitude, stationary
    pub fn with_longitudes(mut self, longitudes: &[(Body, f64)]) -> Self {
        for &(body, lon) in longitudes {
            self.motion.insert(body, (lon, 0.0));
        }
        self
    }

    pub fn with_cusps(mut self, cusps: [f64; 12]) -> Self {
        self.cusps = Some(cusps);
        self
    }

    pub fn without_houses(mut self) -> Self {
        self.cusps = None;
        self
    }

    pub fn unavailable_from(mut self, body: Body, instant: JulianDay) -> Self {
        self.unavailable_from.insert(body, instant.value());
        self
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn position(&self, instant: JulianDay, body: Body) -> Result<RawPosition, EphemerisError> {
        let failed = || EphemerisError::CalculationFailed {
            body,
            instant,
            message: "no data".to_string(),
        };
        if let Some(from) = self.unavailable_from.get(&body) {
            if instant.value() >= *from {
                return Err(failed());
            }
        }
        let (lon, speed) = self.motion.get(&body).copied().ok_or_else(failed)?;
        let elapsed = instant.value() - self.epoch.value();
        Ok(RawPosition {
            lon: normalize_degrees(lon + speed * elapsed),
            speed_lon: Some(speed),
        })
    }

    fn houses(
        &self,
        _instant: JulianDay,
        _location: &GeoLocation,
    ) -> Result<[f64; 12], EphemerisError> {
        self.cusps.ok_or(EphemerisError::HouseCalculationFailed {
            message: "houses undefined".to_string(),
        })
    }
}

/// Equal 30° houses starting at `offset`
pub fn even_cusps(offset: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, c) in cusps.iter_mut().enumerate() {
        *c = normalize_degrees(offset + 30.0 * i as f64);
    }
    cusps
}

pub fn table(longitudes: &[(Body, f64)]) -> PositionTable {
    PositionTable::from_longitudes(JulianDay(2_451_545.0), longitudes).unwrap()
}

/// Small deterministic generator for property-style loops
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Uniform in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    pub fn longitude(&mut self) -> f64 {
        self.next_f64() * 360.0
    }

    /// Twelve cusps, strictly increasing once wrapped, starting anywhere
    pub fn cusps(&mut self) -> [f64; 12] {
        let mut spans = [0.0; 12];
        for s in spans.iter_mut() {
            *s = 10.0 + self.next_f64() * 40.0;
        }
        let total: f64 = spans.iter().sum();
        let start = self.longitude();
        let mut cusps = [0.0; 12];
        let mut acc = start;
        for (i, span) in spans.iter().enumerate() {
            cusps[i] = normalize_degrees(acc);
            acc += span / total * 360.0;
        }
        cusps
    }

    pub fn chart_table(&mut self) -> PositionTable {
        let longitudes: Vec<(Body, f64)> = Body::ALL.iter().map(|b| (*b, self.longitude())).collect();
        table(&longitudes)
    }
}
