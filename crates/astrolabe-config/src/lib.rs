use astrolabe::aspects::{AspectKind, AspectSettings};
use astrolabe::ephemeris::{EphemerisSettings, GeoLocation};
use astrolabe::providers::{Gazetteer, Place};
use astrolabe::time::parse_timezone;
use astrolabe::transit::{TransitSettings, DEFAULT_ORB_FACTOR};
use astrolabe::ChartSettings;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Relative locations tried by [`load_config`], from the repo root and from a crate dir.
const SEARCH_PATHS: [&str; 2] = ["configs/astrolabe.toml", "../../configs/astrolabe.toml"];

#[derive(Debug, Clone)]
pub struct AstrolabeConfig {
    /// Swiss Ephemeris data directory; `None` falls back to `SWISS_EPHEMERIS_PATH`
    pub ephemeris_path: Option<PathBuf>,
    pub house_system: String,
    pub orbs: BTreeMap<AspectKind, f64>,
    pub orb_factor: f64,
    pub places: Vec<Place>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
    #[serde(default = "default_house_system")]
    house_system: String,
}

#[derive(Debug, Clone, Deserialize)]
struct TransitToml {
    #[serde(default = "default_orb_factor")]
    orb_factor: f64,
}

impl Default for TransitToml {
    fn default() -> Self {
        Self {
            orb_factor: default_orb_factor(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct PlaceToml {
    name: String,
    lat: f64,
    lon: f64,
    timezone: String,
}

fn default_house_system() -> String {
    EphemerisSettings::default().house_system
}

fn default_orb_factor() -> f64 {
    DEFAULT_ORB_FACTOR
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: EphemerisToml,
    /// Aspect name to orb, e.g. `trine = 7.5`
    #[serde(default)]
    orbs: BTreeMap<String, f64>,
    #[serde(default)]
    transit: TransitToml,
    #[serde(default)]
    places: Vec<PlaceToml>,
}

impl Default for AstrolabeConfig {
    fn default() -> Self {
        Self {
            ephemeris_path: None,
            house_system: default_house_system(),
            orbs: AspectSettings::default().orbs,
            orb_factor: DEFAULT_ORB_FACTOR,
            places: Vec::new(),
        }
    }
}

impl AstrolabeConfig {
    pub fn aspect_settings(&self) -> AspectSettings {
        AspectSettings {
            orbs: self.orbs.clone(),
        }
    }

    pub fn chart_settings(&self) -> ChartSettings {
        ChartSettings {
            aspects: self.aspect_settings(),
            ..ChartSettings::default()
        }
    }

    pub fn transit_settings(&self) -> TransitSettings {
        TransitSettings {
            aspects: self.aspect_settings(),
            orb_factor: self.orb_factor,
            ..TransitSettings::default()
        }
    }

    pub fn ephemeris_settings(&self) -> EphemerisSettings {
        EphemerisSettings {
            house_system: self.house_system.clone(),
        }
    }

    pub fn gazetteer(&self) -> Gazetteer {
        Gazetteer::new(self.places.clone())
    }
}

pub fn parse_config(text: &str) -> anyhow::Result<AstrolabeConfig> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse astrolabe config: {e}"))?;

    let mut orbs = AspectSettings::default().orbs;
    for (name, orb) in root.orbs {
        let kind = AspectKind::from_name(&name)
            .ok_or_else(|| anyhow::anyhow!("Unknown aspect in [orbs]: {name}"))?;
        if !orb.is_finite() || orb < 0.0 {
            anyhow::bail!("Orb for {name} must be a non-negative number, got {orb}");
        }
        orbs.insert(kind, orb);
    }

    let orb_factor = root.transit.orb_factor;
    if !orb_factor.is_finite() || orb_factor <= 0.0 {
        anyhow::bail!("transit.orb_factor must be positive, got {orb_factor}");
    }

    let mut places = Vec::with_capacity(root.places.len());
    for p in root.places {
        parse_timezone(&p.timezone)
            .map_err(|e| anyhow::anyhow!("Place {} has a bad timezone: {e}", p.name))?;
        if !(-90.0..=90.0).contains(&p.lat) || !(-180.0..=180.0).contains(&p.lon) {
            anyhow::bail!("Place {} has coordinates out of range: {}, {}", p.name, p.lat, p.lon);
        }
        places.push(Place {
            name: p.name,
            location: GeoLocation {
                lat: p.lat,
                lon: p.lon,
            },
            timezone: p.timezone,
        });
    }

    Ok(AstrolabeConfig {
        ephemeris_path: root.ephemeris.path,
        house_system: root.ephemeris.house_system,
        orbs,
        orb_factor,
        places,
    })
}

pub fn load_config_from(path: &Path) -> anyhow::Result<AstrolabeConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    let config = parse_config(&text)?;
    log::info!(
        "loaded {} ({} places, {} houses)",
        path.display(),
        config.places.len(),
        config.house_system
    );
    Ok(config)
}

/// Try the usual relative paths for `configs/astrolabe.toml`.
pub fn load_config() -> anyhow::Result<AstrolabeConfig> {
    for p in &SEARCH_PATHS {
        let path = Path::new(p);
        if path.exists() {
            return load_config_from(path);
        }
    }
    anyhow::bail!("Could not load astrolabe.toml from {:?}", SEARCH_PATHS);
}

/// Like [`load_config`], but a missing file yields the defaults.
pub fn load_config_or_default() -> anyhow::Result<AstrolabeConfig> {
    if SEARCH_PATHS.iter().any(|p| Path::new(p).exists()) {
        load_config()
    } else {
        log::warn!("no astrolabe.toml found, using built-in defaults");
        Ok(AstrolabeConfig::default())
    }
}
