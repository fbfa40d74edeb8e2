use crate::aspects::{AspectKind, AspectNature, AspectSettings};
use crate::ephemeris::types::Body;
use crate::western::zodiac::Sign;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default multiplier applied to natal orbs for transits
pub const DEFAULT_ORB_FACTOR: f64 = 0.8;

/// Number of days in a forecast
pub const FORECAST_DAYS: usize = 7;

/// A transiting body aspecting a natal body on one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitEvent {
    pub transit: Body,
    pub natal: Body,
    pub aspect: AspectKind,
    pub orb: f64,
    pub nature: AspectNature,
    pub date: NaiveDate,
    /// Orb shrinking towards tomorrow
    pub applying: bool,
}

/// Significance label for a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayLabel {
    Challenging,
    Flowing,
    EmotionallySignificant,
    Communication,
}

impl DayLabel {
    pub fn description(self) -> &'static str {
        match self {
            DayLabel::Challenging => "Challenging day - prepare for obstacles",
            DayLabel::Flowing => "Flowing day - good for important activities",
            DayLabel::EmotionallySignificant => "Emotionally significant day",
            DayLabel::Communication => "Important day for communication and decisions",
        }
    }
}

/// Overall energy of a day with at least one transit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayMood {
    ChallengingButProductive,
    PotentiallyDifficult,
    HarmoniousAndCreative,
    SmoothAndFlowing,
    IntenseAndFocused,
    EmotionallySignificant,
    RelativelyBalanced,
}

impl DayMood {
    pub fn description(self) -> &'static str {
        match self {
            DayMood::ChallengingButProductive => "Challenging but productive",
            DayMood::PotentiallyDifficult => "Potentially difficult",
            DayMood::HarmoniousAndCreative => "Harmonious and creative",
            DayMood::SmoothAndFlowing => "Smooth and flowing",
            DayMood::IntenseAndFocused => "Intense and focused",
            DayMood::EmotionallySignificant => "Emotionally significant",
            DayMood::RelativelyBalanced => "Relatively balanced",
        }
    }
}

/// One day of the forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: NaiveDate,
    /// Display key, e.g. `Monday, Jan 15`
    pub key: String,
    pub events: Vec<TransitEvent>,
    pub label: Option<DayLabel>,
    pub mood: Option<DayMood>,
    pub focus: Option<TransitEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifeArea {
    Career,
    Relationships,
    Communication,
    Home,
    Growth,
}

impl LifeArea {
    pub const ALL: [LifeArea; 5] = [
        LifeArea::Career,
        LifeArea::Relationships,
        LifeArea::Communication,
        LifeArea::Home,
        LifeArea::Growth,
    ];

    pub fn title(self) -> &'static str {
        match self {
            LifeArea::Career => "Career & Goals",
            LifeArea::Relationships => "Relationships",
            LifeArea::Communication => "Communication",
            LifeArea::Home => "Home & Family",
            LifeArea::Growth => "Personal Growth",
        }
    }
}

/// Tone of a life area over the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaTone {
    /// No transits touch the area
    Quiet,
    Challenging,
    Flowing,
    Mixed,
    /// Jupiter and Saturn both active
    ExpansionWithStructure,
    Expansion,
    Discipline,
    /// Only outer planets active
    Transformation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeAreaOutlook {
    pub area: LifeArea,
    pub tone: AreaTone,
    pub aspect_count: usize,
    /// Transiting bodies with a specific note for this area
    pub highlights: Vec<Body>,
}

/// Seven days of transits to a natal chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyForecast {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub sun_sign: Option<Sign>,
    pub moon_sign: Option<Sign>,
    /// Bodies retrograde at mid-week
    pub retrogrades: Vec<Body>,
    pub days: Vec<DayForecast>,
    pub dominant_aspect: Option<AspectKind>,
    pub dominant_body: Option<Body>,
    pub life_areas: Vec<LifeAreaOutlook>,
}

impl WeeklyForecast {
    pub fn events(&self) -> impl Iterator<Item = &TransitEvent> {
        self.days.iter().flat_map(|d| d.events.iter())
    }

    /// Days with a significance label, in date order
    pub fn significant_days(&self) -> impl Iterator<Item = (&DayForecast, DayLabel)> {
        self.days
            .iter()
            .filter_map(|d| d.label.map(|label| (d, label)))
    }
}

/// Transit tuning
#[derive(Debug, Clone, PartialEq)]
pub struct TransitSettings {
    /// Natal orbs before scaling
    pub aspects: AspectSettings,
    pub orb_factor: f64,
    /// Bodies sampled each day
    pub bodies: Vec<Body>,
}

impl Default for TransitSettings {
    fn default() -> Self {
        Self {
            aspects: AspectSettings::default(),
            orb_factor: DEFAULT_ORB_FACTOR,
            bodies: Body::ALL.to_vec(),
        }
    }
}
