//! Weekly transit forecasts against a natal chart.

pub mod areas;
pub mod day;
pub mod engine;
pub mod motion;
pub mod types;

pub use areas::{life_area_outlook, life_areas};
pub use day::{classify_day, day_mood, focus_event, focus_score, AspectTally};
pub use engine::{forecast_week, RETROGRADE_CANDIDATES};
pub use motion::is_applying;
pub use types::{
    AreaTone, DayForecast, DayLabel, DayMood, LifeArea, LifeAreaOutlook, TransitEvent,
    TransitSettings, WeeklyForecast, DEFAULT_ORB_FACTOR, FORECAST_DAYS,
};
