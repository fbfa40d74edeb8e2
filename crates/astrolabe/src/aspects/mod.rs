pub mod calculator;
pub mod types;

pub use calculator::{round_orb, shortest_angle, AspectCalculator};
pub use types::{
    AspectCore, AspectDefinition, AspectKind, AspectNature, AspectPair, AspectSettings,
    ASPECT_CATALOG,
};
