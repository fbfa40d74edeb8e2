use crate::aspects::AspectSettings;
use crate::ephemeris::types::Body;
use serde::{Deserialize, Serialize};

/// What goes into a natal chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSettings {
    /// Bodies queried from the ephemeris
    pub bodies: Vec<Body>,
    /// Orbs for natal aspects
    pub aspects: AspectSettings,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            bodies: Body::ALL.to_vec(),
            aspects: AspectSettings::default(),
        }
    }
}
