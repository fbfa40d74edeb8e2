use crate::aspects::{AspectKind, AspectNature, AspectPair};
use crate::ephemeris::types::Body;
use crate::error::ChartError;
use crate::houses::HouseGeometry;
use crate::positions::PositionTable;
use crate::western::zodiac::Sign;
use serde::{Deserialize, Serialize};

/// Signs of the bodies and point the sign-based scores read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySigns {
    pub sun: Sign,
    pub moon: Sign,
    pub mercury: Sign,
    pub venus: Sign,
    pub mars: Sign,
    pub ascendant: Sign,
}

impl KeySigns {
    pub fn from_chart(positions: &PositionTable, houses: &HouseGeometry) -> Result<Self, ChartError> {
        let sign = |body: Body| positions.sign(body).ok_or(ChartError::MissingBody { body });
        Ok(Self {
            sun: sign(Body::Sun)?,
            moon: sign(Body::Moon)?,
            mercury: sign(Body::Mercury)?,
            venus: sign(Body::Venus)?,
            mars: sign(Body::Mars)?,
            ascendant: houses.ascendant_sign,
        })
    }
}

/// A synastry aspect with its relationship significance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynastryAspect {
    /// Body from the first chart
    pub person1: Body,
    /// Body from the second chart
    pub person2: Body,
    pub aspect: AspectKind,
    pub orb: f64,
    pub nature: AspectNature,
    /// Relationship-pair weight, 0 when the pair is not in the table
    pub significance: f64,
}

impl From<&AspectPair> for SynastryAspect {
    fn from(pair: &AspectPair) -> Self {
        Self {
            person1: pair.from,
            person2: pair.to,
            aspect: pair.aspect.kind,
            orb: pair.aspect.orb,
            nature: pair.aspect.nature,
            significance: super::tables::relationship_weight(pair.from, pair.to).unwrap_or(0.0),
        }
    }
}

/// The five component scores, each 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub element: u8,
    pub sign: u8,
    pub house: u8,
    pub aspect: u8,
    pub special: u8,
}

/// Short prose reading of a compatibility result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityNarrative {
    pub overall: String,
    pub sun_signs: String,
    pub moon_signs: String,
    pub venus: String,
    pub mars: String,
    pub key_aspects: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub overall: u8,
    #[serde(flatten)]
    pub scores: SubScores,
    /// Ranked by significance, most significant first
    pub synastry_aspects: Vec<SynastryAspect>,
    pub interpretation: CompatibilityNarrative,
}
