use crate::ephemeris::types::Body;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Major aspect kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

impl AspectKind {
    pub fn name(self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Opposition => "Opposition",
            AspectKind::Trine => "Trine",
            AspectKind::Square => "Square",
            AspectKind::Sextile => "Sextile",
        }
    }

    pub fn from_name(name: &str) -> Option<AspectKind> {
        ASPECT_CATALOG
            .iter()
            .map(|def| def.kind)
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Catalog entry for this kind
    pub fn definition(self) -> &'static AspectDefinition {
        // catalog is indexed by discriminant
        &ASPECT_CATALOG[self as usize]
    }

    pub fn nature(self) -> AspectNature {
        self.definition().nature
    }

    /// Short reading of the aspect, e.g. "Harmony, flow"
    pub fn keywords(self) -> &'static str {
        self.definition().keywords
    }
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Qualitative nature of an aspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectNature {
    Harmonious,
    Challenging,
    Neutral,
}

impl AspectNature {
    pub fn label(self) -> &'static str {
        match self {
            AspectNature::Harmonious => "harmonious",
            AspectNature::Challenging => "challenging",
            AspectNature::Neutral => "neutral",
        }
    }
}

/// One row of the aspect catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    /// Target separation in degrees
    pub angle: f64,
    /// Default orb in degrees
    pub orb: f64,
    pub nature: AspectNature,
    pub keywords: &'static str,
}

/// The aspect catalog. Matching walks it in this order and stops at the first hit.
pub static ASPECT_CATALOG: [AspectDefinition; 5] = [
    AspectDefinition {
        kind: AspectKind::Conjunction,
        angle: 0.0,
        orb: 8.0,
        nature: AspectNature::Neutral,
        keywords: "Intensification",
    },
    AspectDefinition {
        kind: AspectKind::Opposition,
        angle: 180.0,
        orb: 8.0,
        nature: AspectNature::Challenging,
        keywords: "Tension, awareness",
    },
    AspectDefinition {
        kind: AspectKind::Trine,
        angle: 120.0,
        orb: 8.0,
        nature: AspectNature::Harmonious,
        keywords: "Harmony, flow",
    },
    AspectDefinition {
        kind: AspectKind::Square,
        angle: 90.0,
        orb: 7.0,
        nature: AspectNature::Challenging,
        keywords: "Challenge, action",
    },
    AspectDefinition {
        kind: AspectKind::Sextile,
        angle: 60.0,
        orb: 6.0,
        nature: AspectNature::Harmonious,
        keywords: "Opportunity, ease",
    },
];

/// Core aspect information
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectCore {
    pub kind: AspectKind,
    /// Exact angle for this aspect (0, 60, 90, 120, 180)
    pub exact_angle: f64,
    /// Deviation from the exact angle, rounded to 2 decimals
    pub orb: f64,
    pub nature: AspectNature,
}

/// An aspect between two bodies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AspectPair {
    pub from: Body,
    pub to: Body,
    pub aspect: AspectCore,
}

/// Settings for aspect calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AspectSettings {
    /// Orb per aspect kind
    pub orbs: BTreeMap<AspectKind, f64>,
}

impl Default for AspectSettings {
    fn default() -> Self {
        Self {
            orbs: ASPECT_CATALOG.iter().map(|def| (def.kind, def.orb)).collect(),
        }
    }
}

impl AspectSettings {
    /// Orb for `kind`, falling back to the catalog value
    pub fn orb(&self, kind: AspectKind) -> f64 {
        self.orbs
            .get(&kind)
            .copied()
            .unwrap_or_else(|| kind.definition().orb)
    }

    pub fn with_orb(mut self, kind: AspectKind, orb: f64) -> Self {
        self.orbs.insert(kind, orb);
        self
    }

    /// Every orb multiplied by `factor` (transits use 0.8)
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            orbs: ASPECT_CATALOG
                .iter()
                .map(|def| (def.kind, self.orb(def.kind) * factor))
                .collect(),
        }
    }
}
