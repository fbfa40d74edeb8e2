use crate::aspects::{AspectKind, AspectNature};
use crate::compatibility::tables::{element_compatibility, quality_compatibility};
use crate::compatibility::types::{CompatibilityNarrative, KeySigns, SynastryAspect};
use crate::ephemeris::types::Body;
use crate::western::zodiac::Sign;

const KEY_ASPECT_LIMIT: usize = 5;

pub fn overall_text(score: u8) -> &'static str {
    match score {
        80..=u8::MAX => "Very high compatibility. This relationship has excellent potential with natural harmony and understanding.",
        70..=79 => "Strong compatibility. This relationship has good potential with some areas of natural connection.",
        60..=69 => "Moderate compatibility. This relationship has potential but may require work in certain areas.",
        50..=59 => "Average compatibility. This relationship may face challenges but also has strengths to build upon.",
        _ => "Challenging compatibility. This relationship may require significant effort and understanding to overcome differences.",
    }
}

/// e.g. "strong natural harmony with complementary approaches"
pub fn sign_pair_text(first: Sign, second: Sign) -> String {
    let element = element_compatibility(first.element(), second.element());
    let quality = quality_compatibility(first.quality(), second.quality());

    let element_text = if element >= 8.0 {
        "strong natural harmony"
    } else if element >= 6.0 {
        "good compatibility"
    } else if element >= 4.0 {
        "moderate interaction"
    } else {
        "potential challenges"
    };
    let quality_text = if quality >= 7.0 {
        "complementary approaches"
    } else if quality >= 5.0 {
        "workable dynamics"
    } else {
        "potential friction in approaches"
    };
    format!("{} with {}", element_text, quality_text)
}

fn domain(body: Body) -> &'static str {
    match body {
        Body::Sun => "identity and vitality",
        Body::Moon => "emotions and needs",
        Body::Mercury => "communication and thinking",
        Body::Venus => "love and values",
        Body::Mars => "action and desire",
        Body::Jupiter => "growth and expansion",
        Body::Saturn => "structure and responsibility",
        Body::Uranus => "innovation and freedom",
        Body::Neptune => "dreams and spirituality",
        Body::Pluto => "transformation and power",
    }
}

fn specific_meaning(first: Body, second: Body, kind: AspectKind) -> Option<&'static str> {
    use AspectKind::*;
    use Body::*;
    let meaning = |a: Body, b: Body| match (a, b, kind) {
        (Sun, Moon, Conjunction) => Some("Strong emotional connection and mutual understanding."),
        (Sun, Moon, Trine) => Some("Natural flow of energy between identity and emotions."),
        (Sun, Moon, Square) => Some("Tension between needs and expression that can lead to growth."),
        (Sun, Venus, Conjunction) => Some("Strong attraction and harmony in values."),
        (Moon, Venus, Conjunction) => Some("Deep emotional connection and shared sense of beauty."),
        (Venus, Mars, Conjunction) => Some("Powerful physical and romantic attraction."),
        (Venus, Mars, Trine) => Some("Natural flow of give and take in the relationship."),
        (Venus, Mars, Square) => Some("Passionate but potentially challenging romantic dynamic."),
        (Mercury, Mercury, Conjunction) => Some("Like-minded thinking and easy communication."),
        (Mercury, Mercury, Opposition) => Some("Different perspectives that can complement each other."),
        (Mercury, Mercury, Square) => Some("Communication challenges that require patience."),
        _ => None,
    };
    meaning(first, second).or_else(|| meaning(second, first))
}

/// Meaning of one synastry aspect between two bodies
pub fn aspect_meaning(first: Body, second: Body, kind: AspectKind, nature: AspectNature) -> String {
    if let Some(text) = specific_meaning(first, second, kind) {
        return text.to_string();
    }
    let (d1, d2) = (domain(first), domain(second));
    let interaction = match nature {
        AspectNature::Harmonious => format!("positive flow between {} and {}", d1, d2),
        AspectNature::Challenging => {
            format!("growth opportunity through tension between {} and {}", d1, d2)
        }
        AspectNature::Neutral => format!("dynamic interaction between {} and {}", d1, d2),
    };
    format!(
        "A {} {} suggesting {}",
        nature.label(),
        kind.name().to_lowercase(),
        interaction
    )
}

/// Lines for the most significant aspects; `ranked` must already be sorted
pub fn key_aspect_lines(ranked: &[SynastryAspect]) -> Vec<String> {
    ranked
        .iter()
        .filter(|a| a.significance > 0.0)
        .take(KEY_ASPECT_LIMIT)
        .map(|a| {
            format!(
                "Your {} {} their {} ({}): {}",
                a.person1,
                a.aspect,
                a.person2,
                a.aspect.keywords(),
                aspect_meaning(a.person1, a.person2, a.aspect, a.nature)
            )
        })
        .collect()
}

pub fn narrative(
    a: &KeySigns,
    b: &KeySigns,
    ranked: &[SynastryAspect],
    overall: u8,
) -> CompatibilityNarrative {
    CompatibilityNarrative {
        overall: overall_text(overall).to_string(),
        sun_signs: format!(
            "Your {} Sun and their {} Sun indicates {}.",
            a.sun,
            b.sun,
            sign_pair_text(a.sun, b.sun)
        ),
        moon_signs: format!(
            "Your {} Moon and their {} Moon suggests {} on an emotional level.",
            a.moon,
            b.moon,
            sign_pair_text(a.moon, b.moon)
        ),
        venus: format!(
            "Your {} Venus and their {} Venus shows {} in terms of affection and values.",
            a.venus,
            b.venus,
            sign_pair_text(a.venus, b.venus)
        ),
        mars: format!(
            "Your {} Mars and their {} Mars indicates {} regarding energy and passion.",
            a.mars,
            b.mars,
            sign_pair_text(a.mars, b.mars)
        ),
        key_aspects: key_aspect_lines(ranked),
    }
}
