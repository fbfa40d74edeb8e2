use crate::ephemeris::types::Body;
use crate::transit::day::AspectTally;
use crate::transit::types::{AreaTone, LifeArea, LifeAreaOutlook, TransitEvent};

const CAREER: &[Body] = &[Body::Sun, Body::Saturn, Body::Jupiter, Body::Mars];
const RELATIONSHIPS: &[Body] = &[Body::Venus, Body::Mars, Body::Moon, Body::Jupiter];
const COMMUNICATION: &[Body] = &[Body::Mercury, Body::Moon, Body::Jupiter];
const HOME: &[Body] = &[Body::Moon, Body::Venus, Body::Saturn];
const GROWTH: &[Body] = &[
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];
const OUTER: &[Body] = &[Body::Uranus, Body::Neptune, Body::Pluto];

impl LifeArea {
    /// Bodies that bring an event into this area
    pub fn bodies(self) -> &'static [Body] {
        match self {
            LifeArea::Career => CAREER,
            LifeArea::Relationships => RELATIONSHIPS,
            LifeArea::Communication => COMMUNICATION,
            LifeArea::Home => HOME,
            LifeArea::Growth => GROWTH,
        }
    }

    /// Career and relationships also count events whose natal body belongs to the area
    fn matches(self, event: &TransitEvent) -> bool {
        let bodies = self.bodies();
        match self {
            LifeArea::Career | LifeArea::Relationships => {
                bodies.contains(&event.transit) || bodies.contains(&event.natal)
            }
            _ => bodies.contains(&event.transit),
        }
    }

    /// Transiting bodies singled out for a note in this area
    fn highlight_bodies(self) -> &'static [Body] {
        match self {
            LifeArea::Career => &[Body::Saturn, Body::Jupiter],
            LifeArea::Relationships => &[Body::Venus, Body::Mars],
            LifeArea::Communication => &[Body::Mercury],
            LifeArea::Home => &[Body::Moon],
            LifeArea::Growth => &[],
        }
    }
}

fn balance_tone(tally: AspectTally, margin: usize) -> AreaTone {
    if tally.challenging > tally.flowing + margin {
        AreaTone::Challenging
    } else if tally.flowing > tally.challenging + margin {
        AreaTone::Flowing
    } else {
        AreaTone::Mixed
    }
}

fn growth_tone(events: &[&TransitEvent]) -> AreaTone {
    let has = |body: Body| events.iter().any(|e| e.transit == body);
    match (has(Body::Jupiter), has(Body::Saturn)) {
        (true, true) => AreaTone::ExpansionWithStructure,
        (true, false) => AreaTone::Expansion,
        (false, true) => AreaTone::Discipline,
        (false, false) if events.iter().any(|e| OUTER.contains(&e.transit)) => {
            AreaTone::Transformation
        }
        _ => AreaTone::Mixed,
    }
}

/// How the week's transits fall on one life area
pub fn life_area_outlook(area: LifeArea, events: &[TransitEvent]) -> LifeAreaOutlook {
    let relevant: Vec<&TransitEvent> = events.iter().filter(|e| area.matches(e)).collect();

    let tone = if relevant.is_empty() {
        AreaTone::Quiet
    } else {
        let tally = AspectTally::of(relevant.iter().copied());
        match area {
            LifeArea::Relationships => balance_tone(tally, 1),
            LifeArea::Growth => growth_tone(&relevant),
            _ => balance_tone(tally, 0),
        }
    };

    let highlights = area
        .highlight_bodies()
        .iter()
        .copied()
        .filter(|body| relevant.iter().any(|e| e.transit == *body))
        .collect();

    LifeAreaOutlook {
        area,
        tone,
        aspect_count: relevant.len(),
        highlights,
    }
}

/// Outlook for every life area
pub fn life_areas(events: &[TransitEvent]) -> Vec<LifeAreaOutlook> {
    LifeArea::ALL
        .iter()
        .map(|area| life_area_outlook(*area, events))
        .collect()
}
