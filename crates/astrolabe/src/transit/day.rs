//! Per-day classification of transit events.

use crate::aspects::AspectKind;
use crate::ephemeris::types::Body;
use crate::transit::types::{DayLabel, DayMood, TransitEvent};

/// Counts of aspect families among a set of events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AspectTally {
    /// Squares and oppositions
    pub challenging: usize,
    /// Trines and sextiles
    pub flowing: usize,
    /// Conjunctions
    pub neutral: usize,
}

impl AspectTally {
    pub fn of<'a>(events: impl IntoIterator<Item = &'a TransitEvent>) -> Self {
        let mut tally = Self::default();
        for event in events {
            match event.aspect {
                AspectKind::Square | AspectKind::Opposition => tally.challenging += 1,
                AspectKind::Trine | AspectKind::Sextile => tally.flowing += 1,
                AspectKind::Conjunction => tally.neutral += 1,
            }
        }
        tally
    }
}

fn count_transiting(events: &[TransitEvent], body: Body) -> usize {
    events.iter().filter(|e| e.transit == body).count()
}

fn has_transiting(events: &[TransitEvent], body: Body) -> bool {
    events.iter().any(|e| e.transit == body)
}

/// Significance label for a day.
///
/// Rules are checked in order and a later match replaces an earlier one.
pub fn classify_day(events: &[TransitEvent]) -> Option<DayLabel> {
    let tally = AspectTally::of(events);
    let mut label = None;

    if tally.challenging >= 3 && tally.flowing == 0 {
        label = Some(DayLabel::Challenging);
    }
    if tally.flowing >= 3 && tally.challenging == 0 {
        label = Some(DayLabel::Flowing);
    }
    if count_transiting(events, Body::Moon) >= 3 {
        label = Some(DayLabel::EmotionallySignificant);
    }
    if count_transiting(events, Body::Mercury) >= 2 {
        label = Some(DayLabel::Communication);
    }
    label
}

/// General mood of a day; `None` when nothing is in aspect
pub fn day_mood(events: &[TransitEvent]) -> Option<DayMood> {
    if events.is_empty() {
        return None;
    }
    let tally = AspectTally::of(events);

    let mood = if tally.challenging > tally.flowing + 1 {
        if has_transiting(events, Body::Mars) {
            DayMood::ChallengingButProductive
        } else {
            DayMood::PotentiallyDifficult
        }
    } else if tally.flowing > tally.challenging + 1 {
        if has_transiting(events, Body::Venus) {
            DayMood::HarmoniousAndCreative
        } else {
            DayMood::SmoothAndFlowing
        }
    } else if tally.neutral > tally.challenging && tally.neutral > tally.flowing {
        DayMood::IntenseAndFocused
    } else if has_transiting(events, Body::Moon) {
        DayMood::EmotionallySignificant
    } else {
        DayMood::RelativelyBalanced
    };
    Some(mood)
}

pub fn planet_priority(body: Body) -> f64 {
    match body {
        Body::Sun => 10.0,
        Body::Moon => 9.0,
        Body::Mercury => 8.0,
        Body::Venus => 7.0,
        Body::Mars => 6.0,
        Body::Jupiter => 5.0,
        Body::Saturn => 4.0,
        Body::Uranus => 3.0,
        Body::Neptune => 2.0,
        Body::Pluto => 1.0,
    }
}

pub fn aspect_priority(kind: AspectKind) -> f64 {
    match kind {
        AspectKind::Conjunction => 5.0,
        AspectKind::Opposition => 4.0,
        AspectKind::Square => 3.0,
        AspectKind::Trine => 2.0,
        AspectKind::Sextile => 1.0,
    }
}

/// Importance of a single event; tighter orbs and applying aspects rank higher
pub fn focus_score(event: &TransitEvent) -> f64 {
    let applying_bonus = if event.applying { 3.0 } else { 0.0 };
    let orb_score = (1.0 - event.orb.min(8.0) / 8.0) * 2.0;
    planet_priority(event.transit) + aspect_priority(event.aspect) + applying_bonus + orb_score
}

/// Highest scoring event of the day; the earliest wins a tie
pub fn focus_event(events: &[TransitEvent]) -> Option<&TransitEvent> {
    let mut best: Option<(&TransitEvent, f64)> = None;
    for event in events {
        let score = focus_score(event);
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((event, score)),
        }
    }
    best.map(|(event, _)| event)
}
