//! Requirement matching for phase melds.
//!
//! Wild cards are never substituted for a missing value or color, and Skip and
//! Wild are left out of set, run and color matching entirely. Composite
//! requirements are matched greedily, so a hand that only works under a
//! different partition can be rejected.

use crate::{Card, CardColor, Face};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Combo {
    SetOf(usize),
    RunOf(usize),
    NumberOfColor(usize),
    NumberOf(usize, Box<Combo>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboMatch {
    pub face: Option<Face>,
    pub consumed: Vec<Card>,
}

impl Combo {
    pub fn number_of(count: usize, inner: Combo) -> Self {
        Combo::NumberOf(count, Box::new(inner))
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Combo::NumberOf(..))
    }

    pub fn matches(&self, cards: &[Card]) -> (bool, Option<Face>) {
        match self.find(cards) {
            Some(found) => (true, found.face),
            None => (false, None),
        }
    }

    pub fn is_satisfied_by(&self, cards: &[Card]) -> bool {
        self.find(cards).is_some()
    }

    pub fn find(&self, cards: &[Card]) -> Option<ComboMatch> {
        match self {
            Combo::SetOf(count) => find_set(cards, *count),
            Combo::RunOf(count) => find_run(cards, *count),
            Combo::NumberOfColor(count) => find_color(cards, *count),
            Combo::NumberOf(count, inner) => find_groups(cards, *count, inner),
        }
    }

    pub fn description(&self) -> String {
        match self {
            Combo::SetOf(count) => format!("Set of {count}"),
            Combo::RunOf(count) => format!("Run of {count}"),
            Combo::NumberOfColor(count) => format!("{count} of Color"),
            Combo::NumberOf(count, inner) => format!("{count} of {}", inner.description()),
        }
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

fn numeric_sorted(cards: &[Card]) -> Vec<Card> {
    let mut pool: Vec<Card> = cards.iter().copied().filter(Card::is_numeric).collect();
    pool.sort_by_key(|card| card.face);
    pool
}

fn find_set(cards: &[Card], count: usize) -> Option<ComboMatch> {
    if count == 0 {
        return Some(ComboMatch {
            face: None,
            consumed: Vec::new(),
        });
    }
    let sorted = numeric_sorted(cards);
    let mut start = 0;
    while start < sorted.len() {
        let face = sorted[start].face;
        let end = sorted[start..]
            .iter()
            .position(|card| card.face != face)
            .map_or(sorted.len(), |offset| start + offset);
        if end - start >= count {
            return Some(ComboMatch {
                face: Some(face),
                consumed: sorted[start..end].to_vec(),
            });
        }
        start = end;
    }
    None
}

fn find_run(cards: &[Card], count: usize) -> Option<ComboMatch> {
    if count == 0 {
        return Some(ComboMatch {
            face: None,
            consumed: Vec::new(),
        });
    }
    let mut distinct = numeric_sorted(cards);
    distinct.dedup_by_key(|card| card.face);
    if distinct.is_empty() {
        return None;
    }

    // Longest window of strictly consecutive values; earliest wins a tie.
    let mut best = (0usize, 1usize);
    let mut run_start = 0;
    for idx in 1..distinct.len() {
        if distinct[idx].value() != distinct[idx - 1].value() + 1 {
            run_start = idx;
        }
        let len = idx - run_start + 1;
        if len > best.1 {
            best = (run_start, len);
        }
    }

    let (start, len) = best;
    if len < count {
        return None;
    }
    let consumed = distinct[start..start + count].to_vec();
    Some(ComboMatch {
        face: consumed.last().map(|card| card.face),
        consumed,
    })
}

fn find_color(cards: &[Card], count: usize) -> Option<ComboMatch> {
    let mut by_color: HashMap<CardColor, Vec<Card>> = HashMap::new();
    for card in cards.iter().filter(|card| !card.color.is_placeholder()) {
        by_color.entry(card.color).or_default().push(*card);
    }
    let mut largest: Option<(CardColor, Vec<Card>)> = None;
    for color in CardColor::PLAYABLE {
        let Some(group) = by_color.remove(&color) else {
            continue;
        };
        if largest.as_ref().map_or(true, |(_, best)| group.len() > best.len()) {
            largest = Some((color, group));
        }
    }
    let group = largest.map(|(_, group)| group).unwrap_or_default();
    if group.len() < count {
        return None;
    }
    Some(ComboMatch {
        face: None,
        consumed: group[..count].to_vec(),
    })
}

fn find_groups(cards: &[Card], count: usize, inner: &Combo) -> Option<ComboMatch> {
    let mut pool = cards.to_vec();
    let mut consumed = Vec::new();
    for _ in 0..count {
        let found = inner.find(&pool)?;
        for card in &found.consumed {
            if let Some(pos) = pool.iter().position(|held| held == card) {
                pool.remove(pos);
            }
        }
        consumed.extend(found.consumed);
    }
    Some(ComboMatch {
        face: None,
        consumed,
    })
}
