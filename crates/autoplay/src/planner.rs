//! Greedy heuristics: which groups to lay down, whether the discard top is
//! worth taking, and which card to throw away.

use phaseten_core::{Card, CardColor, Combo, Face, GameConfig, Phase};
use std::collections::HashMap;

/// Splits `hand` into groups that clear `phase`, trying the requirements in
/// catalog order and then reversed.
pub fn plan_melds(phase: &Phase, hand: &[Card]) -> Option<Vec<Vec<Card>>> {
    let requirements = phase.requirements();
    let forward: Vec<usize> = (0..requirements.len()).collect();
    let reversed: Vec<usize> = forward.iter().rev().copied().collect();
    for order in [forward, reversed] {
        if let Some(groups) = plan_in_order(requirements, &order, hand) {
            if phase.is_cleared_by(&groups) {
                return Some(groups);
            }
        }
    }
    None
}

fn plan_in_order(requirements: &[Combo], order: &[usize], hand: &[Card]) -> Option<Vec<Vec<Card>>> {
    let mut pool = hand.to_vec();
    let mut groups = vec![Vec::new(); requirements.len()];
    for idx in order {
        let found = requirements[*idx].find(&pool)?;
        for card in &found.consumed {
            if let Some(pos) = pool.iter().position(|held| held == card) {
                pool.swap_remove(pos);
            }
        }
        groups[*idx] = found.consumed;
    }
    Some(groups)
}

/// How many cards of `hand` already fit the phase, capped per requirement.
/// Higher is closer to a lay-down.
pub fn progress(phase: &Phase, hand: &[Card]) -> usize {
    phase
        .requirements()
        .iter()
        .map(|combo| partial_fit(combo, hand))
        .sum()
}

fn partial_fit(combo: &Combo, cards: &[Card]) -> usize {
    match combo {
        Combo::SetOf(count) => face_counts(cards).first().copied().unwrap_or(0).min(*count),
        Combo::RunOf(count) => longest_run(cards).min(*count),
        Combo::NumberOfColor(count) => largest_color(cards).min(*count),
        Combo::NumberOf(groups, inner) => match inner.as_ref() {
            Combo::SetOf(count) => face_counts(cards)
                .into_iter()
                .take(*groups)
                .map(|held| held.min(*count))
                .sum(),
            other => partial_fit(other, cards),
        },
    }
}

/// Copies per numeric face, largest first.
fn face_counts(cards: &[Card]) -> Vec<usize> {
    let mut counts: HashMap<Face, usize> = HashMap::new();
    for card in cards.iter().filter(|card| card.is_numeric()) {
        *counts.entry(card.face).or_default() += 1;
    }
    let mut counts: Vec<usize> = counts.into_values().collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts
}

fn longest_run(cards: &[Card]) -> usize {
    let mut values: Vec<u32> = cards
        .iter()
        .filter(|card| card.is_numeric())
        .map(Card::value)
        .collect();
    values.sort_unstable();
    values.dedup();
    let mut best = 0;
    let mut len = 0;
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 && values[idx - 1] + 1 == *value {
            len += 1;
        } else {
            len = 1;
        }
        best = best.max(len);
    }
    best
}

fn largest_color(cards: &[Card]) -> usize {
    let mut counts: HashMap<CardColor, usize> = HashMap::new();
    for card in cards.iter().filter(|card| !card.color.is_placeholder()) {
        *counts.entry(card.color).or_default() += 1;
    }
    counts.into_values().max().unwrap_or(0)
}

/// Take the discard top only when it moves the hand closer to the phase.
pub fn wants_discard(phase: Option<&Phase>, hand: &[Card], top: Card) -> bool {
    let Some(phase) = phase else {
        return false;
    };
    let mut with_top = hand.to_vec();
    with_top.push(top);
    progress(phase, &with_top) > progress(phase, hand)
}

/// Card whose removal costs the least progress; ties go to the heavier
/// penalty. Cards equal to `keep` are skipped unless nothing else is held.
pub fn choose_discard(
    config: &GameConfig,
    phase: Option<&Phase>,
    hand: &[Card],
    keep: Option<Card>,
) -> Option<Card> {
    let mut candidates: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|card| Some(*card) != keep)
        .collect();
    if candidates.is_empty() {
        candidates = hand.to_vec();
    }
    candidates.sort_by_key(|card| (card.face, card.color));
    candidates.dedup();

    let mut best: Option<(usize, u32, Card)> = None;
    for card in candidates {
        let remaining = progress_without(phase, hand, card);
        let penalty = config.penalty(&card);
        let better = match best {
            None => true,
            Some((best_remaining, best_penalty, _)) => {
                remaining > best_remaining
                    || (remaining == best_remaining && penalty > best_penalty)
            }
        };
        if better {
            best = Some((remaining, penalty, card));
        }
    }
    best.map(|(_, _, card)| card)
}

fn progress_without(phase: Option<&Phase>, hand: &[Card], card: Card) -> usize {
    let Some(phase) = phase else {
        return 0;
    };
    let mut rest = hand.to_vec();
    if let Some(pos) = rest.iter().position(|held| *held == card) {
        rest.remove(pos);
    }
    progress(phase, &rest)
}
