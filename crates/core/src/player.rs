use crate::{Card, Phase, PHASE_COUNT};
use serde::{Deserialize, Serialize};

pub const STAGING_SLOTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseProgress {
    Active(Phase),
    Finished,
}

impl PhaseProgress {
    pub fn phase(&self) -> Option<&Phase> {
        match self {
            PhaseProgress::Active(phase) => Some(phase),
            PhaseProgress::Finished => None,
        }
    }

    /// 1..=10 while playing, 11 once phase ten is cleared.
    pub fn ordinal(&self) -> usize {
        match self {
            PhaseProgress::Active(phase) => phase.ordinal(),
            PhaseProgress::Finished => PHASE_COUNT + 1,
        }
    }

    pub fn from_ordinal(ordinal: usize) -> Self {
        if ordinal > PHASE_COUNT {
            return PhaseProgress::Finished;
        }
        PhaseProgress::Active(Phase::from_ordinal(ordinal).unwrap_or_else(Phase::first))
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, PhaseProgress::Finished)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub seat: usize,
    pub hand: Vec<Card>,
    pub staging: [Vec<Card>; STAGING_SLOTS],
    pub progress: PhaseProgress,
}

impl Player {
    pub fn new(name: impl Into<String>, seat: usize) -> Self {
        Self {
            name: name.into(),
            seat,
            hand: Vec::new(),
            staging: [Vec::new(), Vec::new()],
            progress: PhaseProgress::Active(Phase::first()),
        }
    }

    pub fn phase(&self) -> Option<&Phase> {
        self.progress.phase()
    }

    pub fn is_finished(&self) -> bool {
        self.progress.is_finished()
    }

    pub fn held_count(&self) -> usize {
        self.hand.len() + self.staging.iter().map(Vec::len).sum::<usize>()
    }

    pub fn holds_nothing(&self) -> bool {
        self.held_count() == 0
    }

    pub fn holds_all(&self, cards: &[Card]) -> bool {
        self.missing_card(cards).is_none()
    }

    /// First card of `cards` not covered by what the player holds, counting copies.
    pub fn missing_card(&self, cards: &[Card]) -> Option<Card> {
        let mut held = self.held_cards();
        for card in cards {
            match held.iter().position(|h| h == card) {
                Some(pos) => {
                    held.swap_remove(pos);
                }
                None => return Some(*card),
            }
        }
        None
    }

    pub fn held_cards(&self) -> Vec<Card> {
        let mut held: Vec<Card> = self.staging.iter().flatten().copied().collect();
        held.extend(self.hand.iter().copied());
        held
    }

    pub fn remove_from_hand(&mut self, card: &Card) -> bool {
        match self.hand.iter().position(|held| held == card) {
            Some(pos) => {
                self.hand.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn take_held(&mut self, card: &Card) -> bool {
        for slot in self.staging.iter_mut() {
            if let Some(pos) = slot.iter().position(|held| held == card) {
                slot.remove(pos);
                return true;
            }
        }
        self.remove_from_hand(card)
    }

    pub fn drain_held(&mut self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.hand.drain(..).collect();
        for slot in self.staging.iter_mut() {
            cards.append(slot);
        }
        cards
    }
}
