use crate::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    Discard(Card),
    Pickup(Card),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    Empty,
    HasDiscardOnly,
    HasPickupOnly,
    /// Both slots hold the same card, which does not end the turn.
    SameCard,
    Complete,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    discard: Option<Card>,
    pickup: Option<Card>,
}

impl Turn {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_action(&mut self, action: TurnAction) {
        match action {
            TurnAction::Discard(card) => self.discard = Some(card),
            TurnAction::Pickup(card) => self.pickup = Some(card),
        }
    }

    pub fn discard(&self) -> Option<Card> {
        self.discard
    }

    pub fn pickup(&self) -> Option<Card> {
        self.pickup
    }

    pub fn state(&self) -> TurnState {
        match (self.discard, self.pickup) {
            (None, None) => TurnState::Empty,
            (Some(_), None) => TurnState::HasDiscardOnly,
            (None, Some(_)) => TurnState::HasPickupOnly,
            (Some(discarded), Some(picked)) if discarded == picked => TurnState::SameCard,
            (Some(_), Some(_)) => TurnState::Complete,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state() == TurnState::Complete
    }

    pub fn reset(&mut self) {
        self.discard = None;
        self.pickup = None;
    }
}
