use crate::{Card, CardColor, Face, SPECIAL_CARD_VALUE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub max_players: usize,
    pub hand_size: usize,
    pub copies_per_color: usize,
    pub wild_count: usize,
    pub skip_count: usize,
    pub special_card_value: u32,
    pub flip_initial_discard: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_players: 5,
            hand_size: 10,
            copies_per_color: 2,
            wild_count: 4,
            skip_count: 2,
            special_card_value: SPECIAL_CARD_VALUE,
            flip_initial_discard: true,
        }
    }
}

impl GameConfig {
    pub fn deck_size(&self) -> usize {
        Face::NUMERIC.len() * CardColor::PLAYABLE.len() * self.copies_per_color
            + self.wild_count
            + self.skip_count
    }

    pub fn penalty(&self, card: &Card) -> u32 {
        if card.is_numeric() {
            card.value()
        } else {
            self.special_card_value
        }
    }

    pub fn hand_penalty(&self, cards: &[Card]) -> u32 {
        cards.iter().map(|card| self.penalty(card)).sum()
    }
}
