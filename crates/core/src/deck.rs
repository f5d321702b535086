use crate::{Card, CardColor, Face, GameConfig, RngState};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled deck: every numeric face in every color, then Skips, then Wilds.
    pub fn standard(config: &GameConfig) -> Self {
        let mut cards = Vec::with_capacity(config.deck_size());
        for face in Face::NUMERIC {
            for color in CardColor::PLAYABLE {
                for _ in 0..config.copies_per_color {
                    cards.push(Card::new(face, color));
                }
            }
        }
        for _ in 0..config.skip_count {
            cards.push(Card::skip());
        }
        for _ in 0..config.wild_count {
            cards.push(Card::wild());
        }
        Self { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        self.cards.drain(..count).collect()
    }

    pub fn replenish(&mut self, mut cards: Vec<Card>, rng: &mut RngState) {
        if cards.is_empty() {
            return;
        }
        self.cards.append(&mut cards);
        rng.shuffle(&mut self.cards);
    }
}
