//! Flat projection of engine state for durable storage and remote sync.
//!
//! Cards travel as descriptor strings so a store never needs to know the
//! engine's types. Restoring tolerates bad records: an unparsable descriptor is
//! dropped with a warning instead of failing the whole load, and cards staged
//! beyond the second slot go back to the hand.

use crate::{Card, Deck, Game, GameConfig, PhaseProgress, Player, RngState, Turn, STAGING_SLOTS};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub description: String,
    #[serde(default)]
    pub place_index: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub seat: usize,
    pub phase: usize,
    pub hand: Vec<CardRecord>,
    #[serde(default)]
    pub staging: Vec<Vec<CardRecord>>,
    #[serde(default)]
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub turn_index: usize,
    #[serde(default)]
    pub winning_player_index: Option<usize>,
    #[serde(default = "first_round")]
    pub round: u32,
    pub deck: Vec<CardRecord>,
    pub discard_pile: Vec<CardRecord>,
    pub players: Vec<PlayerRecord>,
}

fn first_round() -> u32 {
    1
}

fn records(cards: &[Card]) -> Vec<CardRecord> {
    cards
        .iter()
        .enumerate()
        .map(|(idx, card)| CardRecord {
            description: card.descriptor(),
            place_index: Some(idx),
        })
        .collect()
}

/// Orders by `place_index` (records without one keep their relative position
/// after indexed ones) and drops anything unparsable.
fn cards_from(records: &[CardRecord]) -> Vec<Card> {
    let mut ordered: Vec<&CardRecord> = records.iter().collect();
    ordered.sort_by_key(|record| record.place_index.unwrap_or(usize::MAX));
    ordered
        .into_iter()
        .filter_map(|record| {
            let card = Card::from_descriptor(&record.description);
            if card.is_none() {
                warn!(description = %record.description, "skipping unparsable card record");
            }
            card
        })
        .collect()
}

impl Game {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            turn_index: self.turn_index,
            winning_player_index: self.winner,
            round: self.round,
            deck: records(&self.deck.cards),
            discard_pile: records(&self.discard_pile),
            players: self
                .players
                .iter()
                .map(|player| PlayerRecord {
                    name: player.name.clone(),
                    seat: player.seat,
                    phase: player.progress.ordinal(),
                    hand: records(&player.hand),
                    staging: player.staging.iter().map(|slot| records(slot)).collect(),
                    score: self.score(player.seat),
                })
                .collect(),
        }
    }

    /// Rebuilds an engine from a projection. Players are reseated in seat order;
    /// the pending turn starts empty.
    pub fn restore(config: GameConfig, snapshot: &GameSnapshot, seed: u64) -> Game {
        let mut player_records: Vec<&PlayerRecord> = snapshot.players.iter().collect();
        player_records.sort_by_key(|record| record.seat);

        let mut players = Vec::with_capacity(player_records.len());
        let mut scores = HashMap::new();
        for (seat, record) in player_records.into_iter().enumerate() {
            let mut player = Player::new(record.name.clone(), seat);
            player.hand = cards_from(&record.hand);
            for (slot, cards) in record.staging.iter().enumerate() {
                let cards = cards_from(cards);
                if slot < STAGING_SLOTS {
                    player.staging[slot] = cards;
                } else if !cards.is_empty() {
                    warn!(
                        seat,
                        slot,
                        count = cards.len(),
                        "moving overflow staging slot into hand"
                    );
                    player.hand.extend(cards);
                }
            }
            player.progress = PhaseProgress::from_ordinal(record.phase);
            if record.score > 0 {
                scores.insert(seat, record.score);
            }
            players.push(player);
        }

        let turn_index = if players.is_empty() {
            0
        } else {
            snapshot.turn_index % players.len()
        };
        let winner = snapshot
            .winning_player_index
            .filter(|seat| *seat < players.len());

        Game {
            config,
            rng: RngState::from_seed(seed),
            deck: Deck::from_cards(cards_from(&snapshot.deck)),
            discard_pile: cards_from(&snapshot.discard_pile),
            players,
            turn_index,
            turn: Turn::new(),
            scores,
            winner,
            round: snapshot.round.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventBus;

    #[test]
    fn restore_reproduces_projection() {
        let mut events = EventBus::default();
        let mut game = Game::new(GameConfig::default(), 11);
        game.add_player("ada", &mut events).expect("seat");
        game.add_player("bo", &mut events).expect("seat");
        game.deal_round(&mut events);

        let snapshot = game.snapshot();
        let restored = Game::restore(GameConfig::default(), &snapshot, 11);
        assert_eq!(restored.snapshot(), snapshot);
        assert_eq!(restored.total_cards(), game.total_cards());
        assert_eq!(restored.hand(1), game.hand(1));
    }

    #[test]
    fn extra_staging_slots_fold_into_hand() {
        let mut events = EventBus::default();
        let mut game = Game::new(GameConfig::default(), 21);
        game.add_player("ada", &mut events).expect("seat");
        game.add_player("bo", &mut events).expect("seat");
        game.deal_round(&mut events);

        let mut snapshot = game.snapshot();
        let player = &mut snapshot.players[1];
        let extra: Vec<CardRecord> = player.hand.drain(..5).collect();
        player.staging = vec![Vec::new(), Vec::new(), extra];

        let restored = Game::restore(GameConfig::default(), &snapshot, 21);
        assert_eq!(restored.total_cards(), game.total_cards());
        assert_eq!(restored.total_cards(), 102);
        assert_eq!(restored.hand(1).map(<[Card]>::len), Some(10));
        assert_eq!(restored.staging(1, 1).map(<[Card]>::len), Some(0));
    }

    #[test]
    fn bad_descriptor_becomes_no_card() {
        let snapshot = GameSnapshot {
            turn_index: 3,
            winning_player_index: None,
            round: 1,
            deck: vec![
                CardRecord {
                    description: "blue 4".to_string(),
                    place_index: Some(1),
                },
                CardRecord {
                    description: "mauve 99".to_string(),
                    place_index: Some(0),
                },
                CardRecord {
                    description: "red 0".to_string(),
                    place_index: None,
                },
            ],
            discard_pile: Vec::new(),
            players: vec![PlayerRecord {
                name: "solo".to_string(),
                seat: 4,
                phase: 3,
                hand: Vec::new(),
                staging: Vec::new(),
                score: 0,
            }],
        };
        let game = Game::restore(GameConfig::default(), &snapshot, 0);
        assert_eq!(game.deck().len(), 2);
        assert_eq!(game.deck().cards[0].descriptor(), "blue 4");
        assert_eq!(game.players()[0].seat, 0);
        assert_eq!(game.players()[0].progress.ordinal(), 3);
        assert_eq!(game.turn_index(), 0);
    }

    #[test]
    fn snapshot_serializes_as_json() {
        let mut events = EventBus::default();
        let mut game = Game::new(GameConfig::default(), 5);
        game.add_player("ada", &mut events).expect("seat");
        let json = serde_json::to_string(&game.snapshot()).expect("json");
        let back: GameSnapshot = serde_json::from_str(&json).expect("parse");
        assert_eq!(back, game.snapshot());
    }
}
