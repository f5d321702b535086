use crate::{Card, Deck, Event, EventBus, GameConfig, Player, RngState, Turn};
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

mod deal;
mod melds;
mod turns;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("roster full ({max} players)")]
    RosterFull { max: usize },
    #[error("no player in seat {0}")]
    UnknownSeat(usize),
    #[error("seat {seat} does not hold {card}")]
    CardNotHeld { seat: usize, card: Card },
    #[error("invalid staging slot {0}")]
    InvalidStagingSlot(usize),
}

/// Owns every card in play. Each card is in exactly one of: the deck, the
/// discard pile, or a player's hand/staging area.
#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) rng: RngState,
    pub(crate) deck: Deck,
    pub(crate) discard_pile: Vec<Card>,
    pub(crate) players: Vec<Player>,
    pub(crate) turn_index: usize,
    pub(crate) turn: Turn,
    pub(crate) scores: HashMap<usize, u32>,
    pub(crate) winner: Option<usize>,
    pub(crate) round: u32,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = RngState::from_seed(seed);
        let mut deck = Deck::standard(&config);
        deck.shuffle(&mut rng);
        Self::assemble(config, deck, rng)
    }

    /// Uses `deck` in the given order; nothing is shuffled until the deck runs dry.
    pub fn with_deck(config: GameConfig, deck: Deck) -> Self {
        Self::assemble(config, deck, RngState::from_seed(0))
    }

    fn assemble(config: GameConfig, mut deck: Deck, rng: RngState) -> Self {
        let mut discard_pile = Vec::new();
        if config.flip_initial_discard {
            if let Some(card) = deck.draw() {
                debug!(%card, "flipped initial discard");
                discard_pile.push(card);
            }
        }
        Self {
            config,
            rng,
            deck,
            discard_pile,
            players: Vec::new(),
            turn_index: 0,
            turn: Turn::new(),
            scores: HashMap::new(),
            winner: None,
            round: 1,
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn discard_pile(&self) -> &[Card] {
        &self.discard_pile
    }

    pub fn top_discard(&self) -> Option<Card> {
        self.discard_pile.last().copied()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    pub fn hand(&self, seat: usize) -> Option<&[Card]> {
        self.players.get(seat).map(|player| player.hand.as_slice())
    }

    pub fn staging(&self, seat: usize, slot: usize) -> Option<&[Card]> {
        self.players
            .get(seat)
            .and_then(|player| player.staging.get(slot))
            .map(Vec::as_slice)
    }

    pub fn requirement_text(&self, seat: usize) -> Option<String> {
        let phase = self.players.get(seat)?.phase()?;
        Some(format!("Phase {}: {}", phase.ordinal(), phase.description()))
    }

    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    pub fn current_seat(&self) -> Option<usize> {
        if self.players.is_empty() {
            None
        } else {
            Some(self.turn_index)
        }
    }

    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    pub fn scores(&self) -> &HashMap<usize, u32> {
        &self.scores
    }

    pub fn score(&self, seat: usize) -> u32 {
        self.scores.get(&seat).copied().unwrap_or(0)
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn went_out(&self, seat: usize) -> bool {
        self.players
            .get(seat)
            .map_or(false, |player| player.holds_nothing())
    }

    pub fn round_over(&self) -> bool {
        (0..self.players.len()).any(|seat| self.went_out(seat))
    }

    pub fn total_cards(&self) -> usize {
        self.deck.len()
            + self.discard_pile.len()
            + self.players.iter().map(Player::held_count).sum::<usize>()
    }

    pub(crate) fn player_mut(&mut self, seat: usize) -> Result<&mut Player, GameError> {
        self.players.get_mut(seat).ok_or(GameError::UnknownSeat(seat))
    }

    pub(crate) fn check_seat(&self, seat: usize) -> Result<(), GameError> {
        if seat < self.players.len() {
            Ok(())
        } else {
            Err(GameError::UnknownSeat(seat))
        }
    }

    /// Everything but the top discard goes back under the deck and is shuffled.
    pub(crate) fn replenish_deck(&mut self, events: &mut EventBus) -> usize {
        if self.discard_pile.len() < 2 {
            return 0;
        }
        let top = self.discard_pile.len() - 1;
        let recycled: Vec<Card> = self.discard_pile.drain(..top).collect();
        let count = recycled.len();
        self.deck.replenish(recycled, &mut self.rng);
        debug!(count, "replenished deck from discard pile");
        events.push(Event::DeckReplenished { count });
        count
    }
}
