use crate::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupSource {
    Deck,
    DiscardPile,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    PlayerJoined { seat: usize, name: String },
    CardsDealt { seat: usize, count: usize },
    CardDiscarded { seat: usize, card: Card },
    CardPickedUp {
        seat: usize,
        card: Card,
        source: PickupSource,
    },
    TurnCompleted { seat: usize, next: usize },
    PhaseCleared { seat: usize, phase: usize },
    PlayerFinished { seat: usize },
    RoundScored { seat: usize, points: u32, total: u32 },
    DeckReplenished { count: usize },
    RoundStarted { round: u32 },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
