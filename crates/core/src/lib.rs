//! Phase Ten rules engine. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod combo;
pub mod config;
pub mod deck;
pub mod events;
pub mod game;
pub mod phase;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod turn;

pub use cards::*;
pub use combo::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use game::*;
pub use phase::*;
pub use player::*;
pub use rng::*;
pub use snapshot::*;
pub use turn::*;
