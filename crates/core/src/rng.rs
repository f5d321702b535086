use crate::Card;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tracing::trace;

#[derive(Debug, Clone)]
pub struct RngState {
    seed: u64,
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn shuffle(&mut self, cards: &mut [Card]) {
        trace!(seed = self.seed, count = cards.len(), "shuffle");
        cards.shuffle(&mut self.rng);
    }
}
