use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub mod api;
pub mod battle;
pub mod card;
pub mod contestant;
pub mod content;
pub mod deal;
pub mod error;
pub mod pool;

pub use battle::{Match, MatchState, MatchSummary, RoundOutcome, Side, Verdict};
pub use card::{Card, Rarity};
pub use contestant::{Contestant, OpponentKind};
pub use deal::{distribute, split_random_equal, DistributionPolicy};
pub use error::EngineError;
pub use pool::{generate_cards, normalize_card_count, MIN_CARDS};

/// Seeded source of randomness handed to the pool generator and the distributor.
///
/// Every random decision in a match goes through one `Dealer`, so a seed fully
/// determines the pool, its order and the deal.
pub struct Dealer {
    rng: ChaCha8Rng,
}

impl Dealer {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform draw from a closed integer range.
    pub fn power(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.gen_range(range)
    }

    /// Fair coin: `true` is heads.
    pub fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Uniform in-place permutation (Fisher-Yates).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}
