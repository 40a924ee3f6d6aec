use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Card, Dealer, EngineError};

/// How a shuffled pool is split between the two draw queues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionPolicy {
    /// Even positions to the first queue, odd positions to the second.
    #[default]
    Alternate,
    /// First half of the pool to the first queue, the rest to the second.
    FirstHalfSecondHalf,
    /// A coin flip per card, capped so both queues end up the same size.
    RandomEqual,
}

impl DistributionPolicy {
    pub const ALL: [Self; 3] = [Self::Alternate, Self::FirstHalfSecondHalf, Self::RandomEqual];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alternate => "alternate",
            Self::FirstHalfSecondHalf => "first_half_second_half",
            Self::RandomEqual => "random_equal",
        }
    }
}

pub type DrawQueues = (VecDeque<Card>, VecDeque<Card>);

/// Split `pool` into two equal draw queues. Pool order is kept inside each queue.
pub fn distribute(
    pool: Vec<Card>,
    policy: DistributionPolicy,
    dealer: &mut Dealer,
) -> Result<DrawQueues, EngineError> {
    if pool.len() % 2 == 1 {
        return Err(EngineError::InvalidCardCount { requested: pool.len() });
    }
    let queues = match policy {
        DistributionPolicy::Alternate => split_alternate(pool),
        DistributionPolicy::FirstHalfSecondHalf => split_halves(pool),
        DistributionPolicy::RandomEqual => split_random_equal(pool, || dealer.coin()),
    };
    debug!(
        policy = policy.as_str(),
        first = queues.0.len(),
        second = queues.1.len(),
        "pool distributed"
    );
    Ok(queues)
}

fn split_alternate(pool: Vec<Card>) -> DrawQueues {
    let half = pool.len() / 2;
    let mut a = VecDeque::with_capacity(half);
    let mut b = VecDeque::with_capacity(half);
    for (i, card) in pool.into_iter().enumerate() {
        if i % 2 == 0 {
            a.push_back(card);
        } else {
            b.push_back(card);
        }
    }
    (a, b)
}

fn split_halves(mut pool: Vec<Card>) -> DrawQueues {
    let back = pool.split_off(pool.len() / 2);
    (pool.into(), back.into())
}

/// Coin-driven split. Exactly one coin is flipped per card; heads sends the
/// card to the first queue unless it is full, and once either queue holds
/// half the pool every remaining card goes to the other one.
///
/// Expects an even-length pool; [`distribute`] checks that before calling.
pub fn split_random_equal(pool: Vec<Card>, mut coin: impl FnMut() -> bool) -> DrawQueues {
    let half = pool.len() / 2;
    let mut a = VecDeque::with_capacity(half);
    let mut b = VecDeque::with_capacity(half);
    for card in pool {
        let heads = coin();
        if (heads && a.len() < half) || b.len() >= half {
            a.push_back(card);
        } else {
            b.push_back(card);
        }
    }
    (a, b)
}
