use std::ops::RangeInclusive;

use tracing::warn;

use crate::{Card, Dealer, EngineError};

/// Smallest pool that still gives each contestant two cards.
pub const MIN_CARDS: usize = 4;

/// Closed range card powers are drawn from.
pub const POWER_RANGE: RangeInclusive<u32> = 10..=100;

/// Cycled to name cards; a positional suffix keeps names unique.
pub const ARCHETYPES: [&str; 10] = [
    "Knight", "Dragon", "Wizard", "Archer", "Assassin", "Golem", "Hunter", "Paladin", "Samurai",
    "Mage",
];

/// Apply the card-count policy: below [`MIN_CARDS`] is rejected, odd counts drop by one.
pub fn normalize_card_count(requested: usize) -> Result<usize, EngineError> {
    if requested < MIN_CARDS {
        return Err(EngineError::InvalidCardCount { requested });
    }
    if requested % 2 == 1 {
        let adjusted = requested - 1;
        warn!(requested, adjusted, "odd card count adjusted to even");
        return Ok(adjusted);
    }
    Ok(requested)
}

/// Build `count` cards with random power and return them in a uniformly shuffled order.
pub fn generate_cards(count: usize, dealer: &mut Dealer) -> Result<Vec<Card>, EngineError> {
    let count = normalize_card_count(count)?;
    let mut pool: Vec<Card> = (0..count)
        .map(|i| {
            let name = format!("{} #{}", ARCHETYPES[i % ARCHETYPES.len()], i + 1);
            Card::new(name, dealer.power(POWER_RANGE))
        })
        .collect();
    dealer.shuffle(&mut pool);
    Ok(pool)
}
