use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{Card, EngineError};

/// Who sits in a seat. Only changes labels, never the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentKind {
    Human,
    #[default]
    Computer,
}

/// One side of a match: a FIFO draw queue and a pile of won cards.
#[derive(Debug, Clone)]
pub struct Contestant {
    name: String,
    kind: OpponentKind,
    deck: VecDeque<Card>,
    trophies: Vec<Card>,
}

impl Contestant {
    pub fn new(name: impl Into<String>, kind: OpponentKind, deck: VecDeque<Card>) -> Self {
        Self {
            name: name.into(),
            kind,
            deck,
            trophies: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> OpponentKind {
        self.kind
    }

    pub fn has_cards(&self) -> bool {
        !self.deck.is_empty()
    }

    pub fn remaining_count(&self) -> usize {
        self.deck.len()
    }

    /// Take the front card of the draw queue.
    pub fn draw(&mut self) -> Result<Card, EngineError> {
        self.deck.pop_front().ok_or_else(|| EngineError::EmptyDeck {
            contestant: self.name.clone(),
        })
    }

    /// Add the cards won (or kept on a tie) this round: always one or two.
    pub fn receive_trophies(&mut self, cards: impl IntoIterator<Item = Card>) {
        let before = self.trophies.len();
        self.trophies.extend(cards);
        debug_assert!(
            (1..=2).contains(&(self.trophies.len() - before)),
            "a round hands out one or two trophies, got {}",
            self.trophies.len() - before
        );
    }

    pub fn score(&self) -> usize {
        self.trophies.len()
    }

    /// Cards still to be played, front first.
    pub fn deck(&self) -> impl ExactSizeIterator<Item = &Card> + '_ {
        self.deck.iter()
    }

    pub fn trophies(&self) -> &[Card] {
        &self.trophies
    }
}
