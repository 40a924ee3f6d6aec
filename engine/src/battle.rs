use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, info};

use crate::{Card, Contestant, EngineError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::First => "first",
            Side::Second => "second",
        }
    }

    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    InProgress,
    Finished,
}

/// Match result by trophy count. `Draw` when both piles are the same size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Winner(Side),
    Draw,
}

/// What happened in one resolved round. `winner` is `None` on a tie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    pub round: u32,
    pub winner: Option<Side>,
    pub first: Card,
    pub second: Card,
}

/// Point-in-time view of a match, valid whether or not it has finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub state: MatchState,
    pub rounds_played: u32,
    pub scores: [usize; 2],
    pub remaining: [usize; 2],
    pub verdict: Verdict,
}

/// Round-by-round engine for a two-contestant match.
///
/// The match is over as soon as either draw queue is empty. Every resolved
/// round puts exactly two cards into trophy piles, so the number of cards in
/// play never changes.
#[derive(Debug, Clone)]
pub struct Match {
    seats: [Contestant; 2],
    round: u32,
}

impl Match {
    pub fn new(first: Contestant, second: Contestant) -> Self {
        info!(
            first = first.name(),
            second = second.name(),
            first_cards = first.remaining_count(),
            second_cards = second.remaining_count(),
            "match ready"
        );
        Self {
            seats: [first, second],
            round: 1,
        }
    }

    pub fn state(&self) -> MatchState {
        if self.seats.iter().all(Contestant::has_cards) {
            MatchState::InProgress
        } else {
            MatchState::Finished
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state() == MatchState::Finished
    }

    /// Number of the next round to be played; starts at 1.
    pub fn round_number(&self) -> u32 {
        self.round
    }

    pub fn rounds_played(&self) -> u32 {
        self.round - 1
    }

    pub fn contestant(&self, side: Side) -> &Contestant {
        &self.seats[side.index()]
    }

    pub fn first(&self) -> &Contestant {
        self.contestant(Side::First)
    }

    pub fn second(&self) -> &Contestant {
        self.contestant(Side::Second)
    }

    /// Cards across both draw queues and both trophy piles.
    pub fn total_cards(&self) -> usize {
        self.seats
            .iter()
            .map(|c| c.remaining_count() + c.score())
            .sum()
    }

    /// Resolve one round: both draw, higher power takes both cards, a tie
    /// sends each card back to its owner's pile.
    pub fn play_round(&mut self) -> Result<RoundOutcome, EngineError> {
        if self.is_finished() {
            return Err(EngineError::MatchAlreadyOver {
                rounds: self.rounds_played(),
            });
        }

        let [first, second] = &mut self.seats;
        let a = first.draw()?;
        let b = second.draw()?;

        let winner = match a.power().cmp(&b.power()) {
            Ordering::Greater => Some(Side::First),
            Ordering::Less => Some(Side::Second),
            Ordering::Equal => None,
        };
        let outcome = RoundOutcome {
            round: self.round,
            winner,
            first: a.clone(),
            second: b.clone(),
        };

        match winner {
            Some(Side::First) => first.receive_trophies([a, b]),
            Some(Side::Second) => second.receive_trophies([a, b]),
            None => {
                first.receive_trophies([a]);
                second.receive_trophies([b]);
            }
        }

        debug!(
            round = outcome.round,
            first_power = outcome.first.power(),
            second_power = outcome.second.power(),
            winner = winner.map_or("tie", Side::as_str),
            "round resolved"
        );
        self.round += 1;

        if self.is_finished() {
            info!(
                rounds = self.rounds_played(),
                first_score = self.first().score(),
                second_score = self.second().score(),
                "match finished"
            );
        }
        Ok(outcome)
    }

    /// Play rounds until one queue runs dry. Returns nothing if already over.
    pub fn play_to_end(&mut self) -> Vec<RoundOutcome> {
        let mut rounds = Vec::with_capacity(self.first().remaining_count());
        while let Ok(outcome) = self.play_round() {
            rounds.push(outcome);
        }
        rounds
    }

    /// Verdict on the current trophy piles.
    pub fn verdict(&self) -> Verdict {
        match self.first().score().cmp(&self.second().score()) {
            Ordering::Greater => Verdict::Winner(Side::First),
            Ordering::Less => Verdict::Winner(Side::Second),
            Ordering::Equal => Verdict::Draw,
        }
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            state: self.state(),
            rounds_played: self.rounds_played(),
            scores: [self.first().score(), self.second().score()],
            remaining: [self.first().remaining_count(), self.second().remaining_count()],
            verdict: self.verdict(),
        }
    }
}
