use thiserror::Error;

/// Recoverable failures raised by the match engine.
///
/// None of these leave a match half-updated: the failing call returns before
/// touching any contestant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid card count {requested}: need an even total of at least 4")]
    InvalidCardCount { requested: usize },
    #[error("{contestant} has no cards left to draw")]
    EmptyDeck { contestant: String },
    #[error("match already over after {rounds} rounds")]
    MatchAlreadyOver { rounds: u32 },
}
