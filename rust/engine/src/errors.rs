use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("It's not seat {actual}'s turn (expected seat {expected})")]
    NotYourTurn { expected: usize, actual: usize },
    #[error("Illegal action: {reason}")]
    IllegalAction { reason: String },
    #[error("Insufficient stack: requested {requested}, available {available}")]
    InsufficientStack { requested: u32, available: u32 },
    #[error("Need at least 2 seats with chips to start a hand (have {available})")]
    InsufficientPlayers { available: usize },
    #[error("Deck exhausted: requested {requested}, remaining {remaining}")]
    DeckExhausted { requested: usize, remaining: usize },
    #[error("No hand in progress")]
    NoHandInProgress,
    #[error("A hand is already in progress")]
    HandInProgress,
    #[error("Invalid seat: {0}")]
    InvalidSeat(usize),
    #[error("Seat {0} is already occupied")]
    SeatOccupied(usize),
    #[error("Invalid card: {0}")]
    InvalidCard(String),
    #[error("Hand evaluation needs 5 to 7 cards, got {0}")]
    InvalidCardCount(usize),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl GameError {
    pub(crate) fn illegal(reason: impl Into<String>) -> Self {
        GameError::IllegalAction {
            reason: reason.into(),
        }
    }
}
