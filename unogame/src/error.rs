use thiserror::Error;

use crate::card::Card;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum UnoError {
    #[error("Not enough players")]
    NotEnoughPlayers,
    #[error("Too many players")]
    TooManyPlayers,
    #[error("Player name must not be empty")]
    InvalidPlayerName,
    #[error("Player name `{0}` is already taken")]
    DuplicatePlayerName(String),
    #[error("Invalid game configuration: {0}")]
    InvalidConfig(&'static str),
    #[error("{0} is not in the player's hand")]
    CardNotInHand(Card),
    #[error("{0} cannot be played on the current discard")]
    CardNotPlayable(Card),
    #[error("A color must be chosen when playing {0}")]
    MissingColor(Card),
    #[error("Only the freshly drawn card can be played now")]
    NoDrawnCard,
    #[error("Both the draw pile and the discard pile are exhausted")]
    PilesExhausted,
    #[error("No round is in progress")]
    RoundOver,
    #[error("The round has no winner to score")]
    NoRoundWinner,
    #[error("The game is already over")]
    GameOver,
}

impl UnoError {
    /// Errors caused by a bad choice from the acting player, as opposed to an
    /// engine or collaborator defect.
    pub fn is_illegal_input(&self) -> bool {
        matches!(
            self,
            UnoError::CardNotPlayable(_) | UnoError::MissingColor(_) | UnoError::NoDrawnCard
        )
    }
}

pub type Result<T, E = UnoError> = std::result::Result<T, E>;
