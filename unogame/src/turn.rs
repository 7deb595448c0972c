use crate::card::{Card, CardColor, ColoredCard, PlayedCard};
use crate::error::{Result, UnoError};
use crate::player::Standing;

/// What a player chose to do when asked for a decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    CallUno,
    Draw,
    Play(Card),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayAction {
    Colored(CardColor, ColoredCard),
    Wild(CardColor),
    WildDrawFour(CardColor),
}

impl PlayAction {
    /// Pairs a card with the color chosen for it. Wild cards need one,
    /// colored cards ignore it.
    pub fn new(card: Card, color: Option<CardColor>) -> Result<Self> {
        match (card, color) {
            (Card::Colored(card_color, card), _) => Ok(PlayAction::Colored(card_color, card)),
            (Card::Wild, Some(color)) => Ok(PlayAction::Wild(color)),
            (Card::WildDrawFour, Some(color)) => Ok(PlayAction::WildDrawFour(color)),
            (_, None) => Err(UnoError::MissingColor(card)),
        }
    }

    pub fn card(&self) -> Card {
        match self {
            PlayAction::Colored(color, card) => Card::Colored(*color, *card),
            PlayAction::Wild(_) => Card::Wild,
            PlayAction::WildDrawFour(_) => Card::WildDrawFour,
        }
    }

    pub(crate) fn into_played_card(self) -> PlayedCard {
        match self {
            PlayAction::Colored(color, card) => card.into_played_card(color),
            PlayAction::Wild(color) => PlayedCard::Wild(color),
            PlayAction::WildDrawFour(color) => PlayedCard::WildDrawFour(color),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnAction {
    Play(PlayAction),
    Draw,
    /// Decline to play a card that was just drawn and turned out playable.
    KeepDrawn,
    CallUno,
}

#[derive(Debug, PartialEq, Eq)]
pub enum TurnActionResult {
    Neutral,
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
    Drew { card: Card, playable: bool },
    KeptDrawn,
    UnoFailed,
    UnoSuccessful,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PlayTurnResult {
    pub turn_action_result: TurnActionResult,
    pub won: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingDecision,
    /// The active player drew a playable card and may play it or keep it.
    DrawnCard(Card),
    RoundOver,
    GameOver,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn sign(self) -> isize {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Seat `steps` places away from `current` in `direction`, wrapping around
/// the table.
pub fn next_index(
    current: usize,
    direction: Direction,
    steps: usize,
    player_count: usize,
) -> usize {
    let offset = direction.sign() * steps as isize;
    (current as isize + offset).rem_euclid(player_count as isize) as usize
}

/// Everything a decision maker gets to see about the table on its turn.
#[derive(Clone, Debug)]
pub struct TurnView {
    pub player: String,
    pub hand: Vec<Card>,
    pub top_card: PlayedCard,
    pub direction: Direction,
    pub round: u32,
    pub draw_pile_count: usize,
    pub standings: Vec<Standing>,
}
