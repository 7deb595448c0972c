use strum::EnumCount;

use crate::card::{CardColor, ColoredCard};

// Deck composition

/// Every number card of one color: a single zero and two of each of 1-9.
pub(crate) const NUMBERS_PER_COLOR: &[u8] =
    &[0, 1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9];
pub(crate) const ACTIONS: [ColoredCard; 3] =
    [ColoredCard::Skip, ColoredCard::Reverse, ColoredCard::DrawTwo];
pub(crate) const COPIES_PER_ACTION_AND_COLOR: u8 = 2;
pub(crate) const COPIES_PER_WILD_KIND: u8 = 4;

const COLORS: u8 = CardColor::COUNT as u8;

pub(crate) const NUMBER_CARDS_IN_DECK: u8 = NUMBERS_PER_COLOR.len() as u8 * COLORS;
pub(crate) const ACTION_CARDS_IN_DECK: u8 =
    ACTIONS.len() as u8 * COPIES_PER_ACTION_AND_COLOR * COLORS;
pub(crate) const WILD_CARDS_IN_DECK: u8 = 2 * COPIES_PER_WILD_KIND;

pub const TOTAL_CARDS_IN_DECK: u8 =
    NUMBER_CARDS_IN_DECK + ACTION_CARDS_IN_DECK + WILD_CARDS_IN_DECK;

// Scoring. Number cards are worth their face value.

pub(crate) const ACTION_CARD_POINTS: u32 = 20;
pub(crate) const WILD_CARD_POINTS: u32 = 50;
pub const DEFAULT_TARGET_SCORE: u32 = 500;

// Table

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;
pub const DEFAULT_HAND_SIZE: usize = 7;
