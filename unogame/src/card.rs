use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

use crate::constants::{ACTION_CARD_POINTS, WILD_CARD_POINTS};

#[derive(Clone, Copy, Debug, Display, EnumCountMacro, EnumIter, PartialEq, Eq, Hash)]
pub enum CardColor {
    Red,
    Green,
    Blue,
    Yellow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColoredCard {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

impl ColoredCard {
    pub fn into_played_card(self, color: CardColor) -> PlayedCard {
        PlayedCard::Colored(color, self)
    }

    pub fn points(&self) -> u32 {
        match self {
            ColoredCard::Number(number) => u32::from(*number),
            ColoredCard::Skip | ColoredCard::Reverse | ColoredCard::DrawTwo => ACTION_CARD_POINTS,
        }
    }
}

/// One of the 108 physical cards. Wild cards carry no color until played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Card {
    Colored(CardColor, ColoredCard),
    Wild,
    WildDrawFour,
}

impl Card {
    pub fn color(&self) -> Option<CardColor> {
        match self {
            Card::Colored(color, _) => Some(*color),
            Card::Wild | Card::WildDrawFour => None,
        }
    }

    pub fn rank(&self) -> Option<u8> {
        match self {
            Card::Colored(_, ColoredCard::Number(number)) => Some(*number),
            _ => None,
        }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild | Card::WildDrawFour)
    }

    pub fn points(&self) -> u32 {
        match self {
            Card::Colored(_, card) => card.points(),
            Card::Wild | Card::WildDrawFour => WILD_CARD_POINTS,
        }
    }

    /// A card can go on `top` if it shares the active color or the symbol
    /// (number or action), and wild cards can always be played.
    pub fn is_playable_on(&self, top: &PlayedCard) -> bool {
        match (self, top) {
            (Card::Wild | Card::WildDrawFour, _) => true,
            (Card::Colored(color, card), PlayedCard::Colored(top_color, top_card)) => {
                color == top_color || card == top_card
            }
            (Card::Colored(color, _), _) => *color == top.color(),
        }
    }
}

/// A card as it sits on the discard pile, with the active color a wild was
/// given when it was played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayedCard {
    Colored(CardColor, ColoredCard),
    Wild(CardColor),
    WildDrawFour(CardColor),
}

impl PlayedCard {
    pub fn color(&self) -> CardColor {
        match self {
            PlayedCard::Colored(color, _)
            | PlayedCard::Wild(color)
            | PlayedCard::WildDrawFour(color) => *color,
        }
    }

    pub fn rank(&self) -> Option<u8> {
        self.card().rank()
    }

    /// The physical card, with any chosen wild color dropped.
    pub fn card(&self) -> Card {
        match self {
            PlayedCard::Colored(color, card) => Card::Colored(*color, *card),
            PlayedCard::Wild(_) => Card::Wild,
            PlayedCard::WildDrawFour(_) => Card::WildDrawFour,
        }
    }
}

impl From<PlayedCard> for Card {
    fn from(played: PlayedCard) -> Self {
        played.card()
    }
}

impl Display for ColoredCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColoredCard::Number(number) => write!(f, "{number}"),
            ColoredCard::Skip => write!(f, "Skip"),
            ColoredCard::Reverse => write!(f, "Reverse"),
            ColoredCard::DrawTwo => write!(f, "Draw Two"),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, card) => write!(f, "{color} {card}"),
            Card::Wild => write!(f, "Wild"),
            Card::WildDrawFour => write!(f, "Wild Draw Four"),
        }
    }
}

impl Display for PlayedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayedCard::Colored(color, card) => write!(f, "{color} {card}"),
            PlayedCard::Wild(color) => write!(f, "Wild ({color})"),
            PlayedCard::WildDrawFour(color) => write!(f, "Wild Draw Four ({color})"),
        }
    }
}
