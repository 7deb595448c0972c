use strum::IntoEnumIterator;

use crate::{
    card::{Card, CardColor, ColoredCard},
    constants::*,
};

/// The fixed 108-card UNO deck, in construction order.
#[derive(Debug, Clone)]
pub struct Deck(Vec<Card>);

impl Deck {
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(TOTAL_CARDS_IN_DECK.into());

        for color in CardColor::iter() {
            for action in ACTIONS {
                for _ in 0..COPIES_PER_ACTION_AND_COLOR {
                    cards.push(Card::Colored(color, action));
                }
            }

            for number in NUMBERS_PER_COLOR {
                cards.push(Card::Colored(color, ColoredCard::Number(*number)));
            }
        }

        for wild in [Card::Wild, Card::WildDrawFour] {
            for _ in 0..COPIES_PER_WILD_KIND {
                cards.push(wild);
            }
        }

        Self(cards)
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn into_cards(self) -> Vec<Card> {
        self.0
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
