use std::fmt::Debug;

use rand::{
    seq::{IteratorRandom, SliceRandom},
    RngCore,
};
use strum::IntoEnumIterator;

use crate::card::{Card, CardColor};
use crate::turn::{Decision, TurnView};

/// Decision policy for an automated player.
pub trait Strategy: Debug {
    fn decide(&mut self, view: &TurnView, playable: &[Card], rng: &mut dyn RngCore) -> Decision;

    /// Whether to play a card that was just drawn and can be played.
    fn play_drawn(&mut self, view: &TurnView, card: &Card, rng: &mut dyn RngCore) -> bool;

    fn choose_color(&mut self, view: &TurnView, rng: &mut dyn RngCore) -> CardColor;
}

/// Plays a uniformly random playable card, draws when there is none, and
/// always plays a playable drawn card.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn decide(&mut self, _view: &TurnView, playable: &[Card], rng: &mut dyn RngCore) -> Decision {
        match playable.choose(rng) {
            Some(card) => Decision::Play(*card),
            None => Decision::Draw,
        }
    }

    fn play_drawn(&mut self, _view: &TurnView, _card: &Card, _rng: &mut dyn RngCore) -> bool {
        true
    }

    fn choose_color(&mut self, _view: &TurnView, rng: &mut dyn RngCore) -> CardColor {
        CardColor::iter().choose(rng).unwrap_or(CardColor::Red)
    }
}
