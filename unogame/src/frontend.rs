use crate::card::{Card, CardColor};
use crate::turn::{Decision, TurnView};

/// The presentation layer the engine talks to. Interactive players make
/// their decisions through it, and every player gets told what happens.
pub trait Frontend {
    /// Asked repeatedly until the player draws or plays; calling Uno does
    /// not end the turn.
    fn request_decision(&mut self, view: &TurnView, playable: &[Card]) -> Decision;

    fn confirm_play_drawn(&mut self, view: &TurnView, card: &Card) -> bool;

    fn choose_color(&mut self, view: &TurnView) -> CardColor;

    /// Fire-and-forget announcement.
    fn notify(&mut self, message: &str);
}
