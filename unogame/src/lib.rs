//! Turn engine for the UNO card game: the 108-card deck, draw and discard
//! piles, players with interactive or automated decision making, and the
//! round/turn state machine with scoring and win detection.
//!
//! Presentation is left to an implementation of [`frontend::Frontend`].

pub mod card;
pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod frontend;
pub mod hand;
pub mod pile;
pub mod player;
pub mod strategy;
pub mod turn;
pub mod uno;
