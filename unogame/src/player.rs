use crate::card::Card;
use crate::error::{Result, UnoError};
use crate::hand::Hand;
use crate::strategy::{RandomStrategy, Strategy};

/// Where a player's decisions come from.
#[derive(Debug)]
pub enum Controller {
    /// Asked through the [`Frontend`](crate::frontend::Frontend).
    Interactive,
    Automated(Box<dyn Strategy>),
}

#[derive(Debug)]
pub struct Player {
    name: String,
    points: u32,
    pub hand: Hand,
    pub has_uno: bool,
    pub controller: Controller,
}

impl Player {
    pub fn new(name: impl Into<String>, controller: Controller) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(UnoError::InvalidPlayerName);
        }

        Ok(Self {
            name,
            points: 0,
            hand: Hand::new(),
            has_uno: false,
            controller,
        })
    }

    pub fn human(name: impl Into<String>) -> Result<Self> {
        Self::new(name, Controller::Interactive)
    }

    pub fn computer(name: impl Into<String>) -> Result<Self> {
        Self::new(name, Controller::Automated(Box::new(RandomStrategy)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn add_points(&mut self, points: u32) {
        self.points += points;
    }

    pub fn is_automated(&self) -> bool {
        matches!(self.controller, Controller::Automated(_))
    }

    pub fn cards_count(&self) -> usize {
        self.hand.len()
    }

    pub fn add_card(&mut self, card: Card) {
        self.hand.add(card);
        self.has_uno = false;
    }

    pub fn play_card(&mut self, card: &Card) -> Result<Card> {
        self.hand.remove(card)
    }

    /// Records an Uno call; it only sticks while exactly one card is held.
    pub fn call_uno(&mut self) -> bool {
        self.has_uno = self.hand.len() == 1;
        self.has_uno
    }

    pub fn standing(&self) -> Standing {
        Standing {
            name: self.name.clone(),
            points: self.points,
            cards: self.hand.len(),
            has_uno: self.has_uno,
        }
    }
}

/// Public summary of a player, safe to show to everyone at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standing {
    pub name: String,
    pub points: u32,
    pub cards: usize,
    pub has_uno: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardColor, ColoredCard};

    #[test]
    fn return_err_for_blank_name() {
        assert_eq!(
            Player::human("").unwrap_err(),
            UnoError::InvalidPlayerName
        );
        assert_eq!(
            Player::computer(" \t ").unwrap_err(),
            UnoError::InvalidPlayerName
        );
    }

    #[test]
    fn name_is_trimmed() {
        let player = Player::human("  Alice ").unwrap();
        assert_eq!(player.name(), "Alice");
        assert!(!player.is_automated());
        assert!(Player::computer("Bot").unwrap().is_automated());
    }

    #[test]
    fn points_accumulate() {
        let mut player = Player::human("Alice").unwrap();
        player.add_points(77);
        player.add_points(23);
        assert_eq!(player.points(), 100);
    }

    #[test]
    fn uno_only_sticks_with_one_card() {
        let mut player = Player::human("Alice").unwrap();
        player.add_card(Card::Wild);
        player.add_card(Card::WildDrawFour);
        assert!(!player.call_uno());

        player.play_card(&Card::Wild).unwrap();
        assert!(player.call_uno());
        assert!(player.has_uno);

        player.add_card(Card::Colored(CardColor::Red, ColoredCard::Number(2)));
        assert!(!player.has_uno);
    }
}
