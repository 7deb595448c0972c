use crate::card::{Card, PlayedCard};
use crate::error::{Result, UnoError};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card) {
        self.0.push(card);
    }

    /// Removes one copy of `card`. Asking for a card the hand does not hold
    /// is a caller bug.
    pub fn remove(&mut self, card: &Card) -> Result<Card> {
        let index = self
            .0
            .iter()
            .position(|x| x == card)
            .ok_or(UnoError::CardNotInHand(*card))?;
        Ok(self.0.remove(index))
    }

    pub fn remove_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.0)
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn points(&self) -> u32 {
        self.0.iter().map(Card::points).sum()
    }

    pub fn playable_on(&self, top: &PlayedCard) -> Vec<Card> {
        self.0
            .iter()
            .filter(|card| card.is_playable_on(top))
            .copied()
            .collect()
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardColor, ColoredCard};

    #[test]
    fn remove_takes_a_single_copy() {
        let red_skip = Card::Colored(CardColor::Red, ColoredCard::Skip);
        let mut hand = Hand::from(vec![red_skip, Card::Wild, red_skip]);

        assert_eq!(hand.remove(&red_skip), Ok(red_skip));
        assert_eq!(hand.len(), 2);
        assert!(hand.contains(&red_skip));
    }

    #[test]
    fn remove_missing_card_fails() {
        let mut hand = Hand::from(vec![Card::Wild]);

        assert_eq!(
            hand.remove(&Card::WildDrawFour),
            Err(UnoError::CardNotInHand(Card::WildDrawFour))
        );
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn remove_all_empties_hand() {
        let mut hand = Hand::from(vec![Card::Wild, Card::WildDrawFour]);

        assert_eq!(hand.remove_all(), vec![Card::Wild, Card::WildDrawFour]);
        assert!(hand.is_empty());
    }

    #[test]
    fn hand_points_sum_card_values() {
        let hand = Hand::from(vec![
            Card::Colored(CardColor::Blue, ColoredCard::Skip),
            Card::Wild,
            Card::Colored(CardColor::Yellow, ColoredCard::Number(7)),
        ]);

        assert_eq!(hand.points(), 77);
    }

    #[test]
    fn playable_on_filters_by_top_card() {
        let green_4 = Card::Colored(CardColor::Green, ColoredCard::Number(4));
        let red_4 = Card::Colored(CardColor::Red, ColoredCard::Number(4));
        let red_5 = Card::Colored(CardColor::Red, ColoredCard::Number(5));
        let hand = Hand::from(vec![green_4, red_4, red_5, Card::Wild]);

        let top = PlayedCard::Colored(CardColor::Blue, ColoredCard::Number(4));
        assert_eq!(hand.playable_on(&top), vec![green_4, red_4, Card::Wild]);
    }

    #[test]
    fn playable_on_matches_actions_across_colors() {
        let blue_skip = Card::Colored(CardColor::Blue, ColoredCard::Skip);
        let blue_reverse = Card::Colored(CardColor::Blue, ColoredCard::Reverse);
        let hand = Hand::from(vec![blue_skip, blue_reverse, Card::WildDrawFour]);

        let top = PlayedCard::Colored(CardColor::Green, ColoredCard::Skip);
        assert_eq!(hand.playable_on(&top), vec![blue_skip, Card::WildDrawFour]);
    }
}
