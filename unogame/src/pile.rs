use rand::{seq::SliceRandom, Rng};
use tracing::debug;

use crate::card::{Card, PlayedCard};
use crate::error::{Result, UnoError};

/// Face-down stack. The top card is the back of the vector.
#[derive(Debug, Default, Clone)]
pub struct DrawPile(Vec<Card>);

impl DrawPile {
    pub fn new(cards: Vec<Card>) -> Self {
        Self(cards)
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    pub fn draw(&mut self) -> Option<Card> {
        self.0.pop()
    }

    /// Draws the top card, first moving everything but the top of `discard`
    /// back into this pile and reshuffling if it has run out.
    pub fn draw_or_reclaim<R: Rng + ?Sized>(
        &mut self,
        discard: &mut DiscardPile,
        rng: &mut R,
    ) -> Result<Card> {
        if self.0.is_empty() {
            let reclaimed = discard.take_all_but_top();
            debug!(reclaimed = reclaimed.len(), "draw pile empty, reshuffling discards");
            self.0.extend(reclaimed);
            self.shuffle(rng);
        }

        self.draw().ok_or(UnoError::PilesExhausted)
    }

    pub fn add_to_top(&mut self, card: Card) {
        self.0.push(card);
    }

    pub fn add_to_bottom(&mut self, card: Card) {
        self.0.insert(0, card);
    }

    pub fn extend<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.0.extend(cards);
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
}

/// Face-up stack. The top card is the most recently played one.
#[derive(Debug, Default, Clone)]
pub struct DiscardPile(Vec<PlayedCard>);

impl DiscardPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top_card(&self) -> Option<&PlayedCard> {
        self.0.last()
    }

    pub fn add_to_top(&mut self, card: PlayedCard) {
        self.0.push(card);
    }

    /// Removes every card below the top one, leaving the top as the sole
    /// discard.
    pub fn take_all_but_top(&mut self) -> Vec<Card> {
        let below = self.0.len().saturating_sub(1);
        self.0.drain(..below).map(Card::from).collect()
    }

    pub fn take_all(&mut self) -> Vec<Card> {
        self.0.drain(..).map(Card::from).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
