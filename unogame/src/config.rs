use crate::constants::{DEFAULT_HAND_SIZE, DEFAULT_TARGET_SCORE, TOTAL_CARDS_IN_DECK};
use crate::error::{Result, UnoError};

/// Rule settings for a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub target_score: u32,
    pub hand_size: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            hand_size: DEFAULT_HAND_SIZE,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    pub(crate) fn validate(&self, player_count: usize) -> Result<()> {
        if self.target_score == 0 {
            return Err(UnoError::InvalidConfig("target score must be positive"));
        }
        if self.hand_size == 0 {
            return Err(UnoError::InvalidConfig("hand size must be positive"));
        }
        // Leave at least one card to start the discard pile.
        if self.hand_size * player_count >= usize::from(TOTAL_CARDS_IN_DECK) {
            return Err(UnoError::InvalidConfig("not enough cards to deal every hand"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules() {
        let config = GameConfig::default();
        assert_eq!(config.target_score, 500);
        assert_eq!(config.hand_size, 7);
        assert_eq!(config.seed, None);
        assert!(config.validate(10).is_ok());
    }

    #[test]
    fn reject_unplayable_settings() {
        assert!(GameConfig::default().with_target_score(0).validate(2).is_err());
        assert!(GameConfig::default().with_hand_size(0).validate(2).is_err());
        assert!(GameConfig::default().with_hand_size(11).validate(10).is_err());
        assert!(GameConfig::default().with_hand_size(10).validate(10).is_ok());
    }
}
