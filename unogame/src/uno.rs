use std::collections::HashSet;

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, info, warn};

use crate::card::{Card, CardColor, ColoredCard, PlayedCard};
use crate::config::GameConfig;
use crate::constants::{MAX_PLAYERS, MIN_PLAYERS};
use crate::deck::Deck;
use crate::error::{Result, UnoError};
use crate::frontend::Frontend;
use crate::pile::{DiscardPile, DrawPile};
use crate::player::{Controller, Player, Standing};
use crate::turn::{
    next_index, Decision, Direction, PlayAction, PlayTurnResult, TurnAction, TurnActionResult,
    TurnPhase, TurnView,
};

/// Points credited to a round winner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundScore {
    pub round: u32,
    pub winner_index: usize,
    pub points: u32,
}

#[derive(Debug)]
pub struct Uno {
    config: GameConfig,
    draw_pile: DrawPile,
    discard_pile: DiscardPile,
    players: Vec<Player>,
    current_turn_player_index: usize,
    direction: Direction,
    phase: TurnPhase,
    round: u32,
    dealer_index: Option<usize>,
    round_winner: Option<usize>,
    last_round_score: Option<RoundScore>,
    game_winner: Option<usize>,
    rng: StdRng,
}

impl Uno {
    pub fn new(players: Vec<Player>) -> Result<Self> {
        Self::with_config(players, GameConfig::default())
    }

    pub fn with_config(players: Vec<Player>, config: GameConfig) -> Result<Self> {
        if players.len() < MIN_PLAYERS {
            return Err(UnoError::NotEnoughPlayers);
        }
        if players.len() > MAX_PLAYERS {
            return Err(UnoError::TooManyPlayers);
        }

        let mut names = HashSet::with_capacity(players.len());
        for player in &players {
            if !names.insert(player.name()) {
                return Err(UnoError::DuplicatePlayerName(player.name().to_string()));
            }
        }

        config.validate(players.len())?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Uno {
            config,
            draw_pile: DrawPile::new(Deck::new().into_cards()),
            discard_pile: DiscardPile::new(),
            players,
            current_turn_player_index: 0,
            direction: Direction::Clockwise,
            phase: TurnPhase::RoundOver,
            round: 0,
            dealer_index: None,
            round_winner: None,
            last_round_score: None,
            game_winner: None,
            rng,
        })
    }

    /// Gathers every card back, picks a dealer, deals fresh hands and turns
    /// over the starting card.
    pub fn setup_round(&mut self) -> Result<()> {
        if self.phase == TurnPhase::GameOver {
            return Err(UnoError::GameOver);
        }

        self.reclaim_cards();
        self.round += 1;
        self.round_winner = None;
        self.last_round_score = None;
        self.direction = Direction::Clockwise;
        self.current_turn_player_index = 0;

        self.draw_pile.shuffle(&mut self.rng);
        let dealer_index = self.select_dealer()?;
        self.dealer_index = Some(dealer_index);
        self.draw_pile.shuffle(&mut self.rng);

        for _ in 0..self.config.hand_size {
            for player in &mut self.players {
                let card = self.draw_pile.draw().ok_or(UnoError::PilesExhausted)?;
                player.add_card(card);
            }
        }

        self.reveal_starting_card()?;
        self.phase = TurnPhase::AwaitingDecision;

        info!(
            round = self.round,
            dealer = self.players[dealer_index].name(),
            first = self.players[self.current_turn_player_index].name(),
            "round set up"
        );

        Ok(())
    }

    /// Applies a single action for the player whose turn it is.
    pub fn play_turn(&mut self, turn_action: TurnAction) -> Result<PlayTurnResult> {
        match self.phase {
            TurnPhase::RoundOver => return Err(UnoError::RoundOver),
            TurnPhase::GameOver => return Err(UnoError::GameOver),
            TurnPhase::AwaitingDecision | TurnPhase::DrawnCard(_) => {}
        }

        let current_turn_player_index = self.current_turn_player_index;

        let turn_action_result = match (self.phase, turn_action) {
            (_, TurnAction::CallUno) => {
                return Ok(PlayTurnResult {
                    turn_action_result: self.perform_uno(),
                    won: false,
                });
            }
            (TurnPhase::AwaitingDecision, TurnAction::Draw) => {
                let card = self.draw_card()?;
                self.players[current_turn_player_index].add_card(card);

                let playable = card.is_playable_on(&self.top()?);
                if playable {
                    self.phase = TurnPhase::DrawnCard(card);
                } else {
                    self.move_turn_n_players_ahead(1);
                }
                TurnActionResult::Drew { card, playable }
            }
            (TurnPhase::DrawnCard(_), TurnAction::KeepDrawn) => {
                self.phase = TurnPhase::AwaitingDecision;
                self.move_turn_n_players_ahead(1);
                TurnActionResult::KeptDrawn
            }
            (TurnPhase::DrawnCard(drawn), TurnAction::Play(play_action))
                if play_action.card() != drawn =>
            {
                return Err(UnoError::NoDrawnCard);
            }
            (_, TurnAction::Play(play_action)) => self.perform_play(play_action)?,
            (_, TurnAction::Draw) | (_, TurnAction::KeepDrawn) => {
                return Err(UnoError::NoDrawnCard);
            }
        };

        debug!(
            player = self.players[current_turn_player_index].name(),
            ?turn_action,
            ?turn_action_result,
            "turn action resolved"
        );

        let won = self.players[current_turn_player_index].hand.is_empty();
        if won {
            self.phase = TurnPhase::RoundOver;
            self.round_winner = Some(current_turn_player_index);
            info!(
                round = self.round,
                winner = self.players[current_turn_player_index].name(),
                "round won"
            );
        }

        Ok(PlayTurnResult {
            turn_action_result,
            won,
        })
    }

    /// Runs one player's whole turn, asking them (or their strategy) until
    /// they have drawn or played.
    pub fn take_turn(&mut self, frontend: &mut dyn Frontend) -> Result<PlayTurnResult> {
        loop {
            let view = self.turn_view()?;
            let turn_action = match self.phase {
                TurnPhase::AwaitingDecision => {
                    let playable = self.playable_cards();
                    match self.request_decision(frontend, &view, &playable) {
                        Decision::CallUno => TurnAction::CallUno,
                        Decision::Draw => TurnAction::Draw,
                        Decision::Play(card) if playable.contains(&card) => {
                            self.play_action_for(frontend, &view, card)?
                        }
                        Decision::Play(card) => {
                            if self.get_current_turn_player().is_automated() {
                                return Err(UnoError::CardNotPlayable(card));
                            }
                            warn!(player = %view.player, %card, "rejected unplayable card");
                            frontend.notify(&format!("{card} cannot be played right now."));
                            continue;
                        }
                    }
                }
                TurnPhase::DrawnCard(card) => {
                    if self.confirm_play_drawn(frontend, &view, &card) {
                        self.play_action_for(frontend, &view, card)?
                    } else {
                        TurnAction::KeepDrawn
                    }
                }
                TurnPhase::RoundOver => return Err(UnoError::RoundOver),
                TurnPhase::GameOver => return Err(UnoError::GameOver),
            };

            let automated = self.get_current_turn_player().is_automated();
            let result = self.play_turn(turn_action)?;
            frontend.notify(&describe(&view.player, automated, &turn_action, &result));

            let turn_continues = matches!(turn_action, TurnAction::CallUno)
                || matches!(self.phase, TurnPhase::DrawnCard(_));
            if result.won || !turn_continues {
                return Ok(result);
            }
        }
    }

    /// Plays turns until somebody empties their hand and returns their index.
    pub fn play_round(&mut self, frontend: &mut dyn Frontend) -> Result<usize> {
        loop {
            if let Some(winner_index) = self.round_winner {
                return Ok(winner_index);
            }
            self.take_turn(frontend)?;
        }
    }

    /// Plays rounds until a player reaches the target score and returns
    /// that player.
    pub fn play_game(&mut self, frontend: &mut dyn Frontend) -> Result<&Player> {
        loop {
            self.setup_round()?;
            frontend.notify(&format!(
                "Round {}: {} deals. The starting card is {}.",
                self.round,
                self.players[self.dealer_index.unwrap_or_default()].name(),
                self.top()?
            ));

            self.play_round(frontend)?;
            let score = self.score_round()?;
            let winner = &self.players[score.winner_index];
            frontend.notify(&format!(
                "{} wins round {} and scores {} points ({} total).",
                winner.name(),
                score.round,
                score.points,
                winner.points()
            ));

            if let Some(game_winner_index) = self.check_winner() {
                let winner = &self.players[game_winner_index];
                frontend.notify(&format!(
                    "{} wins the game with {} points!",
                    winner.name(),
                    winner.points()
                ));
                return Ok(winner);
            }
        }
    }

    /// Credits the round winner with the value of every card left in the
    /// other hands, then gathers all cards back into the draw pile.
    pub fn score_round(&mut self) -> Result<RoundScore> {
        if self.last_round_score.is_some() {
            return Err(UnoError::NoRoundWinner);
        }
        let winner_index = self.round_winner.ok_or(UnoError::NoRoundWinner)?;

        let points = self.players.iter().map(|x| x.hand.points()).sum();
        self.players[winner_index].add_points(points);
        self.reclaim_cards();

        let score = RoundScore {
            round: self.round,
            winner_index,
            points,
        };
        info!(
            round = self.round,
            winner = self.players[winner_index].name(),
            points,
            total = self.players[winner_index].points(),
            "round scored"
        );
        self.last_round_score = Some(score.clone());

        Ok(score)
    }

    /// Looks at every player in turn order and ends the game on the first
    /// one at or above the target score.
    pub fn check_winner(&mut self) -> Option<usize> {
        if self.game_winner.is_none() {
            self.game_winner = self
                .players
                .iter()
                .position(|x| x.points() >= self.config.target_score);

            if let Some(index) = self.game_winner {
                self.phase = TurnPhase::GameOver;
                info!(
                    winner = self.players[index].name(),
                    points = self.players[index].points(),
                    "game won"
                );
            }
        }
        self.game_winner
    }

    pub fn turn_view(&self) -> Result<TurnView> {
        let player = self.get_current_turn_player();
        Ok(TurnView {
            player: player.name().to_string(),
            hand: player.hand.cards().to_vec(),
            top_card: self.top()?,
            direction: self.direction,
            round: self.round,
            draw_pile_count: self.draw_pile.len(),
            standings: self.standings(),
        })
    }

    pub fn playable_cards(&self) -> Vec<Card> {
        match self.top() {
            Ok(top) => self.get_current_turn_player().hand.playable_on(&top),
            Err(_) => vec![],
        }
    }

    pub fn standings(&self) -> Vec<Standing> {
        self.players.iter().map(Player::standing).collect()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get_player(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    pub fn get_player_mut(&mut self, index: usize) -> Option<&mut Player> {
        self.players.get_mut(index)
    }

    pub fn get_current_turn_player_index(&self) -> usize {
        self.current_turn_player_index
    }

    pub fn get_current_turn_player(&self) -> &Player {
        &self.players[self.current_turn_player_index]
    }

    pub fn get_next_turn_player_index(&self) -> usize {
        self.get_nth_turn_player_index(1)
    }

    pub fn get_last_played_card(&self) -> Option<&PlayedCard> {
        self.discard_pile.top_card()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn dealer_index(&self) -> Option<usize> {
        self.dealer_index
    }

    pub fn round_winner(&self) -> Option<usize> {
        self.round_winner
    }

    pub fn game_winner(&self) -> Option<&Player> {
        self.game_winner.map(|index| &self.players[index])
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn draw_pile(&self) -> &DrawPile {
        &self.draw_pile
    }

    /// Direct access for arranging scripted scenarios. Only built for tests
    /// and with the `test-util` feature.
    #[cfg(any(test, feature = "test-util"))]
    pub fn draw_pile_mut(&mut self) -> &mut DrawPile {
        &mut self.draw_pile
    }

    pub fn discard_pile(&self) -> &DiscardPile {
        &self.discard_pile
    }

    fn top(&self) -> Result<PlayedCard> {
        self.discard_pile
            .top_card()
            .copied()
            .ok_or(UnoError::RoundOver)
    }

    fn perform_play(&mut self, play_action: PlayAction) -> Result<TurnActionResult> {
        let card = play_action.card();
        if !self.get_current_turn_player().hand.contains(&card) {
            return Err(UnoError::CardNotInHand(card));
        }
        if !card.is_playable_on(&self.top()?) {
            return Err(UnoError::CardNotPlayable(card));
        }

        self.players[self.current_turn_player_index].play_card(&card)?;
        self.discard_pile.add_to_top(play_action.into_played_card());
        self.phase = TurnPhase::AwaitingDecision;

        let result = match play_action {
            PlayAction::Colored(_, ColoredCard::Number(_)) => {
                self.move_turn_n_players_ahead(1);
                TurnActionResult::Neutral
            }
            PlayAction::Colored(_, ColoredCard::Skip) => {
                self.move_turn_n_players_ahead(2);
                TurnActionResult::Skip
            }
            PlayAction::Colored(_, ColoredCard::Reverse) => {
                self.perform_reverse();
                TurnActionResult::Reverse
            }
            PlayAction::Colored(_, ColoredCard::DrawTwo) => {
                self.draw_cards_to_player(self.get_next_turn_player_index(), 2)?;
                self.move_turn_n_players_ahead(2);
                TurnActionResult::DrawTwo
            }
            PlayAction::Wild(_) => {
                self.move_turn_n_players_ahead(1);
                TurnActionResult::Wild
            }
            PlayAction::WildDrawFour(_) => {
                self.draw_cards_to_player(self.get_next_turn_player_index(), 4)?;
                self.move_turn_n_players_ahead(2);
                TurnActionResult::WildDrawFour
            }
        };

        Ok(result)
    }

    /// With two players a reverse hands the turn straight back, like a skip.
    fn perform_reverse(&mut self) {
        self.direction = self.direction.reversed();
        if self.players.len() == 2 {
            self.move_turn_n_players_ahead(2);
        } else {
            self.move_turn_n_players_ahead(1);
        }
    }

    fn perform_uno(&mut self) -> TurnActionResult {
        if self.players[self.current_turn_player_index].call_uno() {
            TurnActionResult::UnoSuccessful
        } else {
            TurnActionResult::UnoFailed
        }
    }

    fn play_action_for(
        &mut self,
        frontend: &mut dyn Frontend,
        view: &TurnView,
        card: Card,
    ) -> Result<TurnAction> {
        let color = if card.is_wild() {
            Some(self.choose_color(frontend, view))
        } else {
            None
        };
        Ok(TurnAction::Play(PlayAction::new(card, color)?))
    }

    fn request_decision(
        &mut self,
        frontend: &mut dyn Frontend,
        view: &TurnView,
        playable: &[Card],
    ) -> Decision {
        match &mut self.players[self.current_turn_player_index].controller {
            Controller::Interactive => frontend.request_decision(view, playable),
            Controller::Automated(strategy) => strategy.decide(view, playable, &mut self.rng),
        }
    }

    fn confirm_play_drawn(
        &mut self,
        frontend: &mut dyn Frontend,
        view: &TurnView,
        card: &Card,
    ) -> bool {
        match &mut self.players[self.current_turn_player_index].controller {
            Controller::Interactive => frontend.confirm_play_drawn(view, card),
            Controller::Automated(strategy) => strategy.play_drawn(view, card, &mut self.rng),
        }
    }

    fn choose_color(&mut self, frontend: &mut dyn Frontend, view: &TurnView) -> CardColor {
        match &mut self.players[self.current_turn_player_index].controller {
            Controller::Interactive => frontend.choose_color(view),
            Controller::Automated(strategy) => strategy.choose_color(view, &mut self.rng),
        }
    }

    /// Each player draws a card; the highest number card deals, earlier
    /// seats winning ties. Non-number cards don't count, and if nobody drew
    /// a number the draw is repeated. Drawn cards go back under the pile.
    fn select_dealer(&mut self) -> Result<usize> {
        loop {
            let drawn = (0..self.players.len())
                .map(|_| self.draw_pile.draw().ok_or(UnoError::PilesExhausted))
                .collect::<Result<Vec<_>>>()?;

            let mut dealer: Option<(usize, u8)> = None;
            for (index, card) in drawn.iter().enumerate() {
                if let Some(rank) = card.rank() {
                    if dealer.map_or(true, |(_, best)| rank > best) {
                        dealer = Some((index, rank));
                    }
                }
            }

            for card in drawn {
                self.draw_pile.add_to_bottom(card);
            }

            if let Some((index, rank)) = dealer {
                debug!(dealer = self.players[index].name(), rank, "dealer selected");
                return Ok(index);
            }
        }
    }

    /// Turns over the first non-wild card and applies its effect to the
    /// first seat. Wild cards go back under the pile.
    fn reveal_starting_card(&mut self) -> Result<()> {
        let mut attempts = self.draw_pile.len();
        let (color, starting_card) = loop {
            match self.draw_pile.draw().ok_or(UnoError::PilesExhausted)? {
                Card::Colored(color, card) => break (color, card),
                wild => {
                    debug!(card = %wild, "wild starting card returned to the pile");
                    self.draw_pile.add_to_bottom(wild);
                    attempts -= 1;
                    if attempts == 0 {
                        return Err(UnoError::PilesExhausted);
                    }
                }
            }
        };

        match starting_card {
            ColoredCard::Number(_) => {}
            ColoredCard::Skip => self.move_turn_n_players_ahead(1),
            ColoredCard::Reverse => {
                self.direction = self.direction.reversed();
                self.move_turn_n_players_ahead(1);
            }
            ColoredCard::DrawTwo => {
                self.draw_cards_to_player(self.current_turn_player_index, 2)?;
                self.move_turn_n_players_ahead(1);
            }
        }

        self.discard_pile
            .add_to_top(starting_card.into_played_card(color));
        Ok(())
    }

    fn reclaim_cards(&mut self) {
        for player in &mut self.players {
            self.draw_pile.extend(player.hand.remove_all());
            player.has_uno = false;
        }
        self.draw_pile.extend(self.discard_pile.take_all());
    }

    fn draw_card(&mut self) -> Result<Card> {
        self.draw_pile
            .draw_or_reclaim(&mut self.discard_pile, &mut self.rng)
    }

    fn draw_cards_to_player(&mut self, player_index: usize, count: usize) -> Result<()> {
        for _ in 0..count {
            let card = self.draw_card()?;
            self.players[player_index].add_card(card);
        }
        Ok(())
    }

    fn get_nth_turn_player_index(&self, n: usize) -> usize {
        next_index(
            self.current_turn_player_index,
            self.direction,
            n,
            self.players.len(),
        )
    }

    fn move_turn_n_players_ahead(&mut self, n: usize) {
        self.current_turn_player_index = self.get_nth_turn_player_index(n);
    }
}

fn describe(
    name: &str,
    automated: bool,
    turn_action: &TurnAction,
    result: &PlayTurnResult,
) -> String {
    let action = match (turn_action, &result.turn_action_result) {
        (_, TurnActionResult::Drew { card, .. }) if !automated => format!("drew {card}"),
        (_, TurnActionResult::Drew { .. }) => "draws a card".to_string(),
        (_, TurnActionResult::KeptDrawn) => "keeps the drawn card".to_string(),
        (_, TurnActionResult::UnoSuccessful) => "calls Uno!".to_string(),
        (_, TurnActionResult::UnoFailed) => "calls Uno with more than one card".to_string(),
        (TurnAction::Play(PlayAction::Wild(color)), _)
        | (TurnAction::Play(PlayAction::WildDrawFour(color)), _) => {
            format!("plays {} and picks {color}", turn_action_card(turn_action))
        }
        _ => format!("plays {}", turn_action_card(turn_action)),
    };
    if action.ends_with('!') {
        format!("{name} {action}")
    } else {
        format!("{name} {action}.")
    }
}

fn turn_action_card(turn_action: &TurnAction) -> String {
    match turn_action {
        TurnAction::Play(play_action) => play_action.card().to_string(),
        _ => String::new(),
    }
}
