use std::collections::VecDeque;

use rand::RngCore;
use strum::IntoEnumIterator;
use unogame::{
    card::{Card, CardColor, ColoredCard, PlayedCard},
    config::GameConfig,
    error::UnoError,
    frontend::Frontend,
    hand::Hand,
    player::{Controller, Player},
    strategy::Strategy,
    turn::{Decision, TurnActionResult, TurnPhase, TurnView},
    uno::Uno,
};

/// Replays queued answers and records everything it is told.
#[derive(Default)]
struct ScriptedFrontend {
    decisions: VecDeque<Decision>,
    confirmations: VecDeque<bool>,
    colors: VecDeque<CardColor>,
    notifications: Vec<String>,
    prompts: usize,
}

impl ScriptedFrontend {
    fn with_decisions(decisions: Vec<Decision>) -> Self {
        Self {
            decisions: decisions.into(),
            ..Default::default()
        }
    }

    fn heard(&self, needle: &str) -> bool {
        self.notifications.iter().any(|x| x.contains(needle))
    }
}

impl Frontend for ScriptedFrontend {
    fn request_decision(&mut self, _view: &TurnView, _playable: &[Card]) -> Decision {
        self.prompts += 1;
        self.decisions.pop_front().expect("Script ran out of decisions.")
    }

    fn confirm_play_drawn(&mut self, _view: &TurnView, _card: &Card) -> bool {
        self.confirmations
            .pop_front()
            .expect("Script ran out of confirmations.")
    }

    fn choose_color(&mut self, _view: &TurnView) -> CardColor {
        self.colors.pop_front().expect("Script ran out of colors.")
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }
}

/// Tries to play the first card it is not allowed to.
#[derive(Debug)]
struct Stubborn;

impl Strategy for Stubborn {
    fn decide(&mut self, view: &TurnView, playable: &[Card], _rng: &mut dyn RngCore) -> Decision {
        match view.hand.iter().find(|x| !playable.contains(x)) {
            Some(card) => Decision::Play(*card),
            None => Decision::Draw,
        }
    }

    fn play_drawn(&mut self, _view: &TurnView, _card: &Card, _rng: &mut dyn RngCore) -> bool {
        false
    }

    fn choose_color(&mut self, _view: &TurnView, _rng: &mut dyn RngCore) -> CardColor {
        CardColor::Red
    }
}

fn humans(count: usize, seed: u64) -> Uno {
    let players = (0..count)
        .map(|i| Player::human(format!("Human {}", i + 1)).unwrap())
        .collect();
    let mut uno = Uno::with_config(players, GameConfig::default().with_seed(seed)).unwrap();
    uno.setup_round().unwrap();
    uno
}

fn computers(count: usize, config: GameConfig) -> Uno {
    let players = (0..count)
        .map(|i| Player::computer(format!("Bot {}", i + 1)).unwrap())
        .collect();
    Uno::with_config(players, config).unwrap()
}

fn top_color(uno: &Uno) -> CardColor {
    uno.get_last_played_card().unwrap().color()
}

fn other_color(color: CardColor) -> CardColor {
    CardColor::iter().find(|x| *x != color).unwrap()
}

/// A colored card that matches neither the active color nor the top symbol.
fn unplayable_card(uno: &Uno) -> Card {
    let top = uno.get_last_played_card().unwrap();
    let number = (0..=9).find(|x| top.rank() != Some(*x)).unwrap();
    Card::Colored(other_color(top.color()), ColoredCard::Number(number))
}

fn set_current_hand(uno: &mut Uno, cards: Vec<Card>) {
    let index = uno.get_current_turn_player_index();
    uno.get_player_mut(index).unwrap().hand = Hand::from(cards);
}

#[test]
fn interactive_illegal_play_is_reprompted() {
    let mut uno = humans(3, 1);
    let color = top_color(&uno);
    let illegal = unplayable_card(&uno);
    let legal = Card::Colored(color, ColoredCard::Number(3));
    set_current_hand(&mut uno, vec![illegal, legal]);
    let mut frontend =
        ScriptedFrontend::with_decisions(vec![Decision::Play(illegal), Decision::Play(legal)]);

    let result = uno.take_turn(&mut frontend).unwrap();

    assert_eq!(result.turn_action_result, TurnActionResult::Neutral);
    assert_eq!(frontend.prompts, 2);
    assert!(frontend.heard("cannot be played"));
    assert_eq!(
        uno.get_last_played_card(),
        Some(&PlayedCard::Colored(color, ColoredCard::Number(3)))
    );
}

#[test]
fn automated_illegal_play_is_a_logic_error() {
    let players = (0..2)
        .map(|i| Player::new(format!("Stubborn {i}"), Controller::Automated(Box::new(Stubborn))))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let mut uno = Uno::with_config(players, GameConfig::default().with_seed(2)).unwrap();
    uno.setup_round().unwrap();
    let illegal = unplayable_card(&uno);
    set_current_hand(&mut uno, vec![illegal, Card::Wild]);

    let error = uno.take_turn(&mut ScriptedFrontend::default()).unwrap_err();

    assert_eq!(error, UnoError::CardNotPlayable(illegal));
}

#[test]
fn calling_uno_does_not_end_the_turn() {
    let mut uno = humans(4, 3);
    let color = top_color(&uno);
    let current = uno.get_current_turn_player_index();
    let last = Card::Colored(color, ColoredCard::Number(4));
    set_current_hand(&mut uno, vec![last]);
    let mut frontend =
        ScriptedFrontend::with_decisions(vec![Decision::CallUno, Decision::Play(last)]);

    let result = uno.take_turn(&mut frontend).unwrap();

    assert!(result.won);
    assert!(frontend.heard("calls Uno!"));
    assert_eq!(uno.round_winner(), Some(current));
    assert_eq!(uno.phase(), TurnPhase::RoundOver);
}

#[test]
fn wild_color_comes_from_the_frontend() {
    let mut uno = humans(3, 4);
    set_current_hand(&mut uno, vec![Card::Wild, Card::WildDrawFour]);
    let mut frontend = ScriptedFrontend::with_decisions(vec![Decision::Play(Card::Wild)]);
    frontend.colors.push_back(CardColor::Blue);

    let result = uno.take_turn(&mut frontend).unwrap();

    assert_eq!(result.turn_action_result, TurnActionResult::Wild);
    assert_eq!(
        uno.get_last_played_card(),
        Some(&PlayedCard::Wild(CardColor::Blue))
    );
    assert!(frontend.heard("picks Blue"));
}

#[test]
fn declining_drawn_card_passes_turn() {
    let mut uno = humans(3, 5);
    let color = top_color(&uno);
    let current = uno.get_current_turn_player_index();
    let drawn = Card::Colored(color, ColoredCard::Number(8));
    set_current_hand(&mut uno, vec![Card::Colored(other_color(color), ColoredCard::Skip)]);
    uno.draw_pile_mut().add_to_top(drawn);
    let mut frontend = ScriptedFrontend::with_decisions(vec![Decision::Draw]);
    frontend.confirmations.push_back(false);

    let result = uno.take_turn(&mut frontend).unwrap();

    assert_eq!(result.turn_action_result, TurnActionResult::KeptDrawn);
    assert_ne!(uno.get_current_turn_player_index(), current);
    assert!(uno.get_player(current).unwrap().hand.contains(&drawn));
    assert!(frontend.heard(&format!("drew {drawn}")));
}

#[test]
fn accepting_drawn_card_plays_it() {
    let mut uno = humans(3, 6);
    let color = top_color(&uno);
    let current = uno.get_current_turn_player_index();
    let drawn = Card::Colored(color, ColoredCard::Number(8));
    set_current_hand(&mut uno, vec![Card::Colored(other_color(color), ColoredCard::Skip)]);
    uno.draw_pile_mut().add_to_top(drawn);
    let mut frontend = ScriptedFrontend::with_decisions(vec![Decision::Draw]);
    frontend.confirmations.push_back(true);

    let result = uno.take_turn(&mut frontend).unwrap();

    assert_eq!(result.turn_action_result, TurnActionResult::Neutral);
    assert_eq!(uno.get_player(current).unwrap().cards_count(), 1);
    assert_eq!(
        uno.get_last_played_card(),
        Some(&PlayedCard::Colored(color, ColoredCard::Number(8)))
    );
}

#[test]
fn automated_game_runs_to_a_winner() {
    let config = GameConfig::default().with_seed(42).with_target_score(200);
    let mut uno = computers(3, config);
    let mut frontend = ScriptedFrontend::default();

    let winner = uno.play_game(&mut frontend).unwrap();

    assert!(winner.points() >= 200);
    let winner_name = winner.name().to_string();
    assert!(frontend.heard(&format!("{winner_name} wins the game")));
    assert_eq!(uno.phase(), TurnPhase::GameOver);
    assert_eq!(frontend.prompts, 0);
    assert_eq!(uno.setup_round(), Err(UnoError::GameOver));

    let others_below = uno
        .players()
        .iter()
        .take_while(|x| x.name() != winner_name)
        .all(|x| x.points() < 200);
    assert!(others_below);
}

#[test]
fn same_seed_replays_the_same_game() {
    let run = || {
        let config = GameConfig::default().with_seed(7).with_target_score(100);
        let mut uno = computers(4, config);
        let mut frontend = ScriptedFrontend::default();
        uno.play_game(&mut frontend).unwrap();
        frontend.notifications
    };

    assert_eq!(run(), run());
}
