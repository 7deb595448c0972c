use std::process;

use colored::*;
use dialoguer::{Confirm, Select};
use strum::IntoEnumIterator;
use tracing::error;
use unogame::{
    card::{Card, CardColor, PlayedCard},
    frontend::Frontend,
    player::Standing,
    turn::{Decision, Direction, TurnView},
};

/// Hot-seat table: every interactive player answers at this terminal.
#[derive(Debug, Default)]
pub struct TerminalFrontend;

impl TerminalFrontend {
    pub fn new() -> Self {
        Self
    }
}

impl Frontend for TerminalFrontend {
    fn request_decision(&mut self, view: &TurnView, playable: &[Card]) -> Decision {
        print_table(view);

        let mut items: Vec<String> = view
            .hand
            .iter()
            .map(|card| match playable.contains(card) {
                true => format!("Play {}", paint(card)),
                false => format!("Play {}", paint(card)).dimmed().to_string(),
            })
            .collect();
        items.push("Draw a card".to_string());
        items.push("Call Uno".to_string());

        let selection = interact(
            Select::new()
                .with_prompt(format!("{}, your move", view.player.bold()))
                .report(false)
                .items(&items)
                .default(0)
                .interact(),
        );

        match selection {
            index if index < view.hand.len() => Decision::Play(view.hand[index]),
            index if index == view.hand.len() => Decision::Draw,
            _ => Decision::CallUno,
        }
    }

    fn confirm_play_drawn(&mut self, _view: &TurnView, card: &Card) -> bool {
        interact(
            Confirm::new()
                .with_prompt(format!("You drew {}. Play it now?", paint(card)))
                .default(true)
                .interact(),
        )
    }

    fn choose_color(&mut self, view: &TurnView) -> CardColor {
        let colors: Vec<CardColor> = CardColor::iter().collect();
        let items: Vec<String> = colors
            .iter()
            .map(|color| tint(*color, &color.to_string()).to_string())
            .collect();

        let selection = interact(
            Select::new()
                .with_prompt(format!("{}, choose the next color", view.player.bold()))
                .items(&items)
                .default(0)
                .interact(),
        );
        colors[selection]
    }

    fn notify(&mut self, message: &str) {
        println!("{}", message.cyan());
    }
}

/// Unwraps a terminal answer, leaving the game if the terminal is gone.
fn interact<T>(answer: dialoguer::Result<T>) -> T {
    match answer {
        Ok(value) => value,
        Err(err) => {
            error!(%err, "terminal interaction failed");
            eprintln!("Cannot read from the terminal: {err}");
            process::exit(1);
        }
    }
}

fn print_table(view: &TurnView) {
    let arrow = match view.direction {
        Direction::Clockwise => "->",
        Direction::CounterClockwise => "<-",
    };
    println!();
    println!(
        "{} {} {}",
        format!("Round {}", view.round).bold(),
        arrow,
        format!("{}'s turn", view.player).bold()
    );
    print_standings(&view.standings, None);
    println!(
        "Discard: {}   Draw pile: {} cards",
        paint_played(&view.top_card),
        view.draw_pile_count
    );
}

pub fn print_standings(standings: &[Standing], winner: Option<&str>) {
    for standing in standings {
        let line = format!(
            "  {:<16} {:>3} points {:>3} cards{}",
            standing.name,
            standing.points,
            standing.cards,
            if standing.has_uno { "  UNO!" } else { "" }
        );
        match winner {
            Some(name) if name == standing.name => println!("{}", line.green().bold()),
            _ => println!("{line}"),
        }
    }
}

fn tint(color: CardColor, text: &str) -> ColoredString {
    match color {
        CardColor::Red => text.red(),
        CardColor::Green => text.green(),
        CardColor::Blue => text.blue(),
        CardColor::Yellow => text.yellow(),
    }
}

fn paint(card: &Card) -> ColoredString {
    match card.color() {
        Some(color) => tint(color, &card.to_string()),
        None => card.to_string().magenta().bold(),
    }
}

fn paint_played(card: &PlayedCard) -> ColoredString {
    tint(card.color(), &card.to_string()).bold()
}
