use std::collections::HashSet;

use color_eyre::Result;
use dialoguer::{Input, Select};
use unogame::{
    constants::{MAX_PLAYERS, MIN_PLAYERS},
    error::UnoError,
    player::Player,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Bot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSpec {
    pub kind: PlayerKind,
    pub name: String,
}

impl PlayerSpec {
    pub fn into_player(self) -> Result<Player, UnoError> {
        match self.kind {
            PlayerKind::Human => Player::human(self.name),
            PlayerKind::Bot => Player::computer(self.name),
        }
    }
}

/// Parses `human:NAME` or `bot:NAME`.
pub fn parse_player_spec(value: &str) -> Result<PlayerSpec, String> {
    let (kind, name) = value
        .split_once(':')
        .ok_or_else(|| format!("expected KIND:NAME, got `{value}`"))?;

    let kind = match kind.trim().to_ascii_lowercase().as_str() {
        "human" | "player" => PlayerKind::Human,
        "bot" | "ai" | "computer" => PlayerKind::Bot,
        other => return Err(format!("unknown player kind `{other}`, use human or bot")),
    };

    let name = name.trim();
    if name.is_empty() {
        return Err("player name must not be empty".to_string());
    }

    Ok(PlayerSpec {
        kind,
        name: name.to_string(),
    })
}

/// Asks who sits at the table, in turn order.
pub fn prompt_players() -> Result<Vec<PlayerSpec>> {
    let count: usize = Input::new()
        .with_prompt(format!("How many players ({MIN_PLAYERS}-{MAX_PLAYERS})"))
        .default(4)
        .validate_with(|count: &usize| -> Result<(), String> {
            if (MIN_PLAYERS..=MAX_PLAYERS).contains(count) {
                Ok(())
            } else {
                Err(format!("Choose between {MIN_PLAYERS} and {MAX_PLAYERS}"))
            }
        })
        .interact_text()?;

    let mut specs: Vec<PlayerSpec> = Vec::with_capacity(count);
    for seat in 1..=count {
        let kind = match Select::new()
            .with_prompt(format!("Who is player {seat}?"))
            .items(&["Human", "Computer"])
            .default(if seat == 1 { 0 } else { 1 })
            .interact()?
        {
            0 => PlayerKind::Human,
            _ => PlayerKind::Bot,
        };

        let taken: HashSet<String> = specs.iter().map(|x| x.name.clone()).collect();
        let name: String = Input::new()
            .with_prompt(format!("Type player {seat}'s name"))
            .default(match kind {
                PlayerKind::Human => format!("Player {seat}"),
                PlayerKind::Bot => format!("Bot {seat}"),
            })
            .validate_with(move |name: &String| -> Result<(), &str> {
                let name = name.trim();
                if name.is_empty() {
                    Err("Enter a name")
                } else if !name.is_ascii() {
                    Err("Use plain ASCII characters")
                } else if taken.contains(name) {
                    Err("That name is taken")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        specs.push(PlayerSpec {
            kind,
            name: name.trim().to_string(),
        });
    }

    Ok(specs)
}
