mod setup;
mod terminal;

use clap::Parser;
use color_eyre::Result;
use tracing::{info, Level};
use unogame::{
    config::GameConfig,
    constants::{DEFAULT_HAND_SIZE, DEFAULT_TARGET_SCORE},
    player::Player,
    uno::Uno,
};

use setup::PlayerSpec;
use terminal::TerminalFrontend;

/// Play UNO in the terminal against friends or computer players.
#[derive(Parser, Debug)]
#[command(name = "unoterm", version)]
struct Args {
    /// Seat a player as `human:NAME` or `bot:NAME`; repeat in turn order.
    /// Without any, the seats are asked for interactively.
    #[arg(short, long = "player", value_parser = setup::parse_player_spec)]
    players: Vec<PlayerSpec>,

    /// Seed for shuffling and computer decisions, to replay a game.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = DEFAULT_TARGET_SCORE)]
    target_score: u32,

    #[arg(long, default_value_t = DEFAULT_HAND_SIZE)]
    hand_size: usize,

    /// Engine log verbosity, written to stderr.
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let specs = if args.players.is_empty() {
        setup::prompt_players()?
    } else {
        args.players
    };
    let players = specs
        .into_iter()
        .map(PlayerSpec::into_player)
        .collect::<Result<Vec<Player>, _>>()?;

    let mut config = GameConfig::default()
        .with_target_score(args.target_score)
        .with_hand_size(args.hand_size);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut uno = Uno::with_config(players, config)?;
    info!(players = uno.players().len(), ?config, "starting game");

    let mut frontend = TerminalFrontend::new();
    let winner = uno.play_game(&mut frontend)?.name().to_string();

    terminal::print_standings(&uno.standings(), Some(&winner));
    Ok(())
}
