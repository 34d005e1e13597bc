mod config;
mod render;
mod runner;

use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, GameMode, Mark, TicTacToeGameState};
use common::{log, logger};
use tokio::io::BufReader;

use config::get_config_manager;
use runner::MatchRunner;

#[derive(Parser)]
#[command(name = "tictactoe_terminal")]
struct Args {
    /// YAML settings file. Defaults to tictactoe_config.yaml next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// `single` (against the computer) or `multi` (two players, one keyboard).
    #[arg(long, value_parser = parse_mode)]
    mode: Option<GameMode>,

    /// `easy`, `medium` or `hard`. Unknown names play hard.
    #[arg(long)]
    difficulty: Option<String>,

    /// Mark for the human in single player mode. X always moves first.
    #[arg(long, value_parser = parse_mark)]
    symbol: Option<Mark>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Writes the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,
}

fn parse_mode(value: &str) -> Result<GameMode, String> {
    GameMode::from_name(value).ok_or_else(|| format!("Unknown mode '{}', expected single or multi", value))
}

fn parse_mark(value: &str) -> Result<Mark, String> {
    Mark::from_symbol(value).ok_or_else(|| format!("Unknown symbol '{}', expected X or O", value))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config);
    let mut config = config_manager.get_config()?;

    let prefix = if args.use_log_prefix || config.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if let Some(mode) = args.mode {
        config.tictactoe.mode = mode;
    }
    if let Some(difficulty) = args.difficulty.as_deref() {
        config.tictactoe.difficulty = Difficulty::from_name(difficulty);
    }
    if let Some(symbol) = args.symbol {
        config.tictactoe.human_mark = symbol;
    }

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Settings saved");
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let settings = config.tictactoe;
    log!(
        "Starting {:?}: human plays {}, difficulty {}, seed {}",
        settings.mode,
        settings.human_mark,
        settings.difficulty.name(),
        rng.seed()
    );

    let state = TicTacToeGameState::new(settings);
    let input = BufReader::new(tokio::io::stdin());
    let summary = MatchRunner::new(state, input, tokio::io::stdout(), rng).run().await?;

    log!(
        "Match finished after {} rounds: X {} / O {} / draws {}",
        summary.rounds(),
        summary.x_wins,
        summary.o_wins,
        summary.draws
    );

    Ok(())
}
