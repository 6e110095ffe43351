//! Ghost CLI - play the word game against the computer in a terminal.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use ghost::config::{DEFAULT_DICTIONARY_PATH, DEFAULT_MIN_WORD_LENGTH};
use ghost::{Game, GhostConfig, Player, StdConsole};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ghost")]
#[command(version, about = "Play Ghost against the computer", long_about = None)]
struct Cli {
    /// Word list, one word per line
    #[arg(short, long, default_value = DEFAULT_DICTIONARY_PATH)]
    dictionary: PathBuf,

    /// Ignore dictionary words shorter than this
    #[arg(short, long, default_value_t = DEFAULT_MIN_WORD_LENGTH)]
    min_length: usize,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    /// Log game events to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> GhostConfig {
        let config = GhostConfig::default()
            .with_dictionary_path(&self.dictionary)
            .with_min_word_length(self.min_length);

        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "ghost=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<Player> {
    let config = cli.config();
    let mut game = Game::from_config(&config).with_context(|| {
        format!(
            "could not set up a game from '{}'",
            config.dictionary_path.display()
        )
    })?;

    let mut console = StdConsole::new();
    let outcome = game.run(&mut console).context("game aborted")?;
    info!(winner = %outcome.winner, "session finished");

    Ok(outcome.winner)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
