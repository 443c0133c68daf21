//! Command-line arguments and logger setup for the `pig` binary.

use clap::Parser;
use env_logger::Env;

use crate::core::{MatchConfig, PlayerKind};
use crate::error::Result;

#[derive(Debug, Clone, Parser)]
#[command(name = "pig")]
#[command(about = "Play the game of Pig.")]
pub struct Cli {
    #[arg(long, value_parser = PlayerKind::TOKENS)]
    pub player1: String,

    #[arg(long, value_parser = PlayerKind::TOKENS)]
    pub player2: String,

    #[arg(long, help = "End the game after one minute")]
    pub timed: bool,

    #[arg(long, help = "Seed the dice for a reproducible game")]
    pub seed: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Cli {
    /// Build the match configuration, validating the player tokens.
    pub fn to_config(&self) -> Result<MatchConfig> {
        let mut config = MatchConfig::new(self.player1.parse()?, self.player2.parse()?)
            .with_timed(self.timed);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        Ok(config)
    }
}

/// Install the global logger. `RUST_LOG` overrides the default level.
pub fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
