use std::io;
use std::process::ExitCode;

use clap::Parser;
use rust_pig::cli::{self, Cli};
use rust_pig::error::Result;
use rust_pig::game::PigMatch;

fn main() -> ExitCode {
    let args = Cli::parse();
    cli::init_logger(args.verbose);
    log::debug!("arguments: {:?}", args);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("game aborted: {}", e);
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Cli) -> Result<()> {
    let config = args.to_config()?;
    let mut game = PigMatch::from_config(&config);
    let report = game.run(&mut io::stdout())?;
    log::debug!("final report: {:?}", report);
    Ok(())
}
