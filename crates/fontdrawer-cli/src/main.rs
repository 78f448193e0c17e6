//! fontdrawer CLI - draw text onto a fixed-size image from the command line

mod cli;
mod commands;

use clap::Parser;
use fontdrawer::error::Result;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Batch(args) => commands::batch::run(args),
    }
}
