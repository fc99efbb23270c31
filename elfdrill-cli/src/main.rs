use anyhow::{Context, Result};
use clap::Parser;
use session::Game;
use std::fs;
use std::io;
use std::path::PathBuf;

mod bank;
mod output;
mod question;
mod session;
#[cfg(test)]
mod testutil;

/// ELF structure trivia trainer
#[derive(Parser)]
#[command(
    name = "elfdrill",
    about = "Quiz yourself on the layout of random system ELF binaries",
    version,
    author
)]
struct Cli {
    /// Print diagnostic detail for each step
    #[arg(short, long)]
    verbose: bool,

    /// Training folder path to create training files there
    #[arg(short, long, default_value = "./training-folder")]
    folder: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    let bank = bank::build()?;
    let mut game = Game::new(cli.folder, bank);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    game.play_round(&mut input)?;
    while output::confirm("Do you want to keep playing?", true, &mut input)? {
        println!();
        game.play_round(&mut input)?;
    }

    if output::confirm("Do you want to delete training folder at last?", true, &mut input)? {
        fs::remove_dir_all(game.folder())
            .with_context(|| format!("removing {}", game.folder().display()))?;
        log::debug!("Training folder {} removed", game.folder().display());
    }
    Ok(())
}
