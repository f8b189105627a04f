mod apple;
mod board;
mod config;
mod game;
mod input;
mod render;
mod snake;
mod term;

use std::fs::File;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::WriteLogger;

use config::Config;
use game::{Outcome, SnakeGame};

pub type TermInt = u16;
pub type Coords = (u16, u16);

/// Board pixels. Signed so a head stepping past the top or left edge is
/// still representable.
pub type Coord = i32;
pub type Cell = (Coord, Coord);

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;
    info!("starting with {:?}", config);

    let mut game = SnakeGame::new(&config)?;
    if !game.show_intro()? {
        info!("quit from intro");
        return Ok(());
    }

    loop {
        match game.play()? {
            Outcome::Quit => break,
            Outcome::GameOver { score } => {
                if !game.game_over_prompt(score)? {
                    break;
                }
            }
        }
    }

    info!("bye");
    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    let level = if config.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let file = File::create(&config.log_file)
        .with_context(|| format!("creating log file {}", config.log_file.display()))?;

    WriteLogger::init(level, simplelog::Config::default(), file).context("initializing logger")
}
