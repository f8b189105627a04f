use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::board::{Board, SPACING};

const MIN_DIMENSION: i64 = SPACING as i64;
const MAX_DIMENSION: i64 = 4000;

/// Classic snake in the terminal. Steer with WASD or the arrow keys.
#[derive(Parser, Debug, Clone)]
#[command(name = "snake", version)]
pub struct Config {
    /// Board width in pixels; every 20 pixels make one grid square.
    #[arg(
        long,
        value_name = "PIXELS",
        default_value_t = 400,
        value_parser = clap::value_parser!(i32).range(MIN_DIMENSION..=MAX_DIMENSION)
    )]
    pub width: i32,
    /// Board height in pixels.
    #[arg(
        long,
        value_name = "PIXELS",
        default_value_t = 400,
        value_parser = clap::value_parser!(i32).range(MIN_DIMENSION..=MAX_DIMENSION)
    )]
    pub height: i32,
    /// Game steps per second.
    #[arg(
        long = "tick-rate",
        value_name = "TICKS",
        default_value_t = 11,
        value_parser = clap::value_parser!(u32).range(1..=120)
    )]
    pub tick_rate: u32,
    /// Seed for apple placement, for reproducible games.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Never place the apple on a cell the snake occupies.
    #[arg(long = "fair-apples")]
    pub fair_apples: bool,
    /// Where to write the log; the terminal itself is taken by the game.
    #[arg(long = "log-file", value_name = "PATH", default_value = "snake.log")]
    pub log_file: PathBuf,
    /// Log heading changes and apple placement too.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn board(&self) -> Board {
        Board::new(self.width, self.height)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate
    }
}
