use std::{thread::sleep, time::{Duration, Instant}};

use crate::apple::Apple;
use crate::board::Board;
use crate::config::Config;
use crate::input::{InputEvent, TickInput};
use crate::render::{Canvas, RenderTarget, BLACK, WHITE};
use crate::snake::{relocate_anywhere, relocate_fair, Snake, MoveResult::*};
use crate::term::TermManager;
use crate::{Cell, Coord};

use anyhow::Result;
use log::info;
use rand::{rngs::StdRng, SeedableRng};

type Relocate = fn(&mut Apple, &Board, &mut StdRng, &[Cell]);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    GameOver { score: usize },
    Quit,
}

pub struct SnakeGame {
    board: Board,
    canvas: Canvas,
    rng: StdRng,
    tick_interval: Duration,
    relocate: Relocate,
    term: TermManager,
}

impl SnakeGame {
    pub fn new(config: &Config) -> Result<Self> {
        let board = config.board();
        let canvas = Canvas::new(board.columns(), board.rows(), board.spacing());
        let term = TermManager::acquire((canvas.width(), canvas.height()))?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let relocate: Relocate = if config.fair_apples { relocate_fair } else { relocate_anywhere };

        Ok(SnakeGame { board, canvas, rng, tick_interval: config.tick_interval(), relocate, term })
    }

    /// Returns `false` if the player quit instead of starting.
    pub fn show_intro(&mut self) -> Result<bool> {
        let lines = &[
            "SNAKE",
            "",
            "WASD or arrow keys to move",
            "CTRL+C to quit",
            "",
            "Press any key to begin",
        ];

        self.canvas.fill(BLACK);
        draw_message(&mut self.canvas, &self.board, lines);
        self.term.present(&self.canvas)?;

        Ok(self.term.read_event_blocking()? != InputEvent::Quit)
    }

    pub fn play(&mut self) -> Result<Outcome> {
        let (mut snake, mut apple) = new_round(&self.board, &mut self.rng, self.relocate);
        let mut pacer = Pacer::new(self.tick_interval);

        info!("new game, apple at {:?}", apple.pos());
        self.render(&snake, &apple)?;

        loop {
            pacer.wait();

            let tick = TickInput::collect(self.term.read_events_queue()?);
            if tick.quit {
                info!("quit during game, score {}", snake.score());
                return Ok(Outcome::Quit);
            }

            if let Some(key) = tick.key {
                snake.set_heading(key);
            }

            match snake.advance(&mut apple, &self.board, &mut self.rng, self.relocate) {
                Continue => self.render(&snake, &apple)?,
                GameOver => {
                    info!(
                        "game over at {:?} heading {:?}, score {}",
                        snake.head(),
                        snake.get_direction(),
                        snake.score()
                    );
                    return Ok(Outcome::GameOver { score: snake.score() });
                }
            }
        }
    }

    /// Shows the game over message on top of the last frame and waits for a
    /// key. Returns `true` to play again.
    pub fn game_over_prompt(&mut self, score: usize) -> Result<bool> {
        let score_line = format!("Score: {}", score);
        let lines = &["GAME OVER", score_line.as_str(), "press any key to play again"];
        draw_message(&mut self.canvas, &self.board, lines);
        self.term.present(&self.canvas)?;

        match self.term.read_event_blocking()? {
            InputEvent::Quit => Ok(false),
            InputEvent::KeyPress(_) => Ok(true),
        }
    }

    fn render(&mut self, snake: &Snake, apple: &Apple) -> Result<()> {
        self.canvas.fill(BLACK);
        snake.draw(&mut self.canvas, &self.board);
        apple.draw(&mut self.canvas, &self.board);
        self.term.present(&self.canvas)
    }
}

/// A fresh snake on the start cell, and an apple placed around it.
fn new_round(board: &Board, rng: &mut StdRng, relocate: Relocate) -> (Snake, Apple) {
    let snake = Snake::new(board);
    let apple = Apple::new(board, rng, snake.body(), relocate);
    (snake, apple)
}

/// Keeps ticks `interval` apart, sleeping off whatever the tick did not use.
pub struct Pacer {
    interval: Duration,
    last_tick: Instant,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Pacer { interval, last_tick: Instant::now() }
    }

    pub fn remaining(&self) -> Duration {
        self.interval.checked_sub(self.last_tick.elapsed()).unwrap_or_default()
    }

    pub fn wait(&mut self) {
        sleep(self.remaining());
        self.last_tick = Instant::now();
    }
}

/// Centers `lines` on the board, starting three eighths of the way down.
fn draw_message<T: RenderTarget>(target: &mut T, board: &Board, lines: &[&str]) {
    // One character takes one terminal column, half a grid square.
    let char_width = board.spacing() / 2;
    let top = board.height() * 3 / 8;

    for (i, line) in lines.iter().enumerate() {
        let width = line.chars().count() as Coord * char_width;
        let x = ((board.width() - width) / 2).max(0);
        let y = top + i as Coord * board.spacing();
        target.text((x, y), line, WHITE);
    }
}
