use crossterm::event::KeyCode;
use crossterm::style::Color;
use log::debug;
use rand::Rng;

use crate::apple::Apple;
use crate::board::Board;
use crate::render::{rgb, RenderTarget};
use crate::Cell;
use Direction::*;
use MoveResult::*;

const DARK_GREEN: Color = rgb(0x28, 0x59, 0x2b);
const LIGHT_GREEN: Color = rgb(0x25, 0xe6, 0x31);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn from_key(key: KeyCode) -> Option<Direction> {
        match key {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Up),
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Left),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Down),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Right),
            _ => None,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Up | Down)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Continue,
    GameOver
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Alive,
    Dead
}

/// The snake's cells, head first.
pub struct Snake {
    body: Vec<Cell>,
    direction: Direction,
    state: State,
}

impl Snake {
    pub fn new(board: &Board) -> Self {
        Snake { body: vec![board.center()], direction: Right, state: State::Alive }
    }

    #[cfg(test)]
    pub fn with_body(body: Vec<Cell>, direction: Direction) -> Self {
        assert!(!body.is_empty(), "a snake needs at least a head");
        Snake { body, direction, state: State::Alive }
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn is_alive(&self) -> bool {
        self.state == State::Alive
    }

    /// Apples eaten so far.
    pub fn score(&self) -> usize {
        self.body.len() - 1
    }

    /// Turns the snake if `key` is a direction perpendicular to the current
    /// heading. Returns whether the heading changed.
    pub fn set_heading(&mut self, key: KeyCode) -> bool {
        let new_direction = match Direction::from_key(key) {
            Some(dir) => dir,
            None => return false,
        };

        if new_direction.is_vertical() == self.direction.is_vertical() {
            return false;
        }

        debug!("heading {:?} -> {:?}", self.direction, new_direction);
        self.direction = new_direction;
        true
    }

    /// One tick of movement. Eating the apple grows the snake by one cell and
    /// sends the apple somewhere else via `relocate`.
    pub fn advance<R, F>(
        &mut self,
        apple: &mut Apple,
        board: &Board,
        rng: &mut R,
        relocate: F,
    ) -> MoveResult
    where
        R: Rng,
        F: FnOnce(&mut Apple, &Board, &mut R, &[Cell]),
    {
        if !self.is_alive() {
            return GameOver;
        }

        let new_head = self.next_head(board);

        if board.is_out_of_bounds(new_head) || self.body.contains(&new_head) {
            self.state = State::Dead;
            return GameOver;
        }

        if new_head == apple.pos() {
            self.body.insert(0, new_head);
            relocate(apple, board, rng, &self.body);
        } else {
            self.body.pop();
            self.body.insert(0, new_head);
        }

        Continue
    }

    pub fn draw<T: RenderTarget>(&self, target: &mut T, board: &Board) {
        let radius = board.spacing() / 2;

        // Body first so the head stays visible if it overlaps the apple's square.
        for pos in self.body.iter().skip(1) {
            target.circle(*pos, radius, LIGHT_GREEN);
        }
        target.circle(self.head(), radius, DARK_GREEN);
    }

    fn next_head(&self, board: &Board) -> Cell {
        let (x, y) = self.head();
        let step = board.spacing();

        match self.direction {
            Up => (x, y - step),
            Down => (x, y + step),
            Left => (x - step, y),
            Right => (x + step, y),
        }
    }
}

/// The plain relocation rule: a fresh random cell, ignoring the body.
pub fn relocate_anywhere<R: Rng>(apple: &mut Apple, board: &Board, rng: &mut R, _body: &[Cell]) {
    apple.relocate(board, rng);
}

/// Relocation that never drops the apple inside the snake.
pub fn relocate_fair<R: Rng>(apple: &mut Apple, board: &Board, rng: &mut R, body: &[Cell]) {
    apple.relocate_avoiding(board, rng, body);
}
