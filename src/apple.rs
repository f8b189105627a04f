use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::board::{Axis, Board};
use crate::render::{rgb, RenderTarget};
use crate::Cell;

const RED: crossterm::style::Color = rgb(255, 0, 0);

pub struct Apple {
    pos: Cell,
}

impl Apple {
    /// Places the first apple of a game with the same rule used after each
    /// meal, so `occupied` is honoured from the start.
    pub fn new<R, F>(board: &Board, rng: &mut R, occupied: &[Cell], place: F) -> Self
    where
        R: Rng,
        F: FnOnce(&mut Apple, &Board, &mut R, &[Cell]),
    {
        let mut apple = Apple { pos: board.center() };
        place(&mut apple, board, rng, occupied);
        apple
    }

    #[cfg(test)]
    pub fn at(pos: Cell) -> Self {
        Apple { pos }
    }

    pub fn pos(&self) -> Cell {
        self.pos
    }

    /// Moves the apple to a random legal cell. The snake's body is not taken
    /// into account, so the apple may land inside it.
    pub fn relocate<R: Rng>(&mut self, board: &Board, rng: &mut R) -> Cell {
        let x = random_step(board, Axis::X, rng);
        let y = random_step(board, Axis::Y, rng);
        self.pos = (x, y);
        debug!("apple relocated to {:?}", self.pos);
        self.pos
    }

    /// Like `relocate`, but only picks cells outside `occupied`. Falls back to
    /// `relocate` when the board is full.
    pub fn relocate_avoiding<R: Rng>(
        &mut self,
        board: &Board,
        rng: &mut R,
        occupied: &[Cell],
    ) -> Cell {
        let choices: Vec<Cell> = board
            .cells()
            .into_iter()
            .filter(|c| !occupied.contains(c))
            .collect();

        match choices.choose(rng).copied() {
            Some(pos) => {
                self.pos = pos;
                debug!("apple relocated to free cell {:?}", self.pos);
                self.pos
            }
            None => self.relocate(board, rng),
        }
    }

    pub fn draw<T: RenderTarget>(&self, target: &mut T, board: &Board) {
        target.circle(self.pos, board.spacing() / 2, RED);
    }
}

fn random_step<R: Rng>(board: &Board, axis: Axis, rng: &mut R) -> crate::Coord {
    let range = board.legal_range(axis);
    let steps = (range.end - range.start + board.spacing() - 1) / board.spacing();
    range.start + rng.gen_range(0..steps.max(1)) * board.spacing()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::{relocate_anywhere, relocate_fair};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn relocate_stays_on_legal_cells() {
        let board = Board::new(400, 300);
        let mut rng = StdRng::seed_from_u64(7);
        let mut apple = Apple::new(&board, &mut rng, &[], relocate_anywhere);

        for _ in 0..500 {
            let (x, y) = apple.relocate(&board, &mut rng);
            assert_eq!(apple.pos(), (x, y));
            assert!(board.legal_range(Axis::X).contains(&x));
            assert!(board.legal_range(Axis::Y).contains(&y));
            assert_eq!(x % 20, 10);
            assert_eq!(y % 20, 10);
        }
    }

    #[test]
    fn relocate_reaches_both_ends_of_the_range() {
        let board = Board::new(100, 100);
        let mut rng = StdRng::seed_from_u64(1);
        let mut apple = Apple::at((10, 10));

        let xs: Vec<_> = (0..400).map(|_| apple.relocate(&board, &mut rng).0).collect();
        assert!(xs.contains(&10));
        assert!(xs.contains(&70));
        assert!(!xs.contains(&90));
    }

    #[test]
    fn relocate_avoiding_skips_occupied_cells() {
        let board = Board::new(100, 60);
        let mut rng = StdRng::seed_from_u64(3);
        let mut apple = Apple::at((10, 10));

        let mut occupied = board.cells();
        let free = occupied.remove(5);

        for _ in 0..20 {
            assert_eq!(apple.relocate_avoiding(&board, &mut rng, &occupied), free);
        }
    }

    #[test]
    fn first_apple_follows_the_fair_rule() {
        // Legal cells are (10, 10), (30, 10), (10, 30) and (30, 30).
        let board = Board::new(60, 60);
        let start = board.center();
        assert_eq!(start, (30, 30));

        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let apple = Apple::new(&board, &mut rng, &[start], relocate_fair);
            assert_ne!(apple.pos(), start, "seed {}", seed);
        }
    }

    #[test]
    fn first_apple_may_land_on_the_snake_by_default() {
        let board = Board::new(60, 60);
        let start = board.center();

        let hits = (0..100)
            .filter(|&seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                Apple::new(&board, &mut rng, &[start], relocate_anywhere).pos() == start
            })
            .count();
        assert!(hits > 0);
    }

    #[test]
    fn relocate_avoiding_falls_back_on_full_board() {
        let board = Board::new(100, 60);
        let mut rng = StdRng::seed_from_u64(3);
        let mut apple = Apple::at((10, 10));

        let pos = apple.relocate_avoiding(&board, &mut rng, &board.cells());
        assert!(board.cells().contains(&pos));
    }
}
