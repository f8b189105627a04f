use std::ops::Range;

use crate::{Cell, Coord};

pub const SPACING: Coord = 20;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// The logical playing field. Dimensions are in pixels, cells are the centers
/// of `spacing`-sized squares.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: Coord,
    height: Coord,
    spacing: Coord,
}

impl Board {
    pub fn new(width: Coord, height: Coord) -> Self {
        Board::with_spacing(width, height, SPACING)
    }

    pub fn with_spacing(width: Coord, height: Coord, spacing: Coord) -> Self {
        Board { width, height, spacing }
    }

    pub fn width(&self) -> Coord {
        self.width
    }

    pub fn height(&self) -> Coord {
        self.height
    }

    pub fn spacing(&self) -> Coord {
        self.spacing
    }

    pub fn legal_range(&self, axis: Axis) -> Range<Coord> {
        let dimension = match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        };

        self.spacing / 2..dimension - self.spacing / 2
    }

    pub fn legal_cells(&self, axis: Axis) -> impl Iterator<Item = Coord> {
        self.legal_range(axis).step_by(self.spacing as usize)
    }

    /// Every legal cell of the board, row by row.
    pub fn cells(&self) -> Vec<Cell> {
        let xs: Vec<Coord> = self.legal_cells(Axis::X).collect();
        self.legal_cells(Axis::Y)
            .flat_map(|y| xs.iter().map(move |&x| (x, y)))
            .collect()
    }

    pub fn center(&self) -> Cell {
        let half = self.spacing / 2;
        (
            self.width / (2 * self.spacing) * self.spacing + half,
            self.height / (2 * self.spacing) * self.spacing + half,
        )
    }

    // The far edges compare against the full dimension, not the last legal
    // cell center.
    pub fn is_out_of_bounds(&self, (x, y): Cell) -> bool {
        x < 0 || x > self.width || y < 0 || y > self.height
    }

    /// Grid squares needed to show every cell the snake can reach without
    /// crossing `is_out_of_bounds`.
    pub fn columns(&self) -> Coord {
        (self.width - self.spacing / 2) / self.spacing + 1
    }

    pub fn rows(&self) -> Coord {
        (self.height - self.spacing / 2) / self.spacing + 1
    }
}
