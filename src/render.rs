use crossterm::style::Color;

use crate::{Cell, Coord, TermInt};

/// Anything the game can paint on. Positions are in board pixels.
pub trait RenderTarget {
    fn fill(&mut self, color: Color);
    fn circle(&mut self, center: Cell, radius: Coord, color: Color);
    fn text(&mut self, top_left: Cell, text: &str, color: Color);
}

pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

pub const BLACK: Color = rgb(0, 0, 0);
pub const WHITE: Color = rgb(255, 255, 255);

const CIRCLE: &str = "██";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Glyph {
    fn blank(bg: Color) -> Self {
        Glyph { ch: ' ', fg: bg, bg }
    }
}

/// Frame buffer of terminal cells. Every grid square of the board takes two
/// columns and one row, so circles come out roughly round.
pub struct Canvas {
    width: TermInt,
    height: TermInt,
    spacing: Coord,
    cells: Vec<Glyph>,
}

impl Canvas {
    pub fn new(columns: Coord, rows: Coord, spacing: Coord) -> Self {
        let width = (columns * 2) as TermInt;
        let height = rows as TermInt;
        let cells = vec![Glyph::blank(BLACK); width as usize * height as usize];
        Canvas { width, height, spacing, cells }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    #[cfg(test)]
    pub fn get(&self, col: TermInt, row: TermInt) -> Option<&Glyph> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.cells.get(self.width as usize * row as usize + col as usize)
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.cells
    }

    /// Terminal position of the square holding the pixel, if it is on the canvas.
    pub fn to_term(&self, (x, y): Cell) -> Option<(TermInt, TermInt)> {
        if x < 0 || y < 0 {
            return None;
        }

        let col = x / self.spacing * 2;
        let row = y / self.spacing;
        if col >= self.width as Coord || row >= self.height as Coord {
            return None;
        }

        Some((col as TermInt, row as TermInt))
    }

    fn put(&mut self, col: TermInt, row: TermInt, ch: char, fg: Color) {
        if col >= self.width || row >= self.height {
            return;
        }

        let idx = self.width as usize * row as usize + col as usize;
        let bg = self.cells[idx].bg;
        self.cells[idx] = Glyph { ch, fg, bg };
    }
}

impl RenderTarget for Canvas {
    fn fill(&mut self, color: Color) {
        self.cells.iter_mut().for_each(|g| *g = Glyph::blank(color));
    }

    // A terminal square is the smallest thing we can paint, so the radius only
    // matters for circles that straddle squares, which grid cells never do.
    fn circle(&mut self, center: Cell, _radius: Coord, color: Color) {
        if let Some((col, row)) = self.to_term(center) {
            for (i, ch) in CIRCLE.chars().enumerate() {
                self.put(col + i as TermInt, row, ch, color);
            }
        }
    }

    fn text(&mut self, top_left: Cell, text: &str, color: Color) {
        if let Some((col, row)) = self.to_term(top_left) {
            for (i, ch) in text.chars().enumerate() {
                self.put(col + i as TermInt, row, ch, color);
            }
        }
    }
}
