use crate::input::InputEvent;
use crate::render::{Canvas, Glyph};
use crate::{TermInt, Coords};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use anyhow::{bail, Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, read, poll};
use log::{info, warn};

/// Owns the terminal for as long as it lives: alternate screen, raw mode and
/// a hidden cursor are set up on creation and undone on drop.
pub struct TermManager {
    stdout: Stdout,
    origin: Coords,
    size: Coords,
    shown: Option<Vec<Glyph>>,
}

impl TermManager {
    /// Takes over the terminal for a canvas of `size` terminal cells.
    pub fn acquire(size: Coords) -> Result<Self> {
        let (width, height) = terminal::size().context("reading terminal size")?;
        let (needed_w, needed_h) = (size.0 + 2, size.1 + 2);

        if needed_w > width || needed_h > height {
            bail!(
                "terminal is {}x{} but the board needs {}x{}; \
                 enlarge the window or pass a smaller --width/--height",
                width,
                height,
                needed_w,
                needed_h
            );
        }

        // Border sits at `origin - 1`, the board is centered on screen.
        let origin = ((width - needed_w) / 2 + 1, (height - needed_h) / 2 + 1);
        let mut term = TermManager { stdout: stdout(), origin, size, shown: None };

        execute!(term.stdout, EnterAlternateScreen).context("entering alternate screen")?;
        terminal::enable_raw_mode().context("enabling raw mode")?;
        execute!(term.stdout, cursor::Hide, cursor::DisableBlinking).context("hiding cursor")?;
        info!("terminal {}x{}, board {}x{} at {:?}", width, height, size.0, size.1, origin);

        term.clear()?;
        Ok(term)
    }

    pub fn read_event_blocking(&self) -> Result<InputEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev.into());
            }
        }
    }

    pub fn read_events_queue(&self) -> Result<Vec<InputEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                events.push(ev.into());
            }
        }

        Ok(events)
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        self.shown = None;
        self.draw_borders()
    }

    /// Writes the canvas to the screen, touching only cells that changed
    /// since the last call.
    pub fn present(&mut self, canvas: &Canvas) -> Result<()> {
        let width = canvas.width() as usize;
        let glyphs = canvas.glyphs();

        for (i, glyph) in glyphs.iter().enumerate() {
            let unchanged = matches!(&self.shown, Some(prev) if prev.get(i) == Some(glyph));
            if unchanged {
                continue;
            }

            let x = self.origin.0 + (i % width) as TermInt;
            let y = self.origin.1 + (i / width) as TermInt;
            queue!(
                self.stdout,
                cursor::MoveTo(x, y),
                style::SetForegroundColor(glyph.fg),
                style::SetBackgroundColor(glyph.bg),
                style::Print(glyph.ch)
            )?;
        }

        queue!(self.stdout, style::ResetColor)?;
        self.shown = Some(glyphs.to_vec());
        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("flushing terminal")
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_borders(&mut self) -> Result<()> {
        let (left, top) = (self.origin.0 - 1, self.origin.1 - 1);
        let (right, bottom) = (self.origin.0 + self.size.0, self.origin.1 + self.size.1);

        for x in left..=right {
            let ch = if x == left || x == right {'+'} else {'-'};
            self.print_at((x, top), ch)?;
            self.print_at((x, bottom), ch)?;
        }

        for y in top + 1..bottom {
            self.print_at((left, y), '|')?;
            self.print_at((right, y), '|')?;
        }

        self.flush()
    }

    fn print_at(&mut self, pos: Coords, ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            self.stdout,
            style::ResetColor,
            cursor::Show,
            cursor::EnableBlinking,
            LeaveAlternateScreen
        )?;
        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            warn!("could not restore terminal: {:#}", e);
        }
    }
}
