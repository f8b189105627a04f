use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyPress(KeyCode),
}

impl From<KeyEvent> for InputEvent {
    fn from(ev: KeyEvent) -> Self {
        match ev {
            KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL } => {
                InputEvent::Quit
            }
            KeyEvent { code, modifiers: _ } => InputEvent::KeyPress(code),
        }
    }
}

/// What one tick of the game loop takes from the input queue.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub quit: bool,
    pub key: Option<KeyCode>,
}

impl TickInput {
    // Only the first key press of a tick counts. Two turns inside a single
    // tick could fold the snake back onto its own neck.
    pub fn collect<I: IntoIterator<Item = InputEvent>>(events: I) -> Self {
        let mut tick = TickInput::default();

        for ev in events {
            match ev {
                InputEvent::Quit => {
                    tick.quit = true;
                    break;
                }
                InputEvent::KeyPress(code) => {
                    if tick.key.is_none() {
                        tick.key = Some(code);
                    }
                }
            }
        }

        tick
    }
}
