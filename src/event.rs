use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

pub enum Event {
    Key(KeyEvent),
    Click { column: u16, row: u16 },
}

/// Reads terminal input on a background thread. The game loop drains the
/// queue once per frame; no game state is shared with the reader.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            if !event::poll(poll_interval).unwrap_or(false) {
                continue;
            }
            let forwarded = match event::read() {
                Ok(crossterm::event::Event::Key(key)) => Some(Event::Key(key)),
                Ok(crossterm::event::Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                })) => Some(Event::Click { column, row }),
                Ok(_) => None,
                Err(e) => {
                    tracing::warn!("input reader stopped: {e}");
                    return;
                }
            };
            if let Some(ev) = forwarded {
                if tx.send(ev).is_err() {
                    return;
                }
            }
        });

        Self { rx }
    }

    /// Everything that arrived since the last call, in order.
    pub fn drain(&self) -> Vec<Event> {
        self.rx.try_iter().collect()
    }
}
