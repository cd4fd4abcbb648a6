use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

pub enum AppEvent {
    Input(KeyEvent),
    Resize(u16, u16),
    /// The event source failed; no further events will arrive.
    Error(io::Error),
}

/// Reads terminal events on a background thread and forwards them to the
/// UI thread. Store operations never run here.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    /// Reads from the terminal via crossterm, polling for up to `poll_rate`
    /// per iteration.
    pub fn new(poll_rate: Duration) -> Self {
        Self::with_source(poll_rate, read_terminal_event)
    }

    /// Forwards events produced by `source`.
    ///
    /// `source` is called repeatedly with the poll timeout. `Ok(None)` means
    /// nothing arrived in time. The first `Err` is forwarded as
    /// [`AppEvent::Error`] and stops the reader.
    pub fn with_source<F>(poll_rate: Duration, mut source: F) -> Self
    where
        F: FnMut(Duration) -> io::Result<Option<AppEvent>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            match source(poll_rate) {
                Ok(Some(event)) => {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::error!(error = %err, "terminal event source failed");
                    let _ = tx.send(AppEvent::Error(err));
                    break;
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

fn read_terminal_event(timeout: Duration) -> io::Result<Option<AppEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(match event::read()? {
        Event::Key(key) => Some(AppEvent::Input(key)),
        Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
        _ => None,
    })
}
