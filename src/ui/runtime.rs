use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let poll_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config);
    let events = EventHandler::new(poll_rate);
    tracing::info!(tick_rate_ms = config.ui.tick_rate_ms, "counter UI started");

    let result = run_loop(&mut app, &events, poll_rate, |app| {
        terminal.draw(|frame| draw(frame, app)).map(|_| ())
    });

    tracing::info!(value = app.value(), "counter UI stopped");
    drop(guard);
    result
}

/// Drive `app` from `events` until quit is requested.
///
/// `redraw` runs whenever the view is dirty. A failed event source, or one
/// that stops without reporting why, ends the loop with an error.
pub fn run_loop<D>(
    app: &mut App,
    events: &EventHandler,
    poll_rate: Duration,
    mut redraw: D,
) -> io::Result<()>
where
    D: FnMut(&App) -> io::Result<()>,
{
    loop {
        if app.needs_redraw() {
            redraw(app)?;
            app.mark_drawn();
        }
        if app.should_quit() {
            return Ok(());
        }

        match events.next(poll_rate) {
            Ok(AppEvent::Input(key)) => handle_key(app, key),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Error(err)) => return Err(err),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => {
                return Err(io::Error::other("terminal event reader stopped"));
            }
        }
    }
}
