//! Event loop behaviour with scripted event sources.

use counter_tui::config::Config;
use counter_tui::ui::app::App;
use counter_tui::ui::events::{AppEvent, EventHandler};
use counter_tui::ui::runtime::run_loop;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::io;
use std::thread;
use std::time::Duration;

const POLL: Duration = Duration::from_millis(10);

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Input(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Replays `events` in order, then stays idle.
fn scripted(events: Vec<AppEvent>) -> EventHandler {
    let mut queue: VecDeque<AppEvent> = events.into();
    EventHandler::with_source(POLL, move |timeout| match queue.pop_front() {
        Some(event) => Ok(Some(event)),
        None => {
            thread::sleep(timeout);
            Ok(None)
        }
    })
}

#[test]
fn failing_event_source_is_an_error() {
    let mut app = App::new(&Config::default());
    let events =
        EventHandler::with_source(POLL, |_| Err(io::Error::other("terminal unavailable")));

    let err = run_loop(&mut app, &events, POLL, |_| Ok(())).unwrap_err();
    assert!(err.to_string().contains("terminal unavailable"));
}

#[test]
fn quit_key_ends_loop_cleanly() {
    let mut app = App::new(&Config::default());
    let events = scripted(vec![
        key(KeyCode::Char('+')),
        key(KeyCode::Char('+')),
        key(KeyCode::Char('q')),
    ]);

    let mut draws = Vec::new();
    run_loop(&mut app, &events, POLL, |app| {
        draws.push(app.value());
        Ok(())
    })
    .unwrap();

    assert_eq!(app.value(), 2);
    assert_eq!(draws.first(), Some(&0));
    assert_eq!(draws.last(), Some(&2));
}

#[test]
fn redraw_failure_stops_the_loop() {
    let mut app = App::new(&Config::default());
    let events = scripted(vec![key(KeyCode::Char('q'))]);

    let err = run_loop(&mut app, &events, POLL, |_| {
        Err(io::Error::other("draw failed"))
    })
    .unwrap_err();
    assert_eq!(err.to_string(), "draw failed");
}

#[test]
fn resize_triggers_a_redraw() {
    let mut app = App::new(&Config::default());
    let events = scripted(vec![AppEvent::Resize(100, 40), key(KeyCode::Esc)]);

    let mut draws = 0;
    run_loop(&mut app, &events, POLL, |_| {
        draws += 1;
        Ok(())
    })
    .unwrap();

    // Initial frame plus one after the resize.
    assert_eq!(draws, 2);
}
