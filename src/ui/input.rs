use crate::ui::app::App;
use crate::ui::view::ButtonSlot;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Left | KeyCode::BackTab => app.focus_prev(),
        KeyCode::Right | KeyCode::Tab => app.focus_next(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.press_focused();
        }
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => {
            app.press(ButtonSlot::Increase);
        }
        KeyCode::Char('-') | KeyCode::Down => {
            app.press(ButtonSlot::Decrease);
        }
        KeyCode::Char('0') => app.reset(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
