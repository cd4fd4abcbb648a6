//! Counter view: two buttons around a live display of the store's value.
//!
//! The view never caches the counter value. It subscribes to the store and
//! the subscription callback only flips a dirty flag; rendering reads the
//! value straight from the store.

use std::cell::Cell;
use std::rc::Rc;

use crate::ui::button::CounterButton;
use crate::ui::counter::{CounterStore, SubscriptionId};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, VALUE_NEGATIVE, VALUE_POSITIVE};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const BUTTON_HEIGHT: u16 = 3;
const VALUE_MIN_WIDTH: u16 = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ButtonSlot {
    Increase,
    Decrease,
}

impl ButtonSlot {
    fn other(self) -> Self {
        match self {
            Self::Increase => Self::Decrease,
            Self::Decrease => Self::Increase,
        }
    }
}

#[derive(Debug)]
pub struct CounterView {
    increase: CounterButton,
    decrease: CounterButton,
    focus: ButtonSlot,
    dirty: Rc<Cell<bool>>,
    subscription: Option<SubscriptionId>,
}

impl CounterView {
    pub fn new(increase: CounterButton, decrease: CounterButton) -> Self {
        Self {
            increase,
            decrease,
            focus: ButtonSlot::Increase,
            dirty: Rc::new(Cell::new(true)),
            subscription: None,
        }
    }

    /// Subscribe to `store` so every mutation marks the view dirty.
    ///
    /// Binding twice replaces the previous subscription.
    pub fn bind(&mut self, store: &mut CounterStore) {
        self.unbind(store);
        let dirty = Rc::clone(&self.dirty);
        let id = store.subscribe(move |_| dirty.set(true));
        self.subscription = Some(id);
        self.dirty.set(true);
    }

    pub fn unbind(&mut self, store: &mut CounterStore) {
        if let Some(id) = self.subscription.take() {
            store.unsubscribe(id);
        }
    }

    pub fn is_bound(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    pub fn mark_clean(&self) {
        self.dirty.set(false);
    }

    pub fn button(&self, slot: ButtonSlot) -> &CounterButton {
        match slot {
            ButtonSlot::Increase => &self.increase,
            ButtonSlot::Decrease => &self.decrease,
        }
    }

    pub fn focused(&self) -> ButtonSlot {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.other();
        self.mark_dirty();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.other();
        self.mark_dirty();
    }

    pub fn focus(&mut self, slot: ButtonSlot) {
        if self.focus != slot {
            self.focus = slot;
            self.mark_dirty();
        }
    }

    pub fn activate(&self, slot: ButtonSlot, store: &mut CounterStore) -> bool {
        self.button(slot).activate(store)
    }

    pub fn activate_focused(&self, store: &mut CounterStore) -> bool {
        self.activate(self.focus, store)
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, store: &CounterStore) {
        let value = store.get_value().to_string();
        let button_width = self.button_width();
        let value_width = (value.chars().count() as u16).max(VALUE_MIN_WIDTH);
        let card_width = button_width
            .saturating_mul(2)
            .saturating_add(value_width)
            .saturating_add(4);
        let card = centered_rect_by_size(area, card_width, BUTTON_HEIGHT + 2);

        let block = Block::default()
            .title(Span::styled(" counter ", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(button_width),
                Constraint::Min(value_width),
                Constraint::Length(button_width),
            ])
            .split(inner);

        frame.render_widget(
            self.increase.widget(self.focus == ButtonSlot::Increase),
            columns[0],
        );
        frame.render_widget(value_widget(store.get_value()), columns[1]);
        frame.render_widget(
            self.decrease.widget(self.focus == ButtonSlot::Decrease),
            columns[2],
        );
    }

    fn button_width(&self) -> u16 {
        let widest = self
            .increase
            .label()
            .chars()
            .count()
            .max(self.decrease.label().chars().count());
        // label + one cell of padding per side + borders
        (widest as u16).saturating_add(4)
    }
}

fn value_widget(value: i64) -> Paragraph<'static> {
    let color = match value {
        v if v > 0 => VALUE_POSITIVE,
        v if v < 0 => VALUE_NEGATIVE,
        _ => HEADER_TEXT,
    };
    // Pad down one row so the number lines up with the button labels.
    let lines = vec![Line::from(""), Line::from(value.to_string())];
    Paragraph::new(lines)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> CounterView {
        CounterView::new(
            CounterButton::new("Increase", "increase"),
            CounterButton::new("Decrease", "decrease"),
        )
    }

    #[test]
    fn focus_toggles_between_slots() {
        let mut view = view();
        assert_eq!(view.focused(), ButtonSlot::Increase);
        view.focus_next();
        assert_eq!(view.focused(), ButtonSlot::Decrease);
        view.focus_prev();
        assert_eq!(view.focused(), ButtonSlot::Increase);
    }

    #[test]
    fn rebinding_keeps_a_single_subscription() {
        let mut store = CounterStore::new();
        let mut view = view();
        view.bind(&mut store);
        view.bind(&mut store);
        assert_eq!(store.subscriber_count(), 1);
        view.unbind(&mut store);
        assert_eq!(store.subscriber_count(), 0);
        assert!(!view.is_bound());
    }

    #[test]
    fn button_width_fits_widest_label() {
        let view = CounterView::new(
            CounterButton::new("+", "increase"),
            CounterButton::new("Minus", "decrease"),
        );
        assert_eq!(view.button_width(), 9);
    }
}
