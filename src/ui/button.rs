//! Presentational counter button.
//!
//! A button carries no state of its own. Its configuration tag, fixed at
//! construction, selects which store operation an activation performs.

use crate::ui::counter::CounterStore;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, BUTTON_BORDER, BUTTON_FOCUSED, HEADER_TEXT};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Store operation selected by a configuration tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Increase,
    Decrease,
}

impl ButtonAction {
    pub const INCREASE_TAG: &'static str = "increase";
    pub const DECREASE_TAG: &'static str = "decrease";

    /// Recognizes exactly `increase` and `decrease`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            Self::INCREASE_TAG => Some(Self::Increase),
            Self::DECREASE_TAG => Some(Self::Decrease),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Increase => Self::INCREASE_TAG,
            Self::Decrease => Self::DECREASE_TAG,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterButton {
    label: String,
    tag: String,
    action: Option<ButtonAction>,
}

impl CounterButton {
    pub fn new(label: impl Into<String>, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let action = ButtonAction::from_tag(&tag);
        Self {
            label: label.into(),
            tag,
            action,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// `None` when the tag is not recognized; activation is then a no-op.
    pub fn action(&self) -> Option<ButtonAction> {
        self.action
    }

    /// Perform the store operation selected by the tag.
    ///
    /// Returns `true` if an operation was invoked.
    pub fn activate(&self, store: &mut CounterStore) -> bool {
        match self.action {
            Some(ButtonAction::Increase) => store.increment(),
            Some(ButtonAction::Decrease) => store.decrement(),
            None => {
                tracing::debug!(tag = %self.tag, label = %self.label, "unrecognized button tag, ignoring activation");
                return false;
            }
        }
        true
    }

    pub fn widget(&self, focused: bool) -> Paragraph<'_> {
        let (text_style, border_style) = if focused {
            (
                Style::default()
                    .fg(ACCENT)
                    .bg(ACTIVE_HIGHLIGHT)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(BUTTON_FOCUSED),
            )
        } else {
            (
                Style::default().fg(HEADER_TEXT),
                Style::default().fg(BUTTON_BORDER),
            )
        };

        Paragraph::new(self.label.as_str())
            .style(text_style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(ButtonAction::from_tag("increase"), Some(ButtonAction::Increase));
        assert_eq!(ButtonAction::from_tag("decrease"), Some(ButtonAction::Decrease));
        assert_eq!(ButtonAction::from_tag("Increase"), None);
        assert_eq!(ButtonAction::from_tag(""), None);
    }

    #[test]
    fn tag_round_trips_through_action() {
        for action in [ButtonAction::Increase, ButtonAction::Decrease] {
            assert_eq!(ButtonAction::from_tag(action.tag()), Some(action));
        }
    }

    #[test]
    fn unknown_tag_keeps_tag_but_has_no_action() {
        let button = CounterButton::new("Reset", "reset");
        assert_eq!(button.tag(), "reset");
        assert_eq!(button.label(), "Reset");
        assert!(button.action().is_none());
    }
}
