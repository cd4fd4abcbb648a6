use crate::config::Config;
use crate::ui::button::CounterButton;
use crate::ui::counter::CounterStore;
use crate::ui::view::{ButtonSlot, CounterView};

/// Top-level UI state: the store, the view bound to it, and loop control.
pub struct App {
    should_quit: bool,
    title: String,
    store: CounterStore,
    view: CounterView,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let buttons = &config.buttons;
        let increase = CounterButton::new(&buttons.increase_label, &buttons.increase_action);
        let decrease = CounterButton::new(&buttons.decrease_label, &buttons.decrease_action);
        for button in [&increase, &decrease] {
            if button.action().is_none() {
                tracing::warn!(
                    tag = %button.tag(),
                    label = %button.label(),
                    "button has an unrecognized action tag and will do nothing"
                );
            }
        }

        let mut store = CounterStore::new();
        let mut view = CounterView::new(increase, decrease);
        view.bind(&mut store);

        Self {
            should_quit: false,
            title: config.ui.title.clone(),
            store,
            view,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn store(&self) -> &CounterStore {
        &self.store
    }

    pub fn view(&self) -> &CounterView {
        &self.view
    }

    pub fn value(&self) -> i64 {
        self.store.get_value()
    }

    pub fn press(&mut self, slot: ButtonSlot) -> bool {
        self.view.focus(slot);
        self.view.activate(slot, &mut self.store)
    }

    pub fn press_focused(&mut self) -> bool {
        self.view.activate_focused(&mut self.store)
    }

    pub fn reset(&mut self) {
        self.store.set_value(0);
    }

    pub fn focus_next(&mut self) {
        self.view.focus_next();
    }

    pub fn focus_prev(&mut self) {
        self.view.focus_prev();
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        tracing::debug!(cols, rows, "terminal resized");
        self.view.mark_dirty();
    }

    pub fn needs_redraw(&self) -> bool {
        self.view.is_dirty()
    }

    pub fn mark_drawn(&self) {
        self.view.mark_clean();
    }
}
