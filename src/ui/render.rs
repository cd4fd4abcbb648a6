use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.title());
    frame.render_widget(header_widget.widget(app.value()), header);
    frame.render_widget(Clear, body);
    app.view().render(frame, body, app.store());
    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer), footer);
}
