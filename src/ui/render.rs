use crate::ui::app::{App, Tab};
use crate::ui::cards::render_cards;
use crate::ui::countries::render_countries;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::table::render_table;
use crate::ui::theme::STATUS_ERROR;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.tab()).widget(), header);
    frame.render_widget(Clear, body);

    match app.tab() {
        Tab::Cards => render_cards(frame, body, app.cards(), app.cards_offset()),
        Tab::Table => render_table(frame, body, app.table()),
        Tab::Countries => render_countries(frame, body, app.countries(), app.scroll_offset()),
    }

    if let Some(error) = app.last_command_error() {
        let line = Rect {
            y: body.y + body.height.saturating_sub(1),
            height: body.height.min(1),
            ..body
        };
        frame.render_widget(
            Paragraph::new(error.to_string()).style(Style::default().fg(STATUS_ERROR)),
            line,
        );
    }

    frame.render_widget(Footer::new(app.tab()).widget(footer), footer);
}
