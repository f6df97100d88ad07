use crate::ui::countries::CountriesState;
use crate::ui::layout::country_regions;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_PENDING};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_countries(frame: &mut Frame, area: Rect, state: &CountriesState, offset: usize) {
    let (status_area, list_area) = country_regions(area);

    let mut status = Vec::new();
    if state.is_loading() {
        status.push(Span::styled(" loading...", Style::default().fg(STATUS_PENDING)));
    }
    if let Some(error) = state.error_text() {
        status.push(Span::styled(format!(" {error}"), Style::default().fg(STATUS_ERROR)));
    }
    frame.render_widget(Paragraph::new(Line::from(status)), status_area);

    let title = if state.is_empty() {
        " Countries ".to_string()
    } else {
        format!(" Countries {}-{} of {} ", state.min, state.max, state.len())
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(MUTED_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(list_area);

    let lines: Vec<Line> = state
        .visible()
        .iter()
        .skip(offset)
        .take(usize::from(inner.height))
        .map(|country| {
            Line::from(vec![
                Span::raw(format!("{} ", country.emoji)),
                Span::styled(country.name.clone(), Style::default().fg(HEADER_TEXT)),
                Span::styled(
                    format!("  {} · {}", country.code, country.continent.name),
                    Style::default().fg(MUTED_TEXT),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), list_area);
}
