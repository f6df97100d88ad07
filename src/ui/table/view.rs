use crate::api::Status;
use crate::ui::table::{TableIntent, TableState};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
    STATUS_PENDING,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

const COLUMNS: [&str; 6] = ["id", "title", "firstName", "lastName", "email", "picture"];

pub fn render_table(frame: &mut Frame, area: Rect, state: &TableState) {
    let [status_area, table_area, nav_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .areas(area);

    frame.render_widget(status_line(state), status_area);
    frame.render_widget(users_table(state), table_area);
    frame.render_widget(navigation(state), nav_area);
}

fn status_line(state: &TableState) -> Paragraph<'static> {
    let status_color = match state.status {
        Status::Resolved => STATUS_OK,
        Status::Rejected => STATUS_ERROR,
        Status::Pending => STATUS_PENDING,
        Status::Idle => MUTED_TEXT,
    };
    let text = Style::default().fg(HEADER_TEXT);
    let line = Line::from(vec![
        Span::styled(" Status: ", text),
        Span::styled(state.status.as_str(), Style::default().fg(status_color)),
        Span::styled(
            format!(
                "   nextVisitedPage: {}   previousVisitedPage: {}   page: {}",
                pointer(state.next_visited_page),
                pointer(state.previous_visited_page),
                state.page
            ),
            text,
        ),
    ]);
    let error = Line::styled(
        format!(" error: {}", state.error_text().unwrap_or_default()),
        Style::default().fg(STATUS_ERROR),
    );
    Paragraph::new(vec![line, error]).wrap(Wrap { trim: false })
}

fn pointer(page: Option<u32>) -> String {
    page.map_or_else(|| "-".to_string(), |p| p.to_string())
}

fn users_table(state: &TableState) -> Table<'static> {
    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c)))
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = state
        .page_data
        .as_ref()
        .map(|page| page.data.as_slice())
        .unwrap_or(&[])
        .iter()
        .map(|user| {
            Row::new(vec![
                Cell::from(user.id.clone()),
                Cell::from(user.title.clone()),
                Cell::from(user.first_name.clone()),
                Cell::from(user.last_name.clone()),
                Cell::from(user.email.clone()),
                Cell::from(if user.has_picture() { "✔" } else { "❌" }),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(26),
            Constraint::Length(6),
            Constraint::Fill(1),
            Constraint::Fill(1),
            Constraint::Fill(2),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .style(Style::default().fg(HEADER_TEXT))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn navigation(state: &TableState) -> Paragraph<'static> {
    let buttons = [
        ("⏮", Some(TableIntent::FirstPage)),
        ("⏪", Some(TableIntent::PreviousPage)),
        ("Prev", Some(TableIntent::VisitedPreviousPage)),
        ("", None),
        ("Next", Some(TableIntent::VisitedNextPage)),
        ("⏩", Some(TableIntent::NextPage)),
        ("⏭", Some(TableIntent::LastPage)),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (label, intent) in buttons {
        match intent {
            Some(intent) => {
                let style = if state.accepts(&intent) {
                    Style::default().fg(HEADER_TEXT)
                } else {
                    Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM)
                };
                spans.push(Span::styled(format!("[{label}]"), style));
            }
            None => spans.push(Span::styled(
                format!(" {:>3} ", state.page_input),
                Style::default().fg(ACCENT).bg(ACTIVE_HIGHLIGHT),
            )),
        }
        spans.push(Span::raw("  "));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
