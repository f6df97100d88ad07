use crate::ui::app::Tab;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Tabs};

/// Tab bar across the top of the screen.
pub struct Header {
    selected: Tab,
}

impl Header {
    pub fn new(selected: Tab) -> Self {
        Self { selected }
    }

    pub fn widget(&self) -> Tabs<'static> {
        let titles: Vec<Line> = Tab::ALL.iter().map(|tab| Line::from(tab.title())).collect();

        Tabs::new(titles)
            .select(self.selected.index())
            .style(Style::default().fg(HEADER_TEXT))
            .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            .divider(ratatui::text::Span::styled("│", Style::default().fg(MUTED_TEXT)))
            .block(
                Block::default()
                    .borders(Borders::TOP | Borders::BOTTOM)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
