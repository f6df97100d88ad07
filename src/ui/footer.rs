use crate::ui::app::Tab;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer {
    tab: Tab,
}

impl Footer {
    pub fn new(tab: Tab) -> Self {
        Self { tab }
    }

    fn hints(&self) -> &'static str {
        match self.tab {
            Tab::Cards => " ←/→: Scroll │ r: Retry │ Tab/1-3: Switch │ q: Quit",
            Tab::Table => {
                " Home/End: First/Last │ ←/→: Page │ p/n: Visited │ 0-9 Enter: Go to │ Tab: Switch │ q: Quit"
            }
            Tab::Countries => " ↑/↓ PgUp/PgDn: Scroll │ r: Re-fetch │ Tab/1-3: Switch │ q: Quit",
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = self.hints();
        let version = format!("v{} ", VERSION);

        // Padding by char count, not byte count
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
