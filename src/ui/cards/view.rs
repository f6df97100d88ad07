use crate::api::UserRecord;
use crate::ui::cards::CardsState;
use crate::ui::theme::{CARD_BACKGROUND, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const CARD_WIDTH: u16 = 36;
const CARD_HEIGHT: u16 = 6;

pub fn render_cards(frame: &mut Frame, area: Rect, state: &CardsState, offset: usize) {
    let outer = Block::default()
        .title(" Cards ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .style(Style::default().bg(CARD_BACKGROUND).fg(HEADER_TEXT));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    if state.response.is_pending() {
        frame.render_widget(Paragraph::new("loading"), inner);
        return;
    }

    let users = state.users();
    if users.is_empty() {
        let message = state
            .response
            .error_text()
            .unwrap_or_else(|| "No users.".to_string());
        frame.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(STATUS_ERROR))
                .wrap(Wrap { trim: false }),
            inner,
        );
        return;
    }

    let fits = usize::from((inner.width / CARD_WIDTH).max(1));
    let height = CARD_HEIGHT.min(inner.height);
    for (slot, user) in users.iter().skip(offset).take(fits).enumerate() {
        let card = Rect {
            x: inner.x + slot as u16 * CARD_WIDTH,
            y: inner.y,
            width: CARD_WIDTH.min(inner.width),
            height,
        };
        frame.render_widget(card_widget(user), card);
    }
}

fn card_widget(user: &UserRecord) -> Paragraph<'static> {
    let picture = user.picture.clone().unwrap_or_default();
    Paragraph::new(vec![
        Line::styled(
            capitalize_words(&user.display_name()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::from(user.email.clone()),
        Line::styled(picture, Style::default().fg(MUTED_TEXT)),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

/// Upper-cases the first letter of every word.
fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace() || ch == '.';
    }
    out
}

#[cfg(test)]
mod tests {
    use super::capitalize_words;

    #[test]
    fn capitalizes_title_and_names() {
        assert_eq!(capitalize_words("ms.sara andersen"), "Ms.Sara Andersen");
    }
}
