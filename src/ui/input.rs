use crate::ui::app::{App, Tab};
use crate::ui::table::TableIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: isize = 3;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.request_quit();
            return;
        }
        KeyCode::Tab => {
            app.set_tab(app.tab().next());
            return;
        }
        KeyCode::BackTab => {
            app.set_tab(app.tab().previous());
            return;
        }
        KeyCode::F(n @ 1..=3) => {
            app.set_tab(Tab::ALL[usize::from(n - 1)]);
            return;
        }
        KeyCode::Char(ch @ '1'..='3') if app.tab() != Tab::Table => {
            app.set_tab(Tab::ALL[usize::from(ch as u8 - b'1')]);
            return;
        }
        _ => {}
    }

    // Digits on the table tab belong to the page field.
    match app.tab() {
        Tab::Cards => handle_cards_key(app, key),
        Tab::Table => handle_table_key(app, key),
        Tab::Countries => handle_countries_key(app, key),
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if app.tab() != Tab::Countries {
        return;
    }
    match mouse.kind {
        MouseEventKind::ScrollUp => app.scroll_countries(-WHEEL_STEP),
        MouseEventKind::ScrollDown => app.scroll_countries(WHEEL_STEP),
        _ => {}
    }
}

fn handle_cards_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left => app.shift_cards(-1),
        KeyCode::Right => app.shift_cards(1),
        KeyCode::Char('r') => app.request_cards(),
        _ => {}
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    let intent = match key.code {
        KeyCode::Home => TableIntent::FirstPage,
        KeyCode::Left => TableIntent::PreviousPage,
        KeyCode::Char('p') => TableIntent::VisitedPreviousPage,
        KeyCode::Char('n') => TableIntent::VisitedNextPage,
        KeyCode::Right => TableIntent::NextPage,
        KeyCode::End => TableIntent::LastPage,
        KeyCode::Char(ch) if ch.is_ascii_digit() => TableIntent::InputDigit(ch),
        KeyCode::Backspace => TableIntent::InputBackspace,
        KeyCode::Enter => {
            app.submit_page_input();
            return;
        }
        _ => return,
    };
    app.navigate_table(intent);
}

fn handle_countries_key(app: &mut App, key: KeyEvent) {
    let page = app.viewport() as isize;
    match key.code {
        KeyCode::Up => app.scroll_countries(-1),
        KeyCode::Down => app.scroll_countries(1),
        KeyCode::PageUp => app.scroll_countries(-page),
        KeyCode::PageDown => app.scroll_countries(page),
        KeyCode::Char('r') => app.request_countries(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
