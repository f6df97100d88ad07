use ratatui::layout::Rect;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Height of the country status line above the list.
pub const COUNTRY_STATUS_HEIGHT: u16 = 1;

/// Splits the body into the country status line and the bordered list.
pub fn country_regions(body: Rect) -> (Rect, Rect) {
    let status_height = COUNTRY_STATUS_HEIGHT.min(body.height);
    let status = Rect {
        height: status_height,
        ..body
    };
    let list = Rect {
        y: body.y + status_height,
        height: body.height.saturating_sub(status_height),
        ..body
    };
    (status, list)
}

/// Rows of country names that fit inside the bordered list for a terminal
/// of `cols` x `rows`.
pub fn country_viewport(cols: u16, rows: u16) -> usize {
    let body = body_rect(Rect {
        x: 0,
        y: 0,
        width: cols,
        height: rows,
    });
    let (_, list) = country_regions(body);
    usize::from(list.height.saturating_sub(2)).max(1)
}
