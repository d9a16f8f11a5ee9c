use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of one product card including its border.
pub const CARD_WIDTH: u16 = 32;
/// Height of one product card including its border.
pub const CARD_HEIGHT: u16 = 7;

/// Splits the screen into header, controls, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);
    (chunks[0], chunks[1], chunks[2], chunks[3])
}

/// Number of card columns and fully visible card rows for `body`.
pub fn grid_shape(body: Rect) -> (usize, usize) {
    let columns = (body.width / CARD_WIDTH).max(1) as usize;
    let rows = (body.height / CARD_HEIGHT).max(1) as usize;
    (columns, rows)
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
