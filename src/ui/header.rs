use crate::ui::theme::{BRAND_INDIGO, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, SALE_RED};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, cart_count: usize, loading: bool) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Shop",
                Style::default().fg(BRAND_INDIGO).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("Cart ", text_style),
            Span::styled(
                format!("({})", cart_count),
                Style::default().fg(SALE_RED).add_modifier(Modifier::BOLD),
            ),
        ];
        if loading {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled("Loading...", text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
