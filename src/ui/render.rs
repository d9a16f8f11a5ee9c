use crate::ui::app::App;
use crate::ui::controls::Focus;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, grid_shape, layout_regions, CARD_HEIGHT, CARD_WIDTH};
use crate::ui::theme::{
    BRAND_INDIGO, FOCUS_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER,
    SALE_RED, STAR_YELLOW,
};
use crate::view::{CardView, GridView};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, controls, body, footer) = layout_regions(area);
    let page = app.page();

    frame.render_widget(Header::new().widget(page.cart_count, page.loading), header);
    draw_controls(frame, app, controls);
    frame.render_widget(Clear, body);
    draw_grid(frame, app, body);
    frame.render_widget(Footer::new().widget(footer, page.view.limit()), footer);

    if app.controls().menu_open {
        draw_menu(frame, app, body);
    }
}

fn focus_block(title: &'static str, focused: bool) -> Block<'static> {
    let mut block = Block::default()
        .title(Span::styled(title, Style::default().fg(BRAND_INDIGO)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    if focused {
        block = block
            .border_style(Style::default().fg(POPUP_BORDER))
            .style(Style::default().bg(FOCUS_HIGHLIGHT));
    }
    block
}

fn draw_controls(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);
    let controls = app.controls();
    let text_style = Style::default().fg(HEADER_TEXT);

    let category = Paragraph::new(Line::from(vec![
        Span::styled("◀ ", Style::default().fg(MUTED_TEXT)),
        Span::styled(app.category_label().to_string(), text_style),
        Span::styled(" ▶", Style::default().fg(MUTED_TEXT)),
    ]))
    .block(focus_block(" Category ", controls.focus == Focus::Categories));
    frame.render_widget(category, chunks[0]);

    let mut search_spans = vec![Span::styled(controls.search_input.clone(), text_style)];
    if controls.focus == Focus::Search {
        search_spans.push(Span::styled("_", Style::default().fg(BRAND_INDIGO)));
    } else if controls.search_input.is_empty() {
        search_spans.push(Span::styled(
            "Search products",
            Style::default().fg(MUTED_TEXT),
        ));
    }
    let search = Paragraph::new(Line::from(search_spans))
        .block(focus_block(" Search ", controls.focus == Focus::Search));
    frame.render_widget(search, chunks[1]);
}

fn draw_grid(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let page = app.page();
    let cards = match &page.grid {
        GridView::Products(cards) => cards,
        GridView::Blank => {
            if page.loading {
                draw_message(frame, body, "Loading...", Style::default().fg(MUTED_TEXT));
            }
            return;
        }
        grid @ (GridView::NoResults | GridView::Failed) => {
            let color = if matches!(grid, GridView::Failed) {
                SALE_RED
            } else {
                MUTED_TEXT
            };
            if let Some(message) = grid.message() {
                draw_message(frame, body, message, Style::default().fg(color));
            }
            return;
        }
    };

    let (columns, rows) = grid_shape(body);
    let first = app.controls().scroll * columns;
    for (index, card) in cards.iter().skip(first).take(columns * rows).enumerate() {
        let column = (index % columns) as u16;
        let row = (index / columns) as u16;
        let x = body.x + column * CARD_WIDTH;
        let y = body.y + row * CARD_HEIGHT;
        let rect = Rect {
            x,
            y,
            width: CARD_WIDTH.min(body.right().saturating_sub(x)),
            height: CARD_HEIGHT.min(body.bottom().saturating_sub(y)),
        };
        frame.render_widget(card_widget(card), rect);
    }
}

fn draw_message(frame: &mut Frame<'_>, body: Rect, message: &'static str, style: Style) {
    let area = centered_rect_by_size(body, body.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(message, style))).alignment(Alignment::Center),
        area,
    );
}

fn card_widget(card: &CardView) -> Paragraph<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let muted = Style::default().fg(MUTED_TEXT);

    let mut stars = vec![
        Span::styled(
            "★".repeat(usize::from(card.stars.filled())),
            Style::default().fg(STAR_YELLOW),
        ),
        Span::styled("☆".repeat(usize::from(card.stars.empty())), muted),
    ];
    if card.on_sale {
        stars.push(Span::raw("  "));
        stars.push(Span::styled(
            "SALE",
            Style::default().fg(SALE_RED).add_modifier(Modifier::BOLD),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            card.title.clone(),
            text_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(stars),
        Line::from(Span::styled(format!("({} in stock)", card.stock), muted)),
        Line::from(Span::styled(
            format!("${}", card.price),
            Style::default().fg(BRAND_INDIGO).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!("Rating {}", card.rating), muted)),
    ];

    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(format!(" #{} ", card.id), muted))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn draw_menu(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let lines = vec![
        Line::from(Span::styled("Home", text_style)),
        Line::from(Span::styled("Shop", text_style)),
        Line::from(Span::styled(
            format!("Cart ({})", app.page().cart_count),
            text_style,
        )),
        Line::from(""),
        Line::from(Span::styled("Esc/n: Close", Style::default().fg(MUTED_TEXT))),
    ];

    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4;
    let height = lines.len() as u16 + 2;
    let area = centered_rect_by_size(body, width.max(24), height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled(" Menu ", Style::default().fg(BRAND_INDIGO)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
