use crate::page::Storefront;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::layout::{grid_shape, layout_regions};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::layout::Rect;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;

/// Runs the interactive storefront until the user quits.
pub fn run(storefront: Storefront, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let mut app = App::new(storefront, runtime);
    let events = EventHandler::new(tick_rate);

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        apply_layout(&mut app, cols, rows);
    }
    app.start();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => apply_layout(&mut app, cols, rows),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => app.on_tick(),
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

fn apply_layout(app: &mut App, cols: u16, rows: u16) {
    let (_, _, body, _) = layout_regions(Rect::new(0, 0, cols, rows));
    let (columns, visible_rows) = grid_shape(body);
    app.on_layout(columns, visible_rows);
}
