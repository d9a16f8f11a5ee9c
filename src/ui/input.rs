use crate::ui::app::App;
use crate::ui::controls::{ControlsIntent, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if key.code == KeyCode::Tab {
        app.dispatch_controls(ControlsIntent::FocusNext);
        return;
    }

    if app.controls().menu_open {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('n')) {
            app.toggle_menu();
        }
        return;
    }

    match app.controls().focus {
        Focus::Search => match key.code {
            KeyCode::Enter => app.submit_search(),
            KeyCode::Esc => app.dispatch_controls(ControlsIntent::FocusGrid),
            KeyCode::Backspace => app.dispatch_controls(ControlsIntent::Backspace),
            KeyCode::Char(ch) => app.dispatch_controls(ControlsIntent::Type(ch)),
            _ => {}
        },
        Focus::Categories => match key.code {
            KeyCode::Left | KeyCode::Up => app.move_category(false),
            KeyCode::Right | KeyCode::Down => app.move_category(true),
            KeyCode::Enter => app.select_category(),
            KeyCode::Esc => app.dispatch_controls(ControlsIntent::FocusGrid),
            _ => {}
        },
        Focus::Grid => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
            KeyCode::Char('/') => app.dispatch_controls(ControlsIntent::FocusSearch),
            KeyCode::Char('m') => app.load_more(),
            KeyCode::Char('c') => app.clear_filters(),
            KeyCode::Char('n') => app.toggle_menu(),
            KeyCode::Up | KeyCode::Char('k') => app.scroll(false),
            KeyCode::Down | KeyCode::Char('j') => app.scroll(true),
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
