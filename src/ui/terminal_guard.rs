use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use scopeguard::ScopeGuard;
use std::io::{self, Stdout};

/// Leaves raw mode and the alternate screen when dropped.
pub type TerminalGuard = ScopeGuard<(), fn(())>;

/// Enters raw mode and the alternate screen.
///
/// The guard is armed right after raw mode is enabled, so a failure in the
/// remaining setup still restores the terminal. A panic restores it too.
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = restore_guard(restore_on_drop);

    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;
    install_panic_hook();

    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

fn restore_guard(restore: fn(())) -> TerminalGuard {
    scopeguard::guard((), restore)
}

fn restore_on_drop(_: ()) {
    restore_terminal();
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = stdout.execute(LeaveAlternateScreen);
    let _ = stdout.execute(Show);
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static RESTORES: AtomicUsize = AtomicUsize::new(0);

    fn count_restore(_: ()) {
        RESTORES.fetch_add(1, Ordering::SeqCst);
    }

    fn setup(fail: bool) -> io::Result<TerminalGuard> {
        let guard = restore_guard(count_restore);
        if fail {
            return Err(io::Error::other("alternate screen unavailable"));
        }
        Ok(guard)
    }

    #[test]
    fn guard_restores_on_failed_setup_and_on_drop() {
        assert!(setup(true).is_err());
        assert_eq!(RESTORES.load(Ordering::SeqCst), 1);

        let guard = setup(false).unwrap();
        assert_eq!(RESTORES.load(Ordering::SeqCst), 1);
        drop(guard);
        assert_eq!(RESTORES.load(Ordering::SeqCst), 2);
    }
}
