//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] actions.  Adding a new keybinding is
//! a single match arm in [`handle_key_event`].
//!
//! ## For contributors
//!
//! To add a new keybinding:
//!
//! 1. Add a method on [`App`] for the action (if one doesn't exist).
//! 2. Add a `KeyCode` match arm in [`handle_key_event`] that calls it.
//! 3. Update the hint line in [`crate::ui`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// Process a single key event, updating app state accordingly.
///
/// Only reacts to key-press events (ignoring release / repeat) so that each
/// physical keypress triggers exactly one action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Left | KeyCode::Char('h') => app.select_newer(),
        KeyCode::Right | KeyCode::Char('l') => app.select_older(),
        KeyCode::Char('o') | KeyCode::Enter => app.toggle_link(),
        KeyCode::Char('r') => app.clock.request_now(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poll::RefreshClock;
    use crate::source::FeedItem;
    use crossterm::event::{KeyEventState, KeyModifiers};
    use std::time::{Duration, Instant};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_items() -> App {
        let mut app = App::new(RefreshClock::new(Duration::from_secs(60)));
        let items = ["A", "B", "C"]
            .iter()
            .map(|t| FeedItem::new(*t, "", "").unwrap())
            .collect();
        app.apply_fetch(Ok(items), Instant::now());
        app
    }

    #[test]
    fn arrows_navigate() {
        let mut app = app_with_items();
        handle_key_event(&mut app, press(KeyCode::Right));
        assert_eq!(app.store.index(), 1);
        handle_key_event(&mut app, press(KeyCode::Left));
        assert_eq!(app.store.index(), 0);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = app_with_items();
        let release = KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key_event(&mut app, release);
        assert_eq!(app.store.index(), 0);
    }

    #[test]
    fn o_toggles_link_and_q_quits() {
        let mut app = app_with_items();
        handle_key_event(&mut app, press(KeyCode::Char('o')));
        assert!(app.show_link);
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(app.quit);
    }

    #[test]
    fn r_forces_refresh() {
        let mut app = app_with_items();
        assert!(!app.clock.is_due(Instant::now()));
        handle_key_event(&mut app, press(KeyCode::Char('r')));
        assert!(app.clock.is_due(Instant::now()));
    }
}
