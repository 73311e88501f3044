use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, MouseEvent, MouseEventKind};

use crate::app::App;

/// File written by the export key.
pub const EXPORT_FILE: &str = "moonitor_dashboard.html";

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // If detail overlay is shown, handle overlay-specific keys
    if app.show_detail_overlay {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('i') => {
                app.close_overlay();
            }
            KeyCode::Char('q') => app.quit(),
            // Step through rows while the overlay is open
            KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),

        // Filter controls
        KeyCode::Char('d') => app.cycle_decision(),
        KeyCode::Char('c') => app.cycle_channel(),
        KeyCode::Char('m') => app.cycle_min_confidence(),
        KeyCode::Enter | KeyCode::Char('a') => app.apply_filters(),
        KeyCode::Char('x') => app.clear_filters(),

        // Pagination
        KeyCode::Right | KeyCode::Char('n') => app.next_page(),
        KeyCode::Left | KeyCode::Char('p') => app.prev_page(),

        // Row selection
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Char('i') => app.enter_detail(),

        KeyCode::Char('r') => {
            app.reload();
            app.set_status_message("Reloading...".to_string());
        }

        KeyCode::Char('?') => app.toggle_help(),

        KeyCode::Char('e') => {
            let export_path = PathBuf::from(EXPORT_FILE);
            match app.export_html(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        _ => {}
    }
}

/// Handle mouse events
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::Loader;
    use crate::testing::FakeApi;
    use crate::ui::Theme;
    use crossterm::event::KeyModifiers;
    use std::sync::Arc;
    use tokio::runtime::Handle;

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app() -> App {
        let loader = Loader::new(Arc::new(FakeApi::default()), Handle::current());
        App::new(loader, 20, Duration::from_secs(3600), Theme::dark())
    }

    #[tokio::test]
    async fn test_filter_keys_edit_controls_only() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('m'));

        let controls = app.controller.controls();
        assert_eq!(controls.decision, "buy");
        assert_eq!(controls.min_confidence, "0.5");
        // Nothing is applied until the apply key
        assert!(app.controller.filters().is_empty());

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.controller.filters().len(), 2);

        press(&mut app, KeyCode::Char('x'));
        assert!(app.controller.filters().is_empty());
        assert_eq!(app.controller.controls().decision, "");
    }

    #[tokio::test]
    async fn test_help_swallows_next_key() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(app.running);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[tokio::test]
    async fn test_escape_closes_detail_overlay() {
        let mut app = app();
        app.show_detail_overlay = true;
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_detail_overlay);
    }
}
