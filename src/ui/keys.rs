//! # Key Handling
//!
//! Maps terminal key events onto [`App`] operations.
//!
//! ## Palette
//! - type to search, `Backspace` to delete
//! - `Up` / `Down` (or `Ctrl+p` / `Ctrl+n`) - move the highlight
//! - `Enter` - toggle focus of the highlighted source
//! - `Esc` / `Ctrl+k` - close the palette
//!
//! ## Focused list
//! - `/` / `Ctrl+k` - open the palette
//! - `j` / `k` / arrows - move through focused sources
//! - `f` / `Enter` - toggle focus of the selected source
//! - `?` - show/hide help
//! - `q` / `Q` - quit

use super::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && matches!(key.code, KeyCode::Char('c')) {
        app.should_quit = true;
        return;
    }

    if ctrl && matches!(key.code, KeyCode::Char('k') | KeyCode::Char('K')) {
        app.toggle_palette();
        return;
    }

    // Help modal swallows everything but its own close keys
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.toggle_help();
        }
        return;
    }

    if app.palette_open() {
        match key.code {
            KeyCode::Esc => app.close_palette(),
            KeyCode::Down => app.next(),
            KeyCode::Up => app.previous(),
            KeyCode::Char('n') if ctrl => app.next(),
            KeyCode::Char('p') if ctrl => app.previous(),
            KeyCode::Enter => app.toggle_highlighted_focus(),
            KeyCode::Backspace => app.search_pop_char(),
            KeyCode::Char(c) if !ctrl => app.search_push_char(c),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('/') => app.open_palette(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Down | KeyCode::Char('j') => app.next(),
        KeyCode::Up | KeyCode::Char('k') => app.previous(),
        KeyCode::Char('f') | KeyCode::Enter => app.toggle_selected_focus(),
        _ => {}
    }
}
