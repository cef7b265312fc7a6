//! Keyboard event handling tests
//!
//! Tests for keyboard input handling including quit keys, the palette
//! shortcut, search input, navigation and focus toggling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use newsdeck::focus::MemoryFocusStore;
use newsdeck::source::{builtin_sources, parse_sources, Catalog};
use newsdeck::ui::{handle_key, App, View};

/// Helper to create a key event
fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_key(app, key(KeyCode::Char(c)));
    }
}

/// Helper to create a test app with two sources
fn create_test_app() -> App {
    let sources = parse_sources(
        r#"{
            "a": { "name": "Alpha", "sort_key": "a" },
            "b": { "name": "Beta", "sort_key": "b" }
        }"#,
    )
    .unwrap();
    App::new(Catalog::build(&sources), Box::new(MemoryFocusStore::new())).unwrap()
}

#[test]
fn test_quit_with_q_key() {
    let mut app = create_test_app();
    assert!(!app.should_quit);

    handle_key(&mut app, key(KeyCode::Char('q')));
    assert!(app.should_quit);
}

#[test]
fn test_quit_with_capital_q_key() {
    let mut app = create_test_app();

    handle_key(&mut app, key(KeyCode::Char('Q')));
    assert!(app.should_quit);
}

#[test]
fn test_ctrl_c_quits_from_palette() {
    let mut app = create_test_app();
    app.open_palette();

    handle_key(&mut app, ctrl('c'));
    assert!(app.should_quit);
}

#[test]
fn test_q_is_search_input_in_palette() {
    let mut app = create_test_app();
    app.open_palette();

    handle_key(&mut app, key(KeyCode::Char('q')));
    assert!(!app.should_quit);
    assert_eq!(app.search_query, "q");
}

#[test]
fn test_ctrl_k_toggles_palette() {
    let mut app = create_test_app();
    assert_eq!(app.view, View::Focused);

    handle_key(&mut app, ctrl('k'));
    assert_eq!(app.view, View::Palette);

    handle_key(&mut app, ctrl('k'));
    assert_eq!(app.view, View::Focused);
}

#[test]
fn test_slash_opens_palette_and_esc_closes() {
    let mut app = create_test_app();

    handle_key(&mut app, key(KeyCode::Char('/')));
    assert!(app.palette_open());

    handle_key(&mut app, key(KeyCode::Esc));
    assert!(!app.palette_open());
}

#[test]
fn test_typing_filters_and_enter_toggles_focus() {
    let mut app = create_test_app();
    handle_key(&mut app, ctrl('k'));

    type_text(&mut app, "Beta");
    assert_eq!(app.results.len(), 1);

    handle_key(&mut app, key(KeyCode::Enter));
    assert!(app.is_focused("b"));
    assert!(!app.is_focused("a"));

    handle_key(&mut app, key(KeyCode::Enter));
    assert!(!app.is_focused("b"));
}

#[test]
fn test_backspace_edits_query() {
    let mut app = create_test_app();
    handle_key(&mut app, ctrl('k'));

    type_text(&mut app, "Bx");
    handle_key(&mut app, key(KeyCode::Backspace));
    assert_eq!(app.search_query, "B");
}

#[test]
fn test_arrow_keys_move_highlight_in_palette() {
    let mut app = create_test_app();
    handle_key(&mut app, ctrl('k'));

    handle_key(&mut app, key(KeyCode::Down));
    assert_eq!(app.selection().current(), "b");

    handle_key(&mut app, key(KeyCode::Up));
    assert_eq!(app.selection().current(), "a");

    handle_key(&mut app, ctrl('n'));
    assert_eq!(app.selection().current(), "b");

    handle_key(&mut app, ctrl('p'));
    assert_eq!(app.selection().current(), "a");
}

#[test]
fn test_f_toggles_selected_source_in_main_view() {
    let mut app = create_test_app();

    handle_key(&mut app, key(KeyCode::Char('f')));
    assert!(app.is_focused("a"));

    handle_key(&mut app, key(KeyCode::Char('f')));
    assert!(!app.is_focused("a"));
}

#[test]
fn test_help_modal_swallows_keys() {
    let mut app = create_test_app();

    handle_key(&mut app, key(KeyCode::Char('?')));
    assert!(app.show_help);

    handle_key(&mut app, key(KeyCode::Char('q')));
    assert!(!app.should_quit);

    handle_key(&mut app, key(KeyCode::Esc));
    assert!(!app.show_help);
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = create_test_app();
    let mut release = key(KeyCode::Char('q'));
    release.kind = KeyEventKind::Release;

    handle_key(&mut app, release);
    assert!(!app.should_quit);
}

#[test]
fn test_pinyin_search_over_builtin_catalog() {
    let catalog = Catalog::build(&builtin_sources().unwrap());
    let mut app = App::new(catalog, Box::new(MemoryFocusStore::new())).unwrap();
    handle_key(&mut app, ctrl('k'));

    type_text(&mut app, "zhihu");
    assert_eq!(app.selection().current(), "zhihu");

    handle_key(&mut app, key(KeyCode::Enter));
    assert!(app.is_focused("zhihu"));
}
