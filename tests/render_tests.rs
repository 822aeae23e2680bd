//! Render smoke tests using ratatui's `TestBackend`.

mod fixtures;

use crossterm::event::KeyCode;
use fixtures::*;
use ratatui::{backend::TestBackend, Terminal};
use street_section::models::StreetSection;
use street_section::tui::{handle_key_event, render, AppState};

/// Draws one frame and returns the screen as text, one line per row.
fn render_to_string(state: &AppState, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| render(f, state)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}

fn render_default(state: &AppState) -> String {
    render_to_string(state, VIEWPORT.width, VIEWPORT.height)
}

#[test]
fn test_main_screen() {
    let state = starter_state();
    let screen = render_default(&state);

    assert!(screen.contains("Street Section Builder"));
    assert!(screen.contains("Build a simple street profile"));
    assert!(screen.contains("Street setup"));
    assert!(screen.contains("Total street width: 16.00 m"));
    assert!(screen.contains("Used width: 13.20 m"));
    assert!(screen.contains("2.80 m remaining"));
    assert!(screen.contains("Elements (5)"));
    assert!(screen.contains("s: Simulate street"));
    assert!(screen.contains("Drag elements"));
    assert!(screen.contains("[x]"));
    assert!(screen.contains("Street preview"));
    assert!(screen.contains("Tip: adjust widths"));
}

#[test]
fn test_element_rows_show_widths() {
    let state = starter_state();
    let screen = render_default(&state);

    assert!(screen.contains("Bike lane"));
    assert!(screen.contains("1.80 m"));
    assert!(screen.contains("3.20 m"));
}

#[test]
fn test_preview_shows_selected_tooltip() {
    let mut state = starter_state();
    handle_key_event(&mut state, key(KeyCode::Down)).unwrap();
    let screen = render_default(&state);
    assert!(screen.contains("Bike lane: 1.80 m"));
}

#[test]
fn test_over_limit_message() {
    let state = state_for(StreetSection::starter(10.0));
    let screen = render_default(&state);
    assert!(screen.contains("Over by 3.20 m"));
    assert!(!screen.contains("remaining"));
}

#[test]
fn test_simulation_screen() {
    let mut state = starter_state();
    handle_key_event(&mut state, key(KeyCode::Char('s'))).unwrap();
    let screen = render_default(&state);

    assert!(screen.contains("Street simulation"));
    assert!(screen.contains("Live simulation"));
    assert!(screen.contains("s: Back to section"));
    assert!(!screen.contains("Street preview"));
}

#[test]
fn test_empty_section_screen() {
    let state = state_for(StreetSection::new(16.0));
    let screen = render_default(&state);

    assert!(screen.contains("No elements yet"));
    assert!(screen.contains("Nothing to preview yet"));
    assert!(screen.contains("16.00 m remaining"));
}

#[test]
fn test_popups_render() {
    let mut state = starter_state();

    handle_key_event(&mut state, key(KeyCode::Char('t'))).unwrap();
    let screen = render_default(&state);
    assert!(screen.contains("Add element"));
    assert!(screen.contains("Median / buffer"));
    handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();

    handle_key_event(&mut state, key(KeyCode::Enter)).unwrap();
    let screen = render_default(&state);
    assert!(screen.contains("Sidewalk width"));
    handle_key_event(&mut state, key(KeyCode::Esc)).unwrap();

    handle_key_event(&mut state, key(KeyCode::Char('?'))).unwrap();
    let screen = render_default(&state);
    assert!(screen.contains("NAVIGATION"));
    assert!(screen.contains("Select previous element"));
}

#[test]
fn test_narrow_list_hides_remove_buttons() {
    let state = starter_state();
    let screen = render_to_string(&state, 30, 30);
    assert!(!screen.contains("[x]"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut state = starter_state();
    render_to_string(&state, 30, 10);

    handle_key_event(&mut state, key(KeyCode::Char('s'))).unwrap();
    render_to_string(&state, 30, 10);
    render_to_string(&state, 1, 1);
}
