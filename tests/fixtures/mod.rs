//! Shared test fixtures for TUI and CLI integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use street_section::config::{Config, ThemeMode};
use street_section::models::StreetSection;
use street_section::tui::{compute_layout, list_rows_area, AppState};

/// Terminal size used by the flow and render tests.
pub const VIEWPORT: Rect = Rect {
    x: 0,
    y: 0,
    width: 120,
    height: 40,
};

/// Config with a fixed theme and no startup help overlay.
pub fn quiet_config() -> Config {
    let mut config = Config::new();
    config.ui.theme_mode = ThemeMode::Dark;
    config.ui.show_help_on_startup = false;
    config
}

/// App state over the starter section with a known viewport.
pub fn starter_state() -> AppState {
    state_for(StreetSection::default())
}

/// App state over `section` with a known viewport.
pub fn state_for(section: StreetSection) -> AppState {
    let mut state = AppState::new(section, quiet_config());
    state.viewport = VIEWPORT;
    state
}

/// Plain key press.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// Key press with modifiers.
pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

/// Screen position of the label area of element row `index` (no scrolling).
pub fn row_position(index: u16) -> (u16, u16) {
    let rows = list_rows_area(compute_layout(VIEWPORT).elements);
    (rows.x + 4, rows.y + index)
}

/// Screen position of the remove button of element row `index`.
pub fn remove_button_position(index: u16) -> (u16, u16) {
    let rows = list_rows_area(compute_layout(VIEWPORT).elements);
    (rows.x + rows.width - 2, rows.y + index)
}

/// Left-button mouse event at `(column, row)`.
pub fn mouse(kind: MouseEventKind, (column, row): (u16, u16)) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Left press at a position.
pub fn press_at(position: (u16, u16)) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), position)
}

/// Left release at a position.
pub fn release_at(position: (u16, u16)) -> MouseEvent {
    mouse(MouseEventKind::Up(MouseButton::Left), position)
}

/// Labels of the section's elements in order.
pub fn labels(state: &AppState) -> Vec<String> {
    state
        .section
        .elements()
        .iter()
        .map(|e| e.label.clone())
        .collect()
}
