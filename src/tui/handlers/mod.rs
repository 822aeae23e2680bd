//! Input handler modules for different TUI contexts.

pub mod action_handlers;
pub mod actions;
pub mod mouse;
pub mod popups;

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::tui::AppState;

// Re-export handler functions
pub use actions::dispatch_action;
pub use mouse::handle_mouse_input;
pub use popups::handle_popup_input;

/// Handle input for main UI
///
/// Keys without a binding in the `"main"` context are ignored.
pub fn handle_main_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    match state.shortcuts.lookup("main", key) {
        Some(action) => dispatch_action(state, action),
        None => Ok(false),
    }
}
