// Popup management action handlers

use crate::tui::AppState;
use anyhow::Result;

/// Handle open palette picker action
pub fn handle_open_palette_picker(state: &mut AppState) -> Result<bool> {
    state.open_palette_picker();
    state.set_status("Choose the element type to add - Enter: select, Esc: cancel");
    Ok(false)
}

/// Handle edit width action
pub fn handle_edit_width(state: &mut AppState) -> Result<bool> {
    if state.open_width_editor() {
        state.set_status("Type a width in meters - Enter: confirm, Esc: cancel");
    } else {
        state.set_status("No element selected");
    }
    Ok(false)
}

/// Handle edit width limit action
pub fn handle_edit_width_limit(state: &mut AppState) -> Result<bool> {
    state.open_limit_editor();
    state.set_status("Type the total street width - Enter: confirm, Esc: cancel");
    Ok(false)
}

/// Handle toggle help action
///
/// Only opens the overlay; once open it owns input and closes itself.
pub fn handle_toggle_help(state: &mut AppState) -> Result<bool> {
    state.open_help_overlay();
    Ok(false)
}
