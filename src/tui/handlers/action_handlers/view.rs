// View and general action handlers

use crate::tui::AppState;
use anyhow::Result;
use tracing::info;

/// Handle toggle simulation action
pub fn handle_toggle_simulation(state: &mut AppState) -> Result<bool> {
    let simulating = state.section.toggle_simulation();
    state.sync_simulation();
    info!(simulating, "simulation mode changed");
    if simulating {
        state.set_status("Simulating street - press s to go back to the section");
    } else {
        state.set_status("Back to section");
    }
    Ok(false)
}

/// Handle cancel action (Escape)
pub fn handle_cancel(state: &mut AppState) -> Result<bool> {
    if state.section.drag_source().is_some() {
        state.section.cancel_drag();
        state.set_status("Drag cancelled");
    }
    Ok(false)
}

/// Handle quit action
pub fn handle_quit(state: &mut AppState) -> Result<bool> {
    state.should_quit = true;
    Ok(true)
}
