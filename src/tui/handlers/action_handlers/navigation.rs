// Navigation action handlers

use crate::tui::AppState;
use anyhow::Result;

/// Handle navigate up action
pub fn handle_navigate_up(state: &mut AppState) -> Result<bool> {
    state.selected = state.selected.saturating_sub(1);
    Ok(false)
}

/// Handle navigate down action
pub fn handle_navigate_down(state: &mut AppState) -> Result<bool> {
    if state.selected + 1 < state.section.len() {
        state.selected += 1;
    }
    Ok(false)
}

/// Handle jump to first element
pub fn handle_jump_to_first(state: &mut AppState) -> Result<bool> {
    state.selected = 0;
    Ok(false)
}

/// Handle jump to last element
pub fn handle_jump_to_last(state: &mut AppState) -> Result<bool> {
    state.selected = state.section.len().saturating_sub(1);
    Ok(false)
}
