// Element editing action handlers

use crate::constants::WIDTH_STEP;
use crate::models::palette;
use crate::tui::AppState;
use anyhow::Result;
use tracing::info;

/// Handle add element action
pub fn handle_add_element(state: &mut AppState) -> Result<bool> {
    if let Some(id) = state.section.add_element() {
        state.select_id(id);
        if let Some(element) = state.section.get(id) {
            let message = format!("Added {} ({:.2} m)", element.label, element.width);
            info!(kind = %element.kind, "element added");
            state.set_status(message);
        }
    }
    Ok(false)
}

fn announce_kind(state: &mut AppState) {
    if let Some(entry) = palette::lookup(state.section.selected_kind()) {
        state.set_status(format!("Next element: {}", entry.label));
    }
}

/// Handle next palette kind action
pub fn handle_next_kind(state: &mut AppState) -> Result<bool> {
    let kind = state.section.selected_kind().next();
    state.section.select_kind(kind);
    announce_kind(state);
    Ok(false)
}

/// Handle previous palette kind action
pub fn handle_previous_kind(state: &mut AppState) -> Result<bool> {
    let kind = state.section.selected_kind().previous();
    state.section.select_kind(kind);
    announce_kind(state);
    Ok(false)
}

fn nudge_selected(state: &mut AppState, delta: f64) {
    let Some(id) = state.selected_id() else {
        return;
    };
    state.section.nudge_width(id, delta);
    if let Some(element) = state.section.get(id) {
        let message = format!("{}: {:.2} m", element.label, element.width);
        state.set_status(message);
    }
}

/// Handle increase width action
pub fn handle_increase_width(state: &mut AppState) -> Result<bool> {
    nudge_selected(state, WIDTH_STEP);
    Ok(false)
}

/// Handle decrease width action
pub fn handle_decrease_width(state: &mut AppState) -> Result<bool> {
    nudge_selected(state, -WIDTH_STEP);
    Ok(false)
}

/// Handle remove element action
pub fn handle_remove_element(state: &mut AppState) -> Result<bool> {
    if let Some(id) = state.selected_id() {
        if let Some(removed) = state.section.remove_element(id) {
            info!(kind = %removed.kind, "element removed");
            state.clamp_selection();
            state.set_status(format!("Removed {}", removed.label));
        }
    }
    Ok(false)
}

/// Handle toggle drag action
///
/// The first press picks up the highlighted element; the next press drops it
/// onto whatever row is highlighted then. Dropping onto itself cancels.
pub fn handle_toggle_drag(state: &mut AppState) -> Result<bool> {
    let Some(target) = state.selected_id() else {
        return Ok(false);
    };

    match state.section.drag_source() {
        None => {
            state.section.begin_drag(target);
            if let Some(element) = state.selected_element() {
                let message = format!(
                    "Moving {} - select a row and press Space to drop, Esc to cancel",
                    element.label
                );
                state.set_status(message);
            }
        }
        Some(source) if source == target => {
            state.section.cancel_drag();
            state.set_status("Drag cancelled");
        }
        Some(source) => {
            state.section.drop_on(target);
            state.select_id(source);
            state.set_status("Element moved");
        }
    }
    Ok(false)
}

/// Handle move element up (left) action
pub fn handle_move_element_up(state: &mut AppState) -> Result<bool> {
    if let Some(id) = state.selected_id() {
        state.section.move_left(id);
        state.select_id(id);
    }
    Ok(false)
}

/// Handle move element down (right) action
pub fn handle_move_element_down(state: &mut AppState) -> Result<bool> {
    if let Some(id) = state.selected_id() {
        state.section.move_right(id);
        state.select_id(id);
    }
    Ok(false)
}
