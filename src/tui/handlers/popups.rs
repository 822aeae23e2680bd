//! Popup input handlers.

use anyhow::Result;
use crossterm::event::KeyEvent;
use tracing::info;

use crate::models::palette;
use crate::tui::{ActiveComponent, AppState, Component, ComponentEvent, EditTarget};

/// Handle input while a popup component is active
pub fn handle_popup_input(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    let event = match state.active_component.as_mut() {
        Some(ActiveComponent::PalettePicker(picker)) => picker.handle_input(key),
        Some(ActiveComponent::NumberInput(input)) => input.handle_input(key),
        Some(ActiveComponent::HelpOverlay(help)) => help.handle_input(key),
        None => {
            // Popup without a component: nothing can handle input, so close it
            state.close_component();
            return Ok(false);
        }
    };

    if let Some(event) = event {
        apply_component_event(state, event);
    }
    Ok(false)
}

/// Apply an event emitted by the active component and close it.
fn apply_component_event(state: &mut AppState, event: ComponentEvent) {
    match event {
        ComponentEvent::KindSelected(kind) => {
            state.section.select_kind(kind);
            if let Some(entry) = palette::lookup(kind) {
                state.set_status(format!("Next element: {}", entry.label));
            }
        }
        ComponentEvent::ValueSubmitted(value) => match state.edit_target {
            Some(EditTarget::ElementWidth(id)) => {
                state.section.update_width(id, value);
                if let Some(element) = state.section.get(id) {
                    let message = format!("{} width set to {:.2} m", element.label, element.width);
                    state.set_status(message);
                }
            }
            Some(EditTarget::WidthLimit) => {
                state.section.set_width_limit(value);
                info!(limit = state.section.width_limit(), "width limit set");
                let message = format!(
                    "Total street width set to {:.2} m",
                    state.section.width_limit()
                );
                state.set_status(message);
            }
            None => {}
        },
        ComponentEvent::Cancelled => state.set_status("Cancelled"),
        ComponentEvent::Closed => state.set_status("Press ? for help"),
    }
    state.close_component();
}
