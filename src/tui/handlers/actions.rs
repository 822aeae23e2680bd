//! Action dispatch from shortcut actions to their handlers.

use anyhow::Result;
use tracing::debug;

use crate::shortcuts::Action;
use crate::tui::AppState;

use super::action_handlers::{elements, navigation, popups, view};

/// Dispatch action to appropriate handler
///
/// Returns `Ok(true)` when the application should exit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    debug!(?action, "dispatching action");

    match action {
        // Navigation (4 actions)
        Action::NavigateUp => navigation::handle_navigate_up(state),
        Action::NavigateDown => navigation::handle_navigate_down(state),
        Action::JumpToFirst => navigation::handle_jump_to_first(state),
        Action::JumpToLast => navigation::handle_jump_to_last(state),

        // Palette (4 actions)
        Action::AddElement => elements::handle_add_element(state),
        Action::OpenPalettePicker => popups::handle_open_palette_picker(state),
        Action::NextKind => elements::handle_next_kind(state),
        Action::PreviousKind => elements::handle_previous_kind(state),

        // Widths (4 actions)
        Action::EditWidth => popups::handle_edit_width(state),
        Action::EditWidthLimit => popups::handle_edit_width_limit(state),
        Action::IncreaseWidth => elements::handle_increase_width(state),
        Action::DecreaseWidth => elements::handle_decrease_width(state),

        // Elements (4 actions)
        Action::RemoveElement => elements::handle_remove_element(state),
        Action::ToggleDrag => elements::handle_toggle_drag(state),
        Action::MoveElementUp => elements::handle_move_element_up(state),
        Action::MoveElementDown => elements::handle_move_element_down(state),

        // View (2 actions)
        Action::ToggleSimulation => view::handle_toggle_simulation(state),
        Action::ToggleHelp => popups::handle_toggle_help(state),

        // General (2 actions)
        Action::Quit => view::handle_quit(state),
        Action::Cancel => view::handle_cancel(state),
    }
}
