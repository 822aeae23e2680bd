//! Mouse input handler for the element list.
//!
//! Pressing on a row selects it and picks it up; releasing over another row
//! drops it there. A press while an element is already picked up (from the
//! keyboard) drops it on the pressed row. Pressing the `[x]` button at the end of a row removes it.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::element_list::remove_button_column;
use crate::tui::{compute_layout, list_offset, list_rows_area, AppState};

/// Where a mouse position falls in the element list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowHit {
    /// On the row body
    Row(usize),
    /// On the row's remove button
    Remove(usize),
}

fn hit_test(state: &AppState, column: u16, row: u16) -> Option<RowHit> {
    let layout = compute_layout(state.viewport);
    let rows = list_rows_area(layout.elements);

    let inside = column >= rows.x
        && column < rows.x + rows.width
        && row >= rows.y
        && row < rows.y + rows.height;
    if !inside {
        return None;
    }

    let offset = list_offset(state.selected, usize::from(rows.height));
    let index = offset + usize::from(row - rows.y);
    if index >= state.section.len() {
        return None;
    }

    match remove_button_column(rows) {
        Some(button) if column >= button => Some(RowHit::Remove(index)),
        _ => Some(RowHit::Row(index)),
    }
}

/// Handle a mouse event in the main UI
pub fn handle_mouse_input(state: &mut AppState, mouse: MouseEvent) -> Result<bool> {
    let hit = hit_test(state, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => match hit {
            Some(RowHit::Remove(index)) => {
                let id = state.section.elements()[index].id;
                if let Some(removed) = state.section.remove_element(id) {
                    state.clamp_selection();
                    state.set_status(format!("Removed {}", removed.label));
                }
            }
            Some(RowHit::Row(index)) => {
                let id = state.section.elements()[index].id;
                match state.section.drag_source() {
                    Some(source) if source != id => {
                        state.section.drop_on(id);
                        state.select_id(source);
                        state.set_status("Element moved");
                    }
                    _ => {
                        state.selected = index;
                        state.section.begin_drag(id);
                    }
                }
            }
            None => {}
        },
        MouseEventKind::Up(MouseButton::Left) => {
            let Some(source) = state.section.drag_source() else {
                return Ok(false);
            };
            let target = match hit {
                Some(RowHit::Row(index) | RowHit::Remove(index)) => {
                    Some(state.section.elements()[index].id)
                }
                None => None,
            };
            match target {
                Some(target) if target != source => {
                    state.section.drop_on(target);
                    state.select_id(source);
                    state.set_status("Element moved");
                }
                // Released on the same row or outside the list: plain click
                _ => state.section.cancel_drag(),
            }
        }
        MouseEventKind::ScrollUp => state.selected = state.selected.saturating_sub(1),
        MouseEventKind::ScrollDown => {
            if state.selected + 1 < state.section.len() {
                state.selected += 1;
            }
        }
        _ => {}
    }

    Ok(false)
}
