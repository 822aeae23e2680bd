//! Component trait pattern for TUI popups.
//!
//! This module defines the traits and types used to implement self-contained,
//! testable popups that handle their own input and rendering.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::models::ElementKind;
use crate::tui::Theme;

/// A component that can be rendered and handle input.
///
/// Components are self-contained UI elements that manage their own state,
/// handle keyboard input, and can emit events to communicate with the parent.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the component wants to signal something to the parent.
    /// Returns `None` if input was handled internally without needing parent action.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the component within the provided area.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Events that can be emitted by popup components.
///
/// These events are processed by the popup handler to update the section.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentEvent {
    /// User chose a palette kind
    KindSelected(ElementKind),

    /// User confirmed a numeric value
    ValueSubmitted(f64),

    /// User cancelled without making changes
    Cancelled,

    /// Component closed naturally (e.g., help overlay dismissed)
    Closed,
}
