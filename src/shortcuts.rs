//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting help text definitions with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions in the main editor.
///
/// This enum represents every action a user can take. It serves as the
/// bridge between keyboard shortcuts and section operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    /// Select the element to the left (previous row)
    NavigateUp,
    /// Select the element to the right (next row)
    NavigateDown,
    /// Select the leftmost element
    JumpToFirst,
    /// Select the rightmost element
    JumpToLast,

    // === PALETTE ===
    /// Append the selected palette kind
    AddElement,
    /// Open the palette selector
    OpenPalettePicker,
    /// Select the next palette kind
    NextKind,
    /// Select the previous palette kind
    PreviousKind,

    // === WIDTHS ===
    /// Edit the selected element's width
    EditWidth,
    /// Edit the total street width
    EditWidthLimit,
    /// Widen the selected element by one step
    IncreaseWidth,
    /// Narrow the selected element by one step
    DecreaseWidth,

    // === ELEMENTS ===
    /// Remove the selected element
    RemoveElement,
    /// Pick up the selected element, or drop the carried one here
    ToggleDrag,
    /// Move the selected element one place left
    MoveElementUp,
    /// Move the selected element one place right
    MoveElementDown,

    // === VIEW ===
    /// Switch between preview and simulation
    ToggleSimulation,
    /// Show or hide the help overlay
    ToggleHelp,

    // === GENERAL ===
    /// Exit the application
    Quit,
    /// Cancel the current drag
    Cancel,
}

impl Action {
    /// Short description shown in the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NavigateUp => "Select previous element",
            Self::NavigateDown => "Select next element",
            Self::JumpToFirst => "Select leftmost element",
            Self::JumpToLast => "Select rightmost element",

            Self::AddElement => "Add selected palette element",
            Self::OpenPalettePicker => "Choose palette element",
            Self::NextKind => "Next palette element",
            Self::PreviousKind => "Previous palette element",

            Self::EditWidth => "Edit element width",
            Self::EditWidthLimit => "Edit total street width",
            Self::IncreaseWidth => "Widen element by 0.1 m",
            Self::DecreaseWidth => "Narrow element by 0.1 m",

            Self::RemoveElement => "Remove element",
            Self::ToggleDrag => "Pick up / drop element",
            Self::MoveElementUp => "Move element left",
            Self::MoveElementDown => "Move element right",

            Self::ToggleSimulation => "Simulate street / back to section",
            Self::ToggleHelp => "Toggle help",

            Self::Quit => "Quit",
            Self::Cancel => "Cancel drag",
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "main";

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Home, M::NONE, Action::JumpToFirst);
        self.register(ctx, K::End, M::NONE, Action::JumpToLast);
        self.register(ctx, K::Char('g'), M::NONE, Action::JumpToFirst);
        self.register(ctx, K::Char('G'), M::SHIFT, Action::JumpToLast);

        // === PALETTE ===
        self.register(ctx, K::Char('a'), M::NONE, Action::AddElement);
        self.register(ctx, K::Char('+'), M::NONE, Action::AddElement);
        self.register(ctx, K::Char('+'), M::SHIFT, Action::AddElement);
        self.register(ctx, K::Char('t'), M::NONE, Action::OpenPalettePicker);
        self.register(ctx, K::Tab, M::NONE, Action::NextKind);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousKind);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousKind);

        // === WIDTHS ===
        self.register(ctx, K::Enter, M::NONE, Action::EditWidth);
        self.register(ctx, K::Char('e'), M::NONE, Action::EditWidth);
        self.register(ctx, K::Char('w'), M::NONE, Action::EditWidthLimit);
        self.register(ctx, K::Char(']'), M::NONE, Action::IncreaseWidth);
        self.register(ctx, K::Right, M::NONE, Action::IncreaseWidth);
        self.register(ctx, K::Char('l'), M::NONE, Action::IncreaseWidth);
        self.register(ctx, K::Char('['), M::NONE, Action::DecreaseWidth);
        self.register(ctx, K::Left, M::NONE, Action::DecreaseWidth);
        self.register(ctx, K::Char('h'), M::NONE, Action::DecreaseWidth);

        // === ELEMENTS ===
        self.register(ctx, K::Char('x'), M::NONE, Action::RemoveElement);
        self.register(ctx, K::Delete, M::NONE, Action::RemoveElement);
        self.register(ctx, K::Char(' '), M::NONE, Action::ToggleDrag);
        self.register(ctx, K::Up, M::SHIFT, Action::MoveElementUp);
        self.register(ctx, K::Down, M::SHIFT, Action::MoveElementDown);
        self.register(ctx, K::Char('K'), M::SHIFT, Action::MoveElementUp);
        self.register(ctx, K::Char('J'), M::SHIFT, Action::MoveElementDown);

        // === VIEW ===
        self.register(ctx, K::Char('s'), M::NONE, Action::ToggleSimulation);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('?'), M::SHIFT, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
