//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod component;
pub mod element_list;
pub mod handlers;
pub mod help_overlay;
pub mod number_input;
pub mod palette_picker;
pub mod status_bar;
pub mod street_preview;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseEvent,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::shortcuts::ShortcutRegistry;
use crate::models::{ElementId, StreetElement, StreetSection};
use crate::services::SimulationClock;

// Re-export TUI components
pub use component::{Component, ComponentEvent};
pub use element_list::{ElementList, SetupSummary};
pub use help_overlay::HelpOverlay;
pub use number_input::NumberInput;
pub use palette_picker::PalettePicker;
pub use status_bar::StatusBar;
pub use street_preview::StreetPreview;
pub use theme::Theme;

/// Subtitle shown under the application name.
pub const SUBTITLE: &str =
    "Build a simple street profile (like Streetmix) with your own widths and elements.";

/// Popup types that can be displayed over the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Palette selector for the next add
    PalettePicker,
    /// Width editor for the selected element
    WidthEditor,
    /// Editor for the total street width
    LimitEditor,
    /// Help overlay popup
    HelpOverlay,
}

/// Active component - holds the currently active popup component
///
/// Only one component can be active at a time.
#[derive(Debug)]
pub enum ActiveComponent {
    /// Palette picker component
    PalettePicker(PalettePicker),
    /// Numeric input component (element width or width limit)
    NumberInput(NumberInput),
    /// Help overlay component
    HelpOverlay(HelpOverlay),
}

/// What a submitted number is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// Width of one element
    ElementWidth(ElementId),
    /// Total street width
    WidthLimit,
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// The street being edited
    pub section: StreetSection,
    /// Application configuration
    pub config: Config,

    // UI state
    /// Current theme
    pub theme: Theme,
    /// Index of the highlighted element row
    pub selected: usize,
    /// Active popup (if any)
    pub active_popup: Option<PopupType>,
    /// Active component instance (if any)
    pub active_component: Option<ActiveComponent>,
    /// Where the open number input's value goes
    pub edit_target: Option<EditTarget>,
    /// Status message to display
    pub status_message: String,
    /// Animation clock for simulation mode
    pub simulation: SimulationClock,
    /// Key bindings, built once per session
    pub shortcuts: ShortcutRegistry,
    /// Last known terminal area, used for mouse hit-testing
    pub viewport: Rect,
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates a new `AppState` for `section`.
    ///
    /// The theme is resolved from `config.ui.theme_mode`, and the help
    /// overlay opens immediately when `config.ui.show_help_on_startup` is set.
    #[must_use]
    pub fn new(section: StreetSection, config: Config) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        let show_help = config.ui.show_help_on_startup;

        let mut state = Self {
            section,
            config,
            theme,
            selected: 0,
            active_popup: None,
            active_component: None,
            edit_target: None,
            status_message: "Press ? for help".to_string(),
            simulation: SimulationClock::new(),
            shortcuts: ShortcutRegistry::new(),
            viewport: Rect::default(),
            should_quit: false,
        };
        state.sync_simulation();

        if show_help {
            state.open_help_overlay();
        }
        state
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Currently highlighted element.
    #[must_use]
    pub fn selected_element(&self) -> Option<&StreetElement> {
        self.section.elements().get(self.selected)
    }

    /// Id of the highlighted element.
    #[must_use]
    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected_element().map(|e| e.id)
    }

    /// Highlights the element with `id`, if present.
    pub fn select_id(&mut self, id: ElementId) {
        if let Some(index) = self.section.index_of(id) {
            self.selected = index;
        }
    }

    /// Keeps the selection inside the element list.
    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.section.len().saturating_sub(1));
    }

    /// Starts or stops the animation clock to match the section.
    pub fn sync_simulation(&mut self) {
        self.simulation.sync(self.section.is_simulating());
    }

    /// Open the palette picker component
    pub fn open_palette_picker(&mut self) {
        let picker = PalettePicker::new(self.section.selected_kind());
        self.active_component = Some(ActiveComponent::PalettePicker(picker));
        self.active_popup = Some(PopupType::PalettePicker);
    }

    /// Open the width editor for the highlighted element
    ///
    /// Returns `false` when there is nothing to edit.
    pub fn open_width_editor(&mut self) -> bool {
        let Some(element) = self.selected_element() else {
            return false;
        };
        let input = NumberInput::new(
            format!("{} width", element.label),
            "Width in meters:",
            element.width,
        );
        self.edit_target = Some(EditTarget::ElementWidth(element.id));
        self.active_component = Some(ActiveComponent::NumberInput(input));
        self.active_popup = Some(PopupType::WidthEditor);
        true
    }

    /// Open the editor for the total street width
    pub fn open_limit_editor(&mut self) {
        let input = NumberInput::new(
            "Total street width",
            "Total street width (meters):",
            self.section.width_limit(),
        );
        self.edit_target = Some(EditTarget::WidthLimit);
        self.active_component = Some(ActiveComponent::NumberInput(input));
        self.active_popup = Some(PopupType::LimitEditor);
    }

    /// Open the help overlay component
    pub fn open_help_overlay(&mut self) {
        self.active_component = Some(ActiveComponent::HelpOverlay(HelpOverlay::new()));
        self.active_popup = Some(PopupType::HelpOverlay);
    }

    /// Close the currently active component
    pub fn close_component(&mut self) {
        self.active_component = None;
        self.active_popup = None;
        self.edit_target = None;
    }
}

/// Screen regions, shared by rendering and mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar
    pub title: Rect,
    /// Street setup summary
    pub setup: Rect,
    /// Element list, including its border
    pub elements: Rect,
    /// Street preview panel
    pub preview: Rect,
    /// Status bar
    pub status: Rect,
}

/// Splits the terminal area into the main regions.
#[must_use]
pub fn compute_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    let controls = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Setup summary
            Constraint::Min(3),    // Element list
        ])
        .split(columns[0]);

    ScreenLayout {
        title: rows[0],
        setup: controls[0],
        elements: controls[1],
        preview: columns[1],
        status: rows[2],
    }
}

/// Area inside the element list border where rows are drawn.
#[must_use]
pub fn list_rows_area(elements: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(elements)
}

/// First visible row index so that `selected` stays on screen.
#[must_use]
pub const fn list_offset(selected: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 || selected < visible_rows {
        0
    } else {
        selected + 1 - visible_rows
    }
}

/// Helper to create a centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    let tick_rate = state.config.tick_rate();

    loop {
        state.sync_simulation();

        // Render current state
        terminal.draw(|f| {
            state.viewport = f.area();
            render(f, state);
        })?;

        // Poll for events; the timeout keeps the simulation animating
        if event::poll(tick_rate)? {
            let quit = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(state, key)?
                }
                Event::Mouse(mouse) => handle_mouse_event(state, mouse)?,
                // Resize and other events are picked up by the next draw
                _ => false,
            };
            if quit {
                break;
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let layout = compute_layout(f.area());

    render_title_bar(f, layout.title, state);
    SetupSummary::render(f, layout.setup, state, &state.theme);
    ElementList::render(f, layout.elements, state, &state.theme);
    StreetPreview::render(f, layout.preview, state, &state.theme);
    StatusBar::render(f, layout.status, state, &state.theme);

    // Render popup if active
    if let Some(component) = &state.active_component {
        render_popup(f, component, state);
    }
}

/// Render title bar with the application name and subtitle
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            APP_NAME,
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(theme.text_muted))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );

    f.render_widget(title, area);
}

/// Render active popup
fn render_popup(f: &mut Frame, component: &ActiveComponent, state: &AppState) {
    let area = f.area();
    match component {
        ActiveComponent::PalettePicker(picker) => picker.render(f, area, &state.theme),
        ActiveComponent::NumberInput(input) => input.render(f, area, &state.theme),
        ActiveComponent::HelpOverlay(help) => help.render(f, area, &state.theme),
    }
}

/// Handle keyboard input events
///
/// Returns `Ok(true)` when the application should exit.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Route to popup handler if popup is active
    if state.active_popup.is_some() {
        return handlers::handle_popup_input(state, key);
    }

    // Main UI key handling
    handlers::handle_main_input(state, key)
}

/// Handle mouse input events
///
/// Returns `Ok(true)` when the application should exit.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent) -> Result<bool> {
    if state.active_popup.is_some() {
        return Ok(false);
    }
    handlers::handle_mouse_input(state, mouse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;

    fn quiet_config() -> Config {
        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Dark;
        config.ui.show_help_on_startup = false;
        config
    }

    #[test]
    fn test_list_offset_keeps_selection_visible() {
        assert_eq!(list_offset(0, 5), 0);
        assert_eq!(list_offset(4, 5), 0);
        assert_eq!(list_offset(5, 5), 1);
        assert_eq!(list_offset(9, 5), 5);
        assert_eq!(list_offset(3, 0), 0);
    }

    #[test]
    fn test_compute_layout_regions() {
        let layout = compute_layout(Rect::new(0, 0, 120, 40));
        assert_eq!(layout.title.height, 4);
        assert_eq!(layout.status.height, 4);
        assert_eq!(layout.setup.height, 6);
        assert_eq!(layout.elements.y, layout.setup.y + 6);
        assert_eq!(layout.preview.x, layout.setup.x + layout.setup.width);
        assert_eq!(layout.setup.width + layout.preview.width, 120);
    }

    #[test]
    fn test_list_rows_area_strips_border() {
        let rows = list_rows_area(Rect::new(0, 10, 40, 12));
        assert_eq!(rows, Rect::new(1, 11, 38, 10));
    }

    #[test]
    fn test_help_on_startup() {
        let mut config = quiet_config();
        config.ui.show_help_on_startup = true;
        let state = AppState::new(StreetSection::default(), config);
        assert_eq!(state.active_popup, Some(PopupType::HelpOverlay));

        let state = AppState::new(StreetSection::default(), quiet_config());
        assert_eq!(state.active_popup, None);
    }

    #[test]
    fn test_clamp_selection_after_shrink() {
        let mut state = AppState::new(StreetSection::default(), quiet_config());
        state.selected = 4;
        let id = state.selected_id().unwrap();
        state.section.remove_element(id);
        state.clamp_selection();
        assert_eq!(state.selected, 3);
    }

    #[test]
    fn test_width_editor_needs_an_element() {
        let mut state = AppState::new(StreetSection::new(16.0), quiet_config());
        assert!(!state.open_width_editor());
        assert_eq!(state.active_popup, None);
    }
}
