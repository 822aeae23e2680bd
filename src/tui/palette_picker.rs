//! Palette selector popup.
//!
//! Lists the six element archetypes with their swatch and default width.
//! Choosing one only changes what the next add will insert.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::{centered_rect, Theme};
use crate::models::{ElementKind, PALETTE};

/// Palette picker state.
#[derive(Debug, Clone)]
pub struct PalettePicker {
    /// Highlighted row in [`PALETTE`]
    selected: usize,
}

impl PalettePicker {
    /// Creates a picker with `current` highlighted.
    #[must_use]
    pub fn new(current: ElementKind) -> Self {
        Self {
            selected: current.palette_index(),
        }
    }

    /// Kind under the cursor.
    #[must_use]
    pub fn highlighted(&self) -> ElementKind {
        PALETTE[self.selected].kind
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = PALETTE.len() - 1;
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % PALETTE.len();
    }
}

impl Component for PalettePicker {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => Some(ComponentEvent::Cancelled),
            KeyCode::Enter => Some(ComponentEvent::KindSelected(self.highlighted())),
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.select_next();
                None
            }
            KeyCode::Char(c @ '1'..='6') => {
                let index = (c as usize) - ('1' as usize);
                self.selected = index;
                Some(ComponentEvent::KindSelected(self.highlighted()))
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let dialog = centered_rect(50, 50, area);
        f.render_widget(Clear, dialog);

        let background = Block::default().style(Style::default().bg(theme.background));
        f.render_widget(background, dialog);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(5),    // Palette list
                Constraint::Length(3), // Help text
            ])
            .split(dialog);

        let items: Vec<ListItem> = PALETTE
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{} ", i + 1),
                        Style::default().fg(theme.text_muted),
                    ),
                    Span::styled("██ ", Style::default().fg(entry.color.to_ratatui_color())),
                    Span::styled(
                        format!("{:<16}", entry.label),
                        Style::default().fg(theme.text),
                    ),
                    Span::styled(
                        format!("{:.1} m", entry.default_width),
                        Style::default().fg(theme.text_muted),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Add element ")
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.surface)
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        f.render_stateful_widget(list, chunks[0], &mut list_state);

        let help = Paragraph::new("↑/↓: Navigate | 1-6/Enter: Select | Esc: Cancel")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            )
            .style(Style::default().fg(theme.text_muted));
        f.render_widget(help, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(picker: &mut PalettePicker, code: KeyCode) -> Option<ComponentEvent> {
        picker.handle_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_starts_on_current_kind() {
        let picker = PalettePicker::new(ElementKind::Bus);
        assert_eq!(picker.highlighted(), ElementKind::Bus);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut picker = PalettePicker::new(ElementKind::Sidewalk);
        press(&mut picker, KeyCode::Up);
        assert_eq!(picker.highlighted(), ElementKind::Median);
        press(&mut picker, KeyCode::Down);
        assert_eq!(picker.highlighted(), ElementKind::Sidewalk);
        press(&mut picker, KeyCode::Char('j'));
        assert_eq!(picker.highlighted(), ElementKind::Bike);
    }

    #[test]
    fn test_enter_selects() {
        let mut picker = PalettePicker::new(ElementKind::Car);
        press(&mut picker, KeyCode::Down);
        assert_eq!(
            press(&mut picker, KeyCode::Enter),
            Some(ComponentEvent::KindSelected(ElementKind::Bus))
        );
    }

    #[test]
    fn test_number_keys_select_directly() {
        let mut picker = PalettePicker::new(ElementKind::Sidewalk);
        assert_eq!(
            press(&mut picker, KeyCode::Char('5')),
            Some(ComponentEvent::KindSelected(ElementKind::Parking))
        );
        assert_eq!(press(&mut picker, KeyCode::Char('7')), None);
    }

    #[test]
    fn test_escape_cancels() {
        let mut picker = PalettePicker::new(ElementKind::Sidewalk);
        assert_eq!(
            press(&mut picker, KeyCode::Esc),
            Some(ComponentEvent::Cancelled)
        );
    }
}
