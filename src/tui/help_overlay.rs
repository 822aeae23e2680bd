//! Help overlay listing keyboard shortcuts by category.
//!
//! Opened with '?' and scrollable with the arrow keys.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::{centered_rect, Theme};
use crate::shortcuts::Action;

/// Shortcut categories as they appear in the overlay.
const SECTIONS: &[(&str, &[(&str, Action)])] = &[
    (
        "NAVIGATION",
        &[
            ("↑ / k", Action::NavigateUp),
            ("↓ / j", Action::NavigateDown),
            ("Home / g", Action::JumpToFirst),
            ("End / G", Action::JumpToLast),
        ],
    ),
    (
        "PALETTE",
        &[
            ("a / +", Action::AddElement),
            ("t", Action::OpenPalettePicker),
            ("Tab", Action::NextKind),
            ("Shift+Tab", Action::PreviousKind),
        ],
    ),
    (
        "WIDTHS",
        &[
            ("Enter / e", Action::EditWidth),
            ("w", Action::EditWidthLimit),
            ("→ / l / ]", Action::IncreaseWidth),
            ("← / h / [", Action::DecreaseWidth),
        ],
    ),
    (
        "ELEMENTS",
        &[
            ("x / Delete", Action::RemoveElement),
            ("Space", Action::ToggleDrag),
            ("Shift+↑ / K", Action::MoveElementUp),
            ("Shift+↓ / J", Action::MoveElementDown),
            ("Esc", Action::Cancel),
        ],
    ),
    (
        "VIEW",
        &[
            ("s", Action::ToggleSimulation),
            ("?", Action::ToggleHelp),
            ("q / Ctrl+C", Action::Quit),
        ],
    ),
];

const MOUSE_NOTES: &[(&str, &str)] = &[
    ("Click row", "Select element"),
    ("Drag row", "Drop onto another row to reorder"),
    ("Click [x]", "Remove element"),
];

/// Scrollable help overlay.
#[derive(Debug, Clone, Default)]
pub struct HelpOverlay {
    /// First visible line
    scroll_offset: usize,
}

impl HelpOverlay {
    /// Creates an overlay scrolled to the top.
    #[must_use]
    pub const fn new() -> Self {
        Self { scroll_offset: 0 }
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn total_lines() -> usize {
        // Title, blank, then per section: heading, entries, blank; mouse block likewise
        let sections: usize = SECTIONS.iter().map(|(_, entries)| entries.len() + 2).sum();
        2 + sections + MOUSE_NOTES.len() + 2
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < Self::total_lines() {
            self.scroll_offset += 1;
        }
    }

    fn content(theme: &Theme) -> Vec<Line<'static>> {
        let heading = Style::default().fg(theme.accent).add_modifier(Modifier::BOLD);
        let key_style = Style::default().fg(theme.success);
        let text_style = Style::default().fg(theme.text);

        let mut lines = vec![
            Line::from(Span::styled(
                "Street Section Builder - Help",
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(""),
        ];

        for (title, entries) in SECTIONS {
            lines.push(Line::from(Span::styled(format!("═══ {title} ═══"), heading)));
            for (keys, action) in *entries {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {keys:<14}"), key_style),
                    Span::styled(action.description(), text_style),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled("═══ MOUSE ═══", heading)));
        for (gesture, description) in MOUSE_NOTES {
            lines.push(Line::from(vec![
                Span::styled(format!("  {gesture:<14}"), key_style),
                Span::styled(*description, text_style),
            ]));
        }
        lines.push(Line::from(""));
        lines
    }
}

impl Component for HelpOverlay {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?' | 'q') => Some(ComponentEvent::Closed),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                None
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                None
            }
            KeyCode::End => {
                self.scroll_offset = Self::total_lines().saturating_sub(1);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let dialog = centered_rect(70, 80, area);
        f.render_widget(Clear, dialog);

        let content = Self::content(theme);
        let total = content.len();
        let offset = u16::try_from(self.scroll_offset).unwrap_or(u16::MAX);

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Help (↑/↓ scroll, Esc close) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .scroll((offset, 0));
        f.render_widget(paragraph, dialog);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
        let mut scrollbar_state = ScrollbarState::new(total).position(self.scroll_offset);
        f.render_stateful_widget(scrollbar, dialog, &mut scrollbar_state);
    }
}
