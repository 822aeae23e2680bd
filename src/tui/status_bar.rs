//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, PopupType, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let status_line = if state.section.drag_source().is_some() {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.accent),
            ))
        } else {
            Line::from(state.status_message.as_str())
        };

        let status = Paragraph::new(vec![status_line, Self::help_line(state, theme)])
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Key hints for whatever currently has focus.
    #[must_use]
    pub fn hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
        match &state.active_popup {
            Some(PopupType::PalettePicker) => &[
                ("↑/↓", "Navigate"),
                ("1-6", "Pick"),
                ("Enter", "Select"),
                ("Esc", "Cancel"),
            ],
            Some(PopupType::WidthEditor | PopupType::LimitEditor) => &[
                ("0-9 .", "Type"),
                ("↑/↓", "±0.1"),
                ("Enter", "Confirm"),
                ("Esc", "Cancel"),
            ],
            Some(PopupType::HelpOverlay) => &[("↑/↓", "Scroll"), ("Esc/?", "Close")],
            None if state.section.drag_source().is_some() => &[
                ("↑/↓", "Choose target"),
                ("Space", "Drop"),
                ("Esc", "Cancel drag"),
            ],
            None => &[
                ("a", "Add"),
                ("t", "Palette"),
                ("Enter", "Width"),
                ("Space", "Drag"),
                ("x", "Remove"),
                ("s", "Simulate"),
                ("?", "Help"),
            ],
        }
    }

    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = vec![Span::styled(
            "Help: ",
            Style::default().fg(theme.primary),
        )];

        for (i, (key, action)) in Self::hints(state).iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                *key,
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(*action));
        }

        Line::from(spans)
    }
}
