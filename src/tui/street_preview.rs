//! Proportional street preview and simulation panel.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::{AppState, Theme};
use crate::services::{animation_phase, build_segments, icon_row};

/// Footer shown while editing.
pub const PREVIEW_NOTE: &str =
    "Tip: adjust widths and drag element rows to instantly update this section view.";
/// Footer shown while simulating.
pub const SIMULATION_NOTE: &str =
    "Live simulation: vehicles and users move according to the section you built.";

/// Preview panel widget.
pub struct StreetPreview;

impl StreetPreview {
    /// Panel title for the current mode.
    #[must_use]
    pub const fn title(simulating: bool) -> &'static str {
        if simulating {
            "Street simulation"
        } else {
            "Street preview"
        }
    }

    /// Renders the segments, the traffic overlay and the footer note.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let simulating = state.section.is_simulating();

        let block = Block::default()
            .title(format!(" {} ", Self::title(simulating)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Canvas
                Constraint::Length(3), // Selected tooltip + note
            ])
            .split(inner);

        Self::render_canvas(f, chunks[0], state, theme);
        Self::render_footer(f, chunks[1], state, theme);
    }

    fn render_canvas(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        if area.is_empty() {
            return;
        }
        let canvas_bg = Block::default().style(Style::default().bg(theme.surface));
        f.render_widget(canvas_bg, area);

        let segments = build_segments(&state.section, area.width);
        if segments.iter().all(|s| s.columns == 0) {
            let message = Paragraph::new("Nothing to preview yet. Add an element with a.")
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.text_muted).bg(theme.surface));
            let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
            f.render_widget(message, row);
            return;
        }

        let elapsed = state.simulation.elapsed();
        let selected_id = state.selected_element().map(|e| e.id);
        let mut x = area.x;

        for segment in &segments {
            if segment.columns == 0 {
                continue;
            }
            let rect = Rect::new(x, area.y, segment.columns, area.height);
            x += segment.columns;

            let element = segment.element;
            // The element being dragged is drawn faded
            let swatch = if state.section.drag_source() == Some(element.id) {
                element.color.dim(60)
            } else {
                element.color
            };
            let bg = swatch.to_ratatui_color();
            let fg = swatch.contrasting_text().to_ratatui_color();
            let base = Style::default().bg(bg).fg(fg);

            let mut label_style = base.add_modifier(Modifier::BOLD);
            if selected_id == Some(element.id) {
                label_style = label_style.add_modifier(Modifier::UNDERLINED);
            }

            let width = usize::from(segment.columns);
            let label: String = element.label.chars().take(width).collect();
            let caption: String = segment.caption().chars().take(width).collect();

            let text = vec![
                Line::from(Span::styled(label, label_style)),
                Line::from(Span::styled(caption, base)),
            ];
            f.render_widget(
                Paragraph::new(text).alignment(Alignment::Center).style(base),
                rect,
            );

            if state.section.is_simulating() && segment.columns >= 2 && rect.height > 2 {
                // Traffic travels below the label rows
                let lane = Rect::new(rect.x, rect.y + 2, rect.width, rect.height - 2);
                let phase = animation_phase(element.kind, elapsed);
                let row = icon_row(phase, lane.height);
                let icon_area = Rect::new(lane.x, lane.y + row, lane.width, 1);
                f.render_widget(
                    Paragraph::new(element.kind.traffic_icon())
                        .alignment(Alignment::Center)
                        .style(base),
                    icon_area,
                );
            }
        }
    }

    fn render_footer(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let tooltip = build_segments(&state.section, 0)
            .into_iter()
            .nth(state.selected)
            .map(|segment| segment.tooltip())
            .unwrap_or_default();

        let note = if state.section.is_simulating() {
            SIMULATION_NOTE
        } else {
            PREVIEW_NOTE
        };

        let lines = vec![
            Line::from(Span::styled(tooltip, Style::default().fg(theme.text))),
            Line::from(Span::styled(note, Style::default().fg(theme.text_muted))),
        ];
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }
}
