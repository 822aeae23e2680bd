//! Controls panel: street setup summary and the ordered element list.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{list_offset, list_rows_area, AppState, Theme};
use crate::models::{palette, WidthBudget};

/// Helper text shown under the element list.
pub const DRAG_HELP: &str = "Drag elements to change their left-to-right location in the street.";

/// Columns taken by everything on a row except the label.
const ROW_CHROME: u16 = 18;
/// Width of the remove button at the end of each row.
pub const REMOVE_BUTTON_WIDTH: u16 = 3;

/// First column of the `[x]` button, or `None` when rows are too narrow to show it.
#[must_use]
pub const fn remove_button_column(rows: Rect) -> Option<u16> {
    if rows.width >= ROW_CHROME {
        Some(rows.x + rows.width - REMOVE_BUTTON_WIDTH)
    } else {
        None
    }
}

/// Street setup summary widget.
pub struct SetupSummary;

impl SetupSummary {
    /// Renders limit, add selector and the width budget.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let section = &state.section;
        let label = Style::default().fg(theme.text);
        let hint = Style::default().fg(theme.text_muted);

        let mut lines = vec![Line::from(vec![
            Span::styled("Total street width: ", label),
            Span::styled(
                format!("{:.2} m", section.width_limit()),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  (w edit)", hint),
        ])];

        let mut add_line = vec![Span::styled("Add element: ", label)];
        if let Some(entry) = palette::lookup(section.selected_kind()) {
            add_line.push(Span::styled(
                "██ ",
                Style::default().fg(entry.color.to_ratatui_color()),
            ));
            add_line.push(Span::styled(entry.label, label.add_modifier(Modifier::BOLD)));
        }
        add_line.push(Span::styled("  (t choose, a add)", hint));
        lines.push(Line::from(add_line));

        lines.push(Line::from(vec![
            Span::styled("Used width: ", label),
            Span::styled(
                format!("{:.2} m", section.used_width()),
                label.add_modifier(Modifier::BOLD),
            ),
        ]));

        lines.push(match section.budget() {
            WidthBudget::Remaining(meters) => Line::from(Span::styled(
                format!("{meters:.2} m remaining"),
                Style::default().fg(theme.success),
            )),
            WidthBudget::Over(meters) => Line::from(Span::styled(
                format!("Over by {meters:.2} m"),
                Style::default().fg(theme.warning).add_modifier(Modifier::BOLD),
            )),
        });

        let block = Block::default()
            .title(" Street setup ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// Ordered element list widget.
pub struct ElementList;

impl ElementList {
    /// Renders one row per element, leftmost first.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let section = &state.section;
        let toggle_label = if section.is_simulating() {
            " s: Back to section "
        } else {
            " s: Simulate street "
        };

        let block = Block::default()
            .title(format!(" Elements ({}) ", section.len()))
            .title(Line::from(toggle_label).right_aligned())
            .title_bottom(Line::from(Span::styled(
                format!(" {DRAG_HELP} "),
                Style::default().fg(theme.text_muted),
            )))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background));

        let rows = list_rows_area(area);
        let visible = usize::from(rows.height);
        let offset = list_offset(state.selected, visible);
        let label_width = usize::from(rows.width.saturating_sub(ROW_CHROME));
        let drag_source = section.drag_source();
        let show_remove = remove_button_column(rows).is_some();

        let lines: Vec<Line> = section
            .elements()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(index, element)| {
                let is_selected = index == state.selected;
                let is_dragged = drag_source == Some(element.id);

                let marker = match (is_dragged, is_selected, drag_source.is_some()) {
                    (true, _, _) => "≡ ",
                    (false, true, true) => "↳ ",
                    (false, true, false) => "▶ ",
                    _ => "  ",
                };

                let mut row_style = Style::default().fg(theme.text);
                if is_selected {
                    row_style = row_style.bg(theme.surface).add_modifier(Modifier::BOLD);
                }
                if is_dragged {
                    row_style = row_style.fg(theme.accent).add_modifier(Modifier::ITALIC);
                }

                let label: String = element.label.chars().take(label_width).collect();

                let mut spans = vec![
                    Span::styled(marker, row_style),
                    Span::styled(
                        "██ ",
                        Style::default().fg(element.color.to_ratatui_color()),
                    ),
                    Span::styled(format!("{label:<label_width$}"), row_style),
                    Span::styled(format!("{:>7.2} m", element.width), row_style),
                ];
                if show_remove {
                    spans.push(Span::styled(" ", row_style));
                    spans.push(Span::styled("[x]", Style::default().fg(theme.error)));
                }
                Line::from(spans)
            })
            .collect();

        let body = if lines.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                "No elements yet. Press a to add one.",
                Style::default().fg(theme.text_muted),
            )))
        } else {
            Paragraph::new(lines)
        };

        f.render_widget(body.block(block), area);
    }
}
