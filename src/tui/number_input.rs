//! Numeric entry popup used for element widths and the street width limit.
//!
//! Accepts digits, one decimal point and a leading minus sign. Whatever the
//! user typed is coerced on submit: unparseable or empty input becomes 0,
//! and the section store clamps negatives where they are not allowed.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::component::{Component, ComponentEvent};
use super::{centered_rect, Theme};
use crate::constants::WIDTH_STEP;
use crate::models::section::round_to_centimeters;

/// Parses user input as meters; anything invalid is 0.
#[must_use]
pub fn parse_meters(input: &str) -> f64 {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Formats a value the way it is pre-filled into the input.
fn format_meters(value: f64) -> String {
    format!("{}", round_to_centimeters(value))
}

/// Numeric input popup.
#[derive(Debug, Clone)]
pub struct NumberInput {
    title: String,
    prompt: String,
    buffer: String,
    /// The pre-filled value is replaced by the first typed character
    pristine: bool,
}

impl NumberInput {
    /// Creates an input pre-filled with `initial`.
    pub fn new(title: impl Into<String>, prompt: impl Into<String>, initial: f64) -> Self {
        Self {
            title: title.into(),
            prompt: prompt.into(),
            buffer: format_meters(initial),
            pristine: true,
        }
    }

    /// Current text in the input.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Value the input would submit right now.
    #[must_use]
    pub fn value(&self) -> f64 {
        parse_meters(&self.buffer)
    }

    fn push_char(&mut self, c: char) {
        if self.pristine {
            self.buffer.clear();
            self.pristine = false;
        }
        let accepted = match c {
            '0'..='9' => true,
            '.' | ',' => !self.buffer.contains('.'),
            '-' => self.buffer.is_empty(),
            _ => false,
        };
        if accepted {
            self.buffer.push(if c == ',' { '.' } else { c });
        }
    }

    fn step(&mut self, delta: f64) {
        let next = round_to_centimeters(self.value() + delta).max(0.0);
        self.buffer = format_meters(next);
        self.pristine = false;
    }
}

impl Component for NumberInput {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Esc => Some(ComponentEvent::Cancelled),
            KeyCode::Enter => Some(ComponentEvent::ValueSubmitted(self.value())),
            KeyCode::Backspace => {
                self.pristine = false;
                self.buffer.pop();
                None
            }
            KeyCode::Up => {
                self.step(WIDTH_STEP);
                None
            }
            KeyCode::Down => {
                self.step(-WIDTH_STEP);
                None
            }
            KeyCode::Char(c) => {
                self.push_char(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let dialog = centered_rect(40, 30, area);
        f.render_widget(Clear, dialog);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.title))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(dialog);
        f.render_widget(block, dialog);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Prompt
                Constraint::Length(3), // Input
                Constraint::Min(0),    // Spacer
                Constraint::Length(1), // Help
            ])
            .split(inner);

        let prompt = Paragraph::new(self.prompt.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.text));
        f.render_widget(prompt, chunks[0]);

        let value_style = if self.pristine {
            Style::default().fg(theme.text_muted)
        } else {
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD)
        };
        let input = Paragraph::new(Line::from(vec![
            Span::styled(self.buffer.as_str(), value_style),
            Span::styled("▏", Style::default().fg(theme.accent)),
            Span::styled(" m", Style::default().fg(theme.text_muted)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );
        f.render_widget(input, chunks[1]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.primary)),
            Span::raw(": Confirm  "),
            Span::styled("↑/↓", Style::default().fg(theme.primary)),
            Span::raw(": ±0.1  "),
            Span::styled("Esc", Style::default().fg(theme.primary)),
            Span::raw(": Cancel"),
        ]))
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.text_muted));
        f.render_widget(help, chunks[3]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(input: &mut NumberInput, code: KeyCode) -> Option<ComponentEvent> {
        input.handle_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(input: &mut NumberInput, text: &str) {
        for c in text.chars() {
            press(input, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_parse_meters() {
        assert!((parse_meters("3.25") - 3.25).abs() < f64::EPSILON);
        assert!((parse_meters(" 16 ") - 16.0).abs() < f64::EPSILON);
        assert!(parse_meters("").abs() < f64::EPSILON);
        assert!(parse_meters("abc").abs() < f64::EPSILON);
        assert!(parse_meters("-").abs() < f64::EPSILON);
        assert!(parse_meters("inf").abs() < f64::EPSILON);
        assert!((parse_meters("-2") + 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_prefilled_value_replaced_on_typing() {
        let mut input = NumberInput::new("Width", "Meters:", 2.5);
        assert_eq!(input.buffer(), "2.5");
        type_str(&mut input, "4.2");
        assert_eq!(input.buffer(), "4.2");
        assert_eq!(
            press(&mut input, KeyCode::Enter),
            Some(ComponentEvent::ValueSubmitted(4.2))
        );
    }

    #[test]
    fn test_backspace_edits_prefilled_value() {
        let mut input = NumberInput::new("Width", "Meters:", 16.0);
        assert_eq!(input.buffer(), "16");
        press(&mut input, KeyCode::Backspace);
        type_str(&mut input, "8");
        assert_eq!(input.buffer(), "18");
    }

    #[test]
    fn test_rejects_invalid_characters() {
        let mut input = NumberInput::new("Width", "Meters:", 0.0);
        type_str(&mut input, "1x.2.3-");
        assert_eq!(input.buffer(), "1.23");
    }

    #[test]
    fn test_comma_is_decimal_point() {
        let mut input = NumberInput::new("Width", "Meters:", 0.0);
        type_str(&mut input, "2,75");
        assert_eq!(input.buffer(), "2.75");
    }

    #[test]
    fn test_empty_submits_zero() {
        let mut input = NumberInput::new("Width", "Meters:", 3.2);
        for _ in 0..4 {
            press(&mut input, KeyCode::Backspace);
        }
        assert_eq!(
            press(&mut input, KeyCode::Enter),
            Some(ComponentEvent::ValueSubmitted(0.0))
        );
    }

    #[test]
    fn test_negative_passes_through() {
        let mut input = NumberInput::new("Width", "Meters:", 1.0);
        type_str(&mut input, "-3");
        assert_eq!(
            press(&mut input, KeyCode::Enter),
            Some(ComponentEvent::ValueSubmitted(-3.0))
        );
    }

    #[test]
    fn test_arrow_steps() {
        let mut input = NumberInput::new("Width", "Meters:", 0.05);
        press(&mut input, KeyCode::Up);
        assert_eq!(input.buffer(), "0.15");
        press(&mut input, KeyCode::Down);
        press(&mut input, KeyCode::Down);
        assert_eq!(input.buffer(), "0");
    }

    #[test]
    fn test_escape_cancels() {
        let mut input = NumberInput::new("Width", "Meters:", 1.0);
        assert_eq!(
            press(&mut input, KeyCode::Esc),
            Some(ComponentEvent::Cancelled)
        );
    }
}
