//! Theme system for consistent UI colors across dark and light modes.
//!
//! This module provides a centralized theme management system that automatically
//! detects the OS theme (dark/light mode) and applies appropriate colors.

use ratatui::style::Color;

use crate::config::ThemeMode;

/// Semantic color theme for the TUI.
///
/// Provides consistent colors across all UI components with support
/// for both dark and light terminal backgrounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    // Primary UI colors
    /// Primary color for borders, titles, and emphasis
    pub primary: Color,
    /// Accent color for highlights, selections, and focus states
    pub accent: Color,
    /// Success state color, used for remaining width
    pub success: Color,
    /// Error state color for destructive actions
    pub error: Color,
    /// Warning state color, used when the section is over the limit
    pub warning: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Muted text color for help text and dim content
    pub text_muted: Color,

    // Backgrounds
    /// Main background color
    pub background: Color,
    /// Surface color for panels and the empty street canvas
    pub surface: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    ///
    /// This uses the `dark-light` crate to detect whether the OS is in
    /// dark or light mode, and returns the matching theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            // Fall back to dark theme for dark mode, unspecified, or errors
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Resolves a configured theme mode, detecting the OS theme for `Auto`.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Creates a dark theme optimized for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::LightRed,

            text: Color::White,
            text_muted: Color::DarkGray,

            background: Color::Black,
            surface: Color::Rgb(30, 30, 30),
        }
    }

    /// Creates a light theme optimized for light terminal backgrounds.
    ///
    /// Accent colors are darkened for contrast on white.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0), // Dark orange for visibility
            success: Color::Rgb(0, 128, 0),  // Dark green
            error: Color::Red,
            warning: Color::Rgb(190, 40, 20),

            text: Color::Black,
            text_muted: Color::Gray,

            background: Color::White,
            surface: Color::Rgb(245, 245, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_dark() {
        let theme = Theme::dark();
        assert_eq!(theme.primary, Color::Cyan);
        assert_eq!(theme.background, Color::Black);
        assert_eq!(theme.text, Color::White);
    }

    #[test]
    fn test_theme_light() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
        assert_eq!(theme.background, Color::White);
        // Yellow is unreadable on white
        assert_ne!(theme.accent, Color::Yellow);
    }

    #[test]
    fn test_from_mode_explicit() {
        assert_eq!(Theme::from_mode(ThemeMode::Dark), Theme::dark());
        assert_eq!(Theme::from_mode(ThemeMode::Light), Theme::light());
    }

    #[test]
    fn test_budget_colors_distinct() {
        for theme in [Theme::dark(), Theme::light()] {
            assert_ne!(theme.success, theme.warning);
            assert_ne!(theme.text, theme.text_muted);
        }
    }
}
