//! Placed street elements.

use uuid::Uuid;

use crate::constants::MAX_WIDTH;
use crate::models::palette::{ElementKind, PaletteEntry};
use crate::models::RgbColor;

/// Identifier of a placed element, unique within a section.
pub type ElementId = Uuid;

/// A lane or strip placed in the street, left to right.
///
/// # Validation
///
/// - `width` is within `0..=MAX_WIDTH` and never NaN (see [`clamp_width`])
/// - `id` is unique within the owning section
#[derive(Debug, Clone, PartialEq)]
pub struct StreetElement {
    /// Unique identifier
    pub id: ElementId,
    /// Element kind
    pub kind: ElementKind,
    /// Display label copied from the palette
    pub label: String,
    /// Swatch color copied from the palette
    pub color: RgbColor,
    /// Width in meters
    pub width: f64,
}

impl StreetElement {
    /// Creates a new element from a palette entry with a fresh id and the default width.
    #[must_use]
    pub fn from_palette(entry: &PaletteEntry) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: entry.kind,
            label: entry.label.to_string(),
            color: entry.color,
            width: entry.default_width,
        }
    }

    /// Overrides the width, clamping it like a user edit would.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = clamp_width(width);
        self
    }
}

/// Coerces a user-supplied width into a valid one.
///
/// Negative values clamp to 0 and values above [`MAX_WIDTH`] clamp to it;
/// NaN and infinities coerce to 0.
#[must_use]
pub fn clamp_width(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, MAX_WIDTH)
    } else {
        0.0
    }
}
