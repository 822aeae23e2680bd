//! Data models for street sections, elements, and the palette.
//!
//! This module contains the core data structures and the section state store.
//! Models are independent of the terminal UI.

pub mod element;
pub mod palette;
pub mod rgb;
pub mod section;

// Re-export all model types
pub use element::{clamp_width, ElementId, StreetElement};
pub use palette::{ElementKind, PaletteEntry, PALETTE};
pub use rgb::RgbColor;
pub use section::{StreetSection, WidthBudget, DEFAULT_WIDTH_LIMIT};
