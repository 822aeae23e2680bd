//! Fixed catalog of street element archetypes.
//!
//! The palette is the only source of new elements: adding an element copies
//! one of these entries and gives it a fresh id.

use std::fmt;
use std::time::Duration;

use crate::models::RgbColor;

/// Kind of street element, ordered as offered in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Pedestrian sidewalk
    Sidewalk,
    /// Bike lane
    Bike,
    /// General traffic lane
    Car,
    /// Dedicated bus lane
    Bus,
    /// On-street parking
    Parking,
    /// Median or buffer strip
    Median,
}

impl ElementKind {
    /// All kinds in palette order.
    pub const ALL: [Self; 6] = [
        Self::Sidewalk,
        Self::Bike,
        Self::Car,
        Self::Bus,
        Self::Parking,
        Self::Median,
    ];

    /// Stable lowercase identifier.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Sidewalk => "sidewalk",
            Self::Bike => "bike",
            Self::Car => "car",
            Self::Bus => "bus",
            Self::Parking => "parking",
            Self::Median => "median",
        }
    }

    /// Icon drawn in the simulation overlay.
    #[must_use]
    pub const fn traffic_icon(&self) -> &'static str {
        match self {
            Self::Sidewalk => "🚶",
            Self::Bike => "🚲",
            Self::Car => "🚗",
            Self::Bus => "🚌",
            Self::Parking => "🚙",
            Self::Median => "🌿",
        }
    }

    /// Length of one simulation loop, or `None` for static elements.
    #[must_use]
    pub const fn animation_period(&self) -> Option<Duration> {
        match self {
            Self::Bus => Some(Duration::from_secs(7)),
            Self::Car => Some(Duration::from_secs(10)),
            Self::Bike => Some(Duration::from_secs(16)),
            Self::Sidewalk | Self::Parking | Self::Median => None,
        }
    }

    /// Next kind in palette order, wrapping around.
    #[must_use]
    pub fn next(&self) -> Self {
        let index = self.palette_index();
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Previous kind in palette order, wrapping around.
    #[must_use]
    pub fn previous(&self) -> Self {
        let index = self.palette_index();
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Position of this kind in [`ElementKind::ALL`].
    #[must_use]
    pub fn palette_index(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).unwrap_or(0)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Immutable archetype an element is copied from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteEntry {
    /// Element kind
    pub kind: ElementKind,
    /// Human-readable label
    pub label: &'static str,
    /// Swatch color
    pub color: RgbColor,
    /// Width in meters given to newly added elements
    pub default_width: f64,
}

/// The six archetypes offered for addition.
pub const PALETTE: [PaletteEntry; 6] = [
    PaletteEntry {
        kind: ElementKind::Sidewalk,
        label: "Sidewalk",
        color: RgbColor::new(0xb9, 0xb7, 0xb3),
        default_width: 2.5,
    },
    PaletteEntry {
        kind: ElementKind::Bike,
        label: "Bike lane",
        color: RgbColor::new(0x4c, 0xaf, 0x50),
        default_width: 1.8,
    },
    PaletteEntry {
        kind: ElementKind::Car,
        label: "Car lane",
        color: RgbColor::new(0x5c, 0x6b, 0xc0),
        default_width: 3.2,
    },
    PaletteEntry {
        kind: ElementKind::Bus,
        label: "Bus lane",
        color: RgbColor::new(0xef, 0x6c, 0x00),
        default_width: 3.4,
    },
    PaletteEntry {
        kind: ElementKind::Parking,
        label: "Parking lane",
        color: RgbColor::new(0x8d, 0x6e, 0x63),
        default_width: 2.4,
    },
    PaletteEntry {
        kind: ElementKind::Median,
        label: "Median / buffer",
        color: RgbColor::new(0xff, 0xca, 0x28),
        default_width: 1.6,
    },
];

/// Looks up the palette entry for a kind.
#[must_use]
pub fn lookup(kind: ElementKind) -> Option<&'static PaletteEntry> {
    PALETTE.iter().find(|entry| entry.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_an_entry() {
        for kind in ElementKind::ALL {
            let entry = lookup(kind).unwrap();
            assert_eq!(entry.kind, kind);
            assert!(entry.default_width > 0.0);
        }
        assert_eq!(PALETTE.len(), ElementKind::ALL.len());
    }

    #[test]
    fn test_palette_values() {
        let bus = lookup(ElementKind::Bus).unwrap();
        assert_eq!(bus.label, "Bus lane");
        assert_eq!(bus.color, RgbColor::new(0xef, 0x6c, 0x00));
        assert!((bus.default_width - 3.4).abs() < f64::EPSILON);

        let median = lookup(ElementKind::Median).unwrap();
        assert_eq!(median.label, "Median / buffer");
        assert_eq!(median.color, RgbColor::new(0xff, 0xca, 0x28));
    }

    #[test]
    fn test_animation_periods() {
        assert_eq!(
            ElementKind::Bus.animation_period(),
            Some(Duration::from_secs(7))
        );
        assert_eq!(
            ElementKind::Car.animation_period(),
            Some(Duration::from_secs(10))
        );
        assert_eq!(
            ElementKind::Bike.animation_period(),
            Some(Duration::from_secs(16))
        );
        assert_eq!(ElementKind::Sidewalk.animation_period(), None);
        assert_eq!(ElementKind::Parking.animation_period(), None);
        assert_eq!(ElementKind::Median.animation_period(), None);
    }

    #[test]
    fn test_kind_cycling_wraps() {
        assert_eq!(ElementKind::Sidewalk.next(), ElementKind::Bike);
        assert_eq!(ElementKind::Median.next(), ElementKind::Sidewalk);
        assert_eq!(ElementKind::Sidewalk.previous(), ElementKind::Median);
        assert_eq!(ElementKind::Bus.previous(), ElementKind::Car);
    }

    #[test]
    fn test_display_uses_id() {
        assert_eq!(ElementKind::Parking.to_string(), "parking");
    }
}
