//! Street section state store.
//!
//! `StreetSection` is the single source of truth for the editor: the width
//! limit, the palette selection, the ordered elements, the drag source and
//! the simulation toggle. Every operation is synchronous and total; invalid
//! input is coerced and unknown ids are ignored rather than reported.

use tracing::debug;

use crate::constants::MAX_WIDTH;
use crate::models::element::{clamp_width, ElementId, StreetElement};
use crate::models::palette::{self, ElementKind};

/// Width limit a fresh section starts with, in meters.
pub const DEFAULT_WIDTH_LIMIT: f64 = 16.0;

/// Remaining budget or overage relative to the width limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidthBudget {
    /// Meters still available (zero included)
    Remaining(f64),
    /// Meters beyond the limit (always positive)
    Over(f64),
}

/// Ordered street cross-section plus editor state.
#[derive(Debug, Clone, PartialEq)]
pub struct StreetSection {
    width_limit: f64,
    selected_kind: ElementKind,
    elements: Vec<StreetElement>,
    drag_source: Option<ElementId>,
    simulation: bool,
}

impl StreetSection {
    /// Creates an empty section with the given width limit.
    #[must_use]
    pub fn new(width_limit: f64) -> Self {
        Self {
            width_limit: coerce_number(width_limit),
            selected_kind: ElementKind::Sidewalk,
            elements: Vec::new(),
            drag_source: None,
            simulation: false,
        }
    }

    /// Creates the starter section: sidewalk, bike lane, two car lanes, sidewalk.
    #[must_use]
    pub fn starter(width_limit: f64) -> Self {
        let mut section = Self::new(width_limit);
        for kind in [
            ElementKind::Sidewalk,
            ElementKind::Bike,
            ElementKind::Car,
            ElementKind::Car,
            ElementKind::Sidewalk,
        ] {
            if let Some(entry) = palette::lookup(kind) {
                section.elements.push(StreetElement::from_palette(entry));
            }
        }
        section
    }

    /// Creates a section from pre-built elements. Widths are clamped.
    #[must_use]
    pub fn with_elements(width_limit: f64, elements: Vec<StreetElement>) -> Self {
        let mut section = Self::new(width_limit);
        section.elements = elements
            .into_iter()
            .map(|element| {
                let width = element.width;
                element.with_width(width)
            })
            .collect();
        section
    }

    // === Accessors ===

    /// Total street width the section should fit in.
    #[must_use]
    pub const fn width_limit(&self) -> f64 {
        self.width_limit
    }

    /// Palette kind used by [`StreetSection::add_element`].
    #[must_use]
    pub const fn selected_kind(&self) -> ElementKind {
        self.selected_kind
    }

    /// Elements in left-to-right order.
    #[must_use]
    pub fn elements(&self) -> &[StreetElement] {
        &self.elements
    }

    /// Number of placed elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no elements are placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element currently being dragged, if any.
    #[must_use]
    pub const fn drag_source(&self) -> Option<ElementId> {
        self.drag_source
    }

    /// Whether simulation mode is on.
    #[must_use]
    pub const fn is_simulating(&self) -> bool {
        self.simulation
    }

    /// Finds an element by id.
    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&StreetElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Position of an element in the street.
    #[must_use]
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    // === Derived values ===

    /// Sum of all element widths.
    #[must_use]
    pub fn used_width(&self) -> f64 {
        self.elements.iter().map(|e| e.width).sum()
    }

    /// Width limit minus used width, rounded to centimeters.
    #[must_use]
    pub fn width_difference(&self) -> f64 {
        round_to_centimeters(self.width_limit - self.used_width())
    }

    /// Whether the elements exceed the width limit.
    #[must_use]
    pub fn is_over_limit(&self) -> bool {
        self.width_difference() < 0.0
    }

    /// Remaining budget or overage.
    #[must_use]
    pub fn budget(&self) -> WidthBudget {
        let difference = self.width_difference();
        if difference < 0.0 {
            WidthBudget::Over(-difference)
        } else {
            WidthBudget::Remaining(difference)
        }
    }

    /// Percentage of the used width taken by `element`; 0 when nothing is used.
    #[must_use]
    pub fn share_of(&self, element: &StreetElement) -> f64 {
        let used = self.used_width();
        if used == 0.0 {
            0.0
        } else {
            element.width / used * 100.0
        }
    }

    /// Percentages for every element, in order.
    #[must_use]
    pub fn shares(&self) -> Vec<f64> {
        self.elements.iter().map(|e| self.share_of(e)).collect()
    }

    // === Operations ===

    /// Sets the total width limit. Invalid input coerces to 0 and the
    /// magnitude is capped at [`MAX_WIDTH`].
    pub fn set_width_limit(&mut self, value: f64) {
        self.width_limit = coerce_number(value);
        debug!(limit = self.width_limit, "width limit changed");
    }

    /// Selects the palette kind used by the next add.
    pub fn select_kind(&mut self, kind: ElementKind) {
        self.selected_kind = kind;
    }

    /// Appends a copy of the selected palette entry and returns its id.
    ///
    /// Returns `None` (and changes nothing) if the kind has no palette entry.
    pub fn add_element(&mut self) -> Option<ElementId> {
        let entry = palette::lookup(self.selected_kind)?;
        let element = StreetElement::from_palette(entry);
        let id = element.id;
        debug!(kind = %entry.kind, %id, "element added");
        self.elements.push(element);
        Some(id)
    }

    /// Sets an element's width, clamping negative or invalid input to 0.
    pub fn update_width(&mut self, id: ElementId, value: f64) {
        if let Some(element) = self.elements.iter_mut().find(|e| e.id == id) {
            element.width = clamp_width(value);
            debug!(%id, width = element.width, "element width changed");
        }
    }

    /// Adds `delta` meters to an element's width, clamped at 0.
    pub fn nudge_width(&mut self, id: ElementId, delta: f64) {
        if let Some(current) = self.get(id).map(|e| e.width) {
            self.update_width(id, round_to_centimeters(current + delta));
        }
    }

    /// Removes an element and returns it.
    pub fn remove_element(&mut self, id: ElementId) -> Option<StreetElement> {
        let index = self.index_of(id)?;
        let removed = self.elements.remove(index);
        if self.drag_source == Some(id) {
            self.drag_source = None;
        }
        debug!(%id, kind = %removed.kind, "element removed");
        Some(removed)
    }

    /// Moves `source` to the position currently held by `target`.
    ///
    /// The source is taken out first and reinserted at the target's index,
    /// so moving right lands after the target and moving left lands before it.
    pub fn move_element(&mut self, source: ElementId, target: ElementId) {
        if source == target {
            return;
        }
        let (Some(from), Some(to)) = (self.index_of(source), self.index_of(target)) else {
            return;
        };
        let moved = self.elements.remove(from);
        self.elements.insert(to, moved);
        debug!(%source, from, to, "element moved");
    }

    /// Swaps an element with its left neighbour.
    pub fn move_left(&mut self, id: ElementId) {
        if let Some(index) = self.index_of(id).filter(|&i| i > 0) {
            let target = self.elements[index - 1].id;
            self.move_element(id, target);
        }
    }

    /// Swaps an element with its right neighbour.
    pub fn move_right(&mut self, id: ElementId) {
        if let Some(target) = self
            .index_of(id)
            .and_then(|i| self.elements.get(i + 1))
            .map(|e| e.id)
        {
            self.move_element(id, target);
        }
    }

    /// Records `id` as the drag source. Unknown ids are ignored.
    pub fn begin_drag(&mut self, id: ElementId) {
        if self.index_of(id).is_some() {
            self.drag_source = Some(id);
        }
    }

    /// Drops the drag source onto `target` and clears the drag.
    pub fn drop_on(&mut self, target: ElementId) {
        if let Some(source) = self.drag_source.take() {
            self.move_element(source, target);
        }
    }

    /// Abandons the current drag.
    pub fn cancel_drag(&mut self) {
        self.drag_source = None;
    }

    /// Flips simulation mode and returns the new state.
    pub fn toggle_simulation(&mut self) -> bool {
        self.simulation = !self.simulation;
        debug!(simulation = self.simulation, "simulation toggled");
        self.simulation
    }
}

impl Default for StreetSection {
    fn default() -> Self {
        Self::starter(DEFAULT_WIDTH_LIMIT)
    }
}

/// Rounds to two decimals.
#[must_use]
pub fn round_to_centimeters(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn coerce_number(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(-MAX_WIDTH, MAX_WIDTH)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn ids(section: &StreetSection) -> Vec<ElementId> {
        section.elements().iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_starter_section() {
        let section = StreetSection::default();
        let kinds: Vec<ElementKind> = section.elements().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::Sidewalk,
                ElementKind::Bike,
                ElementKind::Car,
                ElementKind::Car,
                ElementKind::Sidewalk,
            ]
        );
        assert!(approx(section.width_limit(), 16.0));
        assert_eq!(section.selected_kind(), ElementKind::Sidewalk);
        assert!(!section.is_simulating());
        assert!(section.drag_source().is_none());
    }

    #[test]
    fn test_used_and_remaining_width() {
        let section = StreetSection::default();
        assert!(approx(section.used_width(), 13.2));
        assert!(approx(section.width_difference(), 2.8));
        assert!(!section.is_over_limit());
        assert_eq!(section.budget(), WidthBudget::Remaining(2.8));
    }

    #[test]
    fn test_over_limit() {
        let mut section = StreetSection::default();
        section.set_width_limit(12.0);
        assert!(section.is_over_limit());
        assert_eq!(section.budget(), WidthBudget::Over(1.2));
    }

    #[test]
    fn test_exact_fit_is_not_over() {
        let mut section = StreetSection::default();
        section.set_width_limit(13.2);
        assert!(!section.is_over_limit());
        assert_eq!(section.budget(), WidthBudget::Remaining(0.0));
    }

    #[test]
    fn test_set_width_limit_coerces_invalid() {
        let mut section = StreetSection::default();
        section.set_width_limit(f64::NAN);
        assert!(approx(section.width_limit(), 0.0));
    }

    #[test]
    fn test_set_width_limit_caps_magnitude() {
        let mut section = StreetSection::default();
        section.set_width_limit(1e308);
        assert!(approx(section.width_limit(), MAX_WIDTH));
        section.set_width_limit(-1e308);
        assert!(approx(section.width_limit(), -MAX_WIDTH));
    }

    #[test]
    fn test_huge_widths_keep_used_width_finite() {
        let mut section = StreetSection::default();
        let ids = ids(&section);
        section.update_width(ids[0], 1e308);
        section.update_width(ids[1], 1e308);
        assert!(section.used_width().is_finite());
        let total: f64 = section.shares().iter().sum();
        assert!((total - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_add_uses_selected_kind() {
        let mut section = StreetSection::new(20.0);
        section.select_kind(ElementKind::Bus);
        let id = section.add_element().unwrap();
        let added = section.get(id).unwrap();
        assert_eq!(added.kind, ElementKind::Bus);
        assert!(approx(added.width, 3.4));
        assert_eq!(section.index_of(id), Some(0));
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut section = StreetSection::default();
        section.select_kind(ElementKind::Median);
        let id = section.add_element().unwrap();
        assert_eq!(section.index_of(id), Some(5));
    }

    #[test]
    fn test_update_width_clamps() {
        let mut section = StreetSection::default();
        let id = section.elements()[1].id;
        section.update_width(id, -3.0);
        assert!(approx(section.get(id).unwrap().width, 0.0));
        section.update_width(id, 2.25);
        assert!(approx(section.get(id).unwrap().width, 2.25));
    }

    #[test]
    fn test_update_width_unknown_id_is_noop() {
        let mut section = StreetSection::default();
        let before = section.clone();
        section.update_width(uuid::Uuid::new_v4(), 9.0);
        assert_eq!(section, before);
    }

    #[test]
    fn test_nudge_width() {
        let mut section = StreetSection::default();
        let id = section.elements()[0].id;
        section.nudge_width(id, 0.1);
        assert!(approx(section.get(id).unwrap().width, 2.6));
        section.nudge_width(id, -5.0);
        assert!(approx(section.get(id).unwrap().width, 0.0));
    }

    #[test]
    fn test_remove_element() {
        let mut section = StreetSection::default();
        let id = section.elements()[2].id;
        let removed = section.remove_element(id).unwrap();
        assert_eq!(removed.kind, ElementKind::Car);
        assert_eq!(section.len(), 4);
        assert!(section.get(id).is_none());
        assert!(section.remove_element(id).is_none());
    }

    #[test]
    fn test_remove_clears_drag_source() {
        let mut section = StreetSection::default();
        let id = section.elements()[0].id;
        section.begin_drag(id);
        section.remove_element(id);
        assert!(section.drag_source().is_none());
    }

    #[test]
    fn test_move_element_right_lands_at_target_index() {
        let mut section = StreetSection::default();
        let before = ids(&section);
        section.move_element(before[0], before[3]);
        assert_eq!(
            ids(&section),
            vec![before[1], before[2], before[3], before[0], before[4]]
        );
    }

    #[test]
    fn test_move_element_left() {
        let mut section = StreetSection::default();
        let before = ids(&section);
        section.move_element(before[4], before[1]);
        assert_eq!(
            ids(&section),
            vec![before[0], before[4], before[1], before[2], before[3]]
        );
    }

    #[test]
    fn test_move_element_noops() {
        let mut section = StreetSection::default();
        let before = section.clone();
        let first = section.elements()[0].id;
        section.move_element(first, first);
        section.move_element(first, uuid::Uuid::new_v4());
        section.move_element(uuid::Uuid::new_v4(), first);
        assert_eq!(section, before);
    }

    #[test]
    fn test_move_left_and_right() {
        let mut section = StreetSection::default();
        let before = ids(&section);
        section.move_right(before[0]);
        assert_eq!(ids(&section)[1], before[0]);
        section.move_left(before[0]);
        assert_eq!(ids(&section), before);

        // Edges are no-ops
        section.move_left(before[0]);
        section.move_right(before[4]);
        assert_eq!(ids(&section), before);
    }

    #[test]
    fn test_drag_and_drop() {
        let mut section = StreetSection::default();
        let before = ids(&section);
        section.begin_drag(before[1]);
        assert_eq!(section.drag_source(), Some(before[1]));
        section.drop_on(before[4]);
        assert!(section.drag_source().is_none());
        assert_eq!(ids(&section)[4], before[1]);
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let mut section = StreetSection::default();
        let before = section.clone();
        let target = section.elements()[2].id;
        section.drop_on(target);
        assert_eq!(section, before);
    }

    #[test]
    fn test_begin_drag_unknown_id_ignored() {
        let mut section = StreetSection::default();
        section.begin_drag(uuid::Uuid::new_v4());
        assert!(section.drag_source().is_none());
    }

    #[test]
    fn test_cancel_drag() {
        let mut section = StreetSection::default();
        let id = section.elements()[0].id;
        section.begin_drag(id);
        section.cancel_drag();
        assert!(section.drag_source().is_none());
    }

    #[test]
    fn test_toggle_simulation() {
        let mut section = StreetSection::default();
        assert!(section.toggle_simulation());
        assert!(section.is_simulating());
        assert!(!section.toggle_simulation());
    }

    #[test]
    fn test_shares_of_empty_and_zero_width() {
        let section = StreetSection::new(16.0);
        assert!(section.shares().is_empty());

        let mut section = StreetSection::default();
        let all: Vec<ElementId> = ids(&section);
        for id in all {
            section.update_width(id, 0.0);
        }
        assert!(section.shares().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_with_elements_clamps_widths() {
        let entry = palette::lookup(ElementKind::Car).unwrap();
        let mut element = StreetElement::from_palette(entry);
        element.width = -2.0;
        let section = StreetSection::with_elements(10.0, vec![element]);
        assert!(approx(section.elements()[0].width, 0.0));
    }

    #[test]
    fn test_round_to_centimeters() {
        assert!(approx(round_to_centimeters(2.800_000_000_000_000_7), 2.8));
        assert!(approx(round_to_centimeters(-1.204_999), -1.2));
    }
}
