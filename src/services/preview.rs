//! Proportional preview layout.
//!
//! Turns the ordered elements of a section into preview segments. Each
//! segment's share is `width / used_width`; on a terminal the shares are
//! then quantized to whole columns with the largest-remainder method so the
//! columns always add up to the space available.

// Column math converts between f64 shares and u16 terminal cells
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use std::cmp::Ordering;

use crate::models::{StreetElement, StreetSection};

/// One element as drawn in the preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSegment<'a> {
    /// Element this segment represents
    pub element: &'a StreetElement,
    /// Share of the used width, 0-100
    pub percent: f64,
    /// Terminal columns allocated to the segment
    pub columns: u16,
}

impl PreviewSegment<'_> {
    /// Hover-style description, e.g. "Car lane: 3.20 m".
    #[must_use]
    pub fn tooltip(&self) -> String {
        format!("{}: {:.2} m", self.element.label, self.element.width)
    }

    /// Short width caption, e.g. "3.2m".
    #[must_use]
    pub fn caption(&self) -> String {
        format!("{:.1}m", self.element.width)
    }
}

/// Builds the preview segments for a section laid out over `available_columns`.
#[must_use]
pub fn build_segments(section: &StreetSection, available_columns: u16) -> Vec<PreviewSegment<'_>> {
    let widths: Vec<f64> = section.elements().iter().map(|e| e.width).collect();
    let columns = allocate_columns(&widths, available_columns);

    section
        .elements()
        .iter()
        .zip(columns)
        .map(|(element, columns)| PreviewSegment {
            element,
            percent: section.share_of(element),
            columns,
        })
        .collect()
}

/// Splits `available` columns proportionally to `widths`.
///
/// The result always sums to `available`, or to 0 when the widths sum to 0.
/// Leftover columns after flooring go to the largest fractional parts, ties
/// broken left to right.
#[must_use]
pub fn allocate_columns(widths: &[f64], available: u16) -> Vec<u16> {
    let total: f64 = widths.iter().sum();
    if total <= 0.0 || available == 0 {
        return vec![0; widths.len()];
    }

    let exact: Vec<f64> = widths
        .iter()
        .map(|w| w / total * f64::from(available))
        .collect();
    let mut columns: Vec<u16> = exact.iter().map(|e| e.floor() as u16).collect();

    let assigned: u32 = columns.iter().map(|&c| u32::from(c)).sum();
    let mut remainder = u32::from(available).saturating_sub(assigned);

    let mut order: Vec<usize> = (0..widths.len()).collect();
    order.sort_by(|&a, &b| {
        let fa = exact[a] - exact[a].floor();
        let fb = exact[b] - exact[b].floor();
        fb.partial_cmp(&fa).unwrap_or(Ordering::Equal).then(a.cmp(&b))
    });

    for index in order {
        if remainder == 0 {
            break;
        }
        columns[index] += 1;
        remainder -= 1;
    }

    columns
}
