//! Action handlers organized by category

/// Element editing handlers (add, widths, remove, reorder)
pub mod elements;

/// Element list navigation handlers
pub mod navigation;

/// Popup and overlay management handlers
pub mod popups;

/// Simulation toggle, cancel and quit handlers
pub mod view;
