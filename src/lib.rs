//! Street Section Builder Library
//!
//! This library provides the core of the Street Section Builder: the element
//! palette, the street section state store, preview and simulation layout,
//! configuration, and the terminal user interface.

// Module declarations
pub mod config;
pub mod constants;
pub mod models;
pub mod services;
pub mod shortcuts;
pub mod tui;
