//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and version information.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Street Section Builder";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "street-section";

/// Directory name under the platform config dir.
pub const CONFIG_DIR_NAME: &str = "StreetSection";

/// Width change applied by the nudge shortcuts, in meters.
pub const WIDTH_STEP: f64 = 0.1;

/// Largest width accepted for an element or the street limit, in meters.
pub const MAX_WIDTH: f64 = 1_000.0;
