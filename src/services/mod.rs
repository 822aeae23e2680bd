//! Service layer for derived presentation logic.
//!
//! These services compute what the terminal UI draws from the section state:
//! proportional segment layout and simulation timing.

pub mod preview;
pub mod simulation;

// Re-export commonly used types and functions
pub use preview::{allocate_columns, build_segments, PreviewSegment};
pub use simulation::{animation_phase, icon_row, SimulationClock};
